//! テキストで記述した操作列の適用
//!
//! 対話端末がない環境（CI、シェルスクリプト）から同じ選択操作を再現するために使う。
//!
//! | トークン              | 操作                           |
//! |-----------------------|--------------------------------|
//! | `start=HH:MM`         | 開始時刻を設定                 |
//! | `end=HH:MM`           | 終了時刻を設定                 |
//! | `start=` / `end=`     | 開始 / 終了時刻を空にする      |
//! | `add`                 | 現在の候補を追加               |
//! | `add=HH:MM-HH:MM`     | 候補を設定してから追加         |
//! | `quick=HH:MM-HH:MM`   | 定型時間帯を追加               |
//! | `remove=HH:MM-HH:MM`  | 時間帯を削除                   |
//! | `commit` / `cancel`   | 確定 / 破棄                    |

use super::host::SlotHost;
use super::label::TimeLabel;
use super::preset::QuickPreset;
use super::range::TimeRange;
use super::selector::TimeRangeSelector;
use crate::error::{PcError, Result};
use std::fmt;
use std::str::FromStr;

/// 選択ダイアログへの1操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetStart(TimeLabel),
    SetEnd(TimeLabel),
    ClearStart,
    ClearEnd,
    AddCandidate,
    /// 候補を設定してから追加する。順序は検証しない（逆順ならダイアログ側で無視される）
    AddRange(TimeLabel, TimeLabel),
    Quick(QuickPreset),
    Remove(TimeRange),
    Commit,
    Cancel,
}

impl FromStr for Action {
    type Err = PcError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let (verb, arg) = match token.split_once('=') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (token, None),
        };

        let action = match (verb, arg) {
            ("start", Some("")) => Action::ClearStart,
            ("end", Some("")) => Action::ClearEnd,
            ("start", Some(arg)) => Action::SetStart(arg.parse()?),
            ("end", Some(arg)) => Action::SetEnd(arg.parse()?),
            ("add", None) => Action::AddCandidate,
            ("add", Some(arg)) => {
                let (start, end) = arg
                    .split_once('-')
                    .ok_or_else(|| PcError::InvalidTimeRange(arg.to_string()))?;
                Action::AddRange(start.parse()?, end.parse()?)
            }
            ("quick", Some(arg)) => Action::Quick(arg.parse()?),
            ("remove", Some(arg)) => Action::Remove(arg.parse()?),
            ("commit", None) => Action::Commit,
            ("cancel", None) => Action::Cancel,
            _ => return Err(PcError::InvalidAction(token.to_string())),
        };
        Ok(action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SetStart(label) => write!(f, "start={label}"),
            Action::SetEnd(label) => write!(f, "end={label}"),
            Action::ClearStart => f.write_str("start="),
            Action::ClearEnd => f.write_str("end="),
            Action::AddCandidate => f.write_str("add"),
            Action::AddRange(start, end) => write!(f, "add={start}-{end}"),
            Action::Quick(preset) => write!(f, "quick={preset}"),
            Action::Remove(range) => write!(f, "remove={range}"),
            Action::Commit => f.write_str("commit"),
            Action::Cancel => f.write_str("cancel"),
        }
    }
}

/// トークン列をまとめて解釈（最初の不正トークンでエラー）
pub fn parse_actions<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Action>> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// 操作列を順に適用する
///
/// 閉じた後の操作はエラー。`commit` も `cancel` も含まない場合は最後に `cancel` する。
pub fn run_script<H: SlotHost + ?Sized>(
    selector: &mut TimeRangeSelector,
    actions: &[Action],
    host: &mut H,
) -> Result<()> {
    for action in actions {
        if !selector.is_open() {
            return Err(PcError::SelectorClosed(action.to_string()));
        }
        tracing::debug!(%action, "applying action");

        match action {
            Action::SetStart(label) => selector.set_candidate_start(*label),
            Action::SetEnd(label) => selector.set_candidate_end(*label),
            Action::ClearStart => selector.clear_candidate_start(),
            Action::ClearEnd => selector.clear_candidate_end(),
            Action::AddCandidate => {
                selector.add_candidate_range();
            }
            Action::AddRange(start, end) => {
                selector.set_candidate_start(*start);
                selector.set_candidate_end(*end);
                selector.add_candidate_range();
            }
            Action::Quick(preset) => {
                selector.add_quick_range(*preset);
            }
            Action::Remove(range) => {
                selector.remove_range(&range.to_string());
            }
            Action::Commit => {
                selector.commit(host);
            }
            Action::Cancel => {
                selector.cancel(host);
            }
        }
    }

    if selector.is_open() {
        tracing::debug!("script ended without commit, cancelling");
        selector.cancel(host);
    }
    Ok(())
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
