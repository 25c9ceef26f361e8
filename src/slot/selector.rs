//! 時間帯選択ダイアログの状態
//!
//! 候補の開始・終了時刻と、確定待ちの時間帯リストを保持する。
//! リストは挿入順を保ち、同じ `start-end` 文字列を2回含まない。
//! `commit` / `cancel` のどちらで閉じても初期状態に戻る。

use super::host::SlotHost;
use super::label::{TimeLabel, DEFAULT_END, DEFAULT_START};
use super::preset::QuickPreset;
use super::range::TimeRange;

/// 時間帯選択ダイアログ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRangeSelector {
    open: bool,
    day: String,
    candidate_start: Option<TimeLabel>,
    candidate_end: Option<TimeLabel>,
    selection: Vec<String>,
}

impl Default for TimeRangeSelector {
    fn default() -> Self {
        Self {
            open: false,
            day: String::new(),
            candidate_start: Some(DEFAULT_START),
            candidate_end: Some(DEFAULT_END),
            selection: Vec::new(),
        }
    }
}

impl TimeRangeSelector {
    /// 閉じた状態で作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定した曜日ラベルで開いた状態で作成
    pub fn opened(day: impl Into<String>) -> Self {
        let mut selector = Self::new();
        selector.open(day);
        selector
    }

    // ========================================================================
    // 表示制御
    // ========================================================================

    /// ダイアログを開く
    ///
    /// 既に開いている場合は曜日ラベルだけを差し替え、選択状態は保持する。
    pub fn open(&mut self, day: impl Into<String>) {
        self.day = day.into();
        if !self.open {
            self.reset();
            self.open = true;
            tracing::debug!(day = %self.day, "time range selector opened");
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    // ========================================================================
    // 候補時刻
    // ========================================================================

    pub fn candidate_start(&self) -> Option<TimeLabel> {
        self.candidate_start
    }

    pub fn candidate_end(&self) -> Option<TimeLabel> {
        self.candidate_end
    }

    /// 開始時刻を設定（この時点では検証しない）
    pub fn set_candidate_start(&mut self, label: TimeLabel) {
        if self.open {
            self.candidate_start = Some(label);
        }
    }

    /// 終了時刻を設定（この時点では検証しない）
    pub fn set_candidate_end(&mut self, label: TimeLabel) {
        if self.open {
            self.candidate_end = Some(label);
        }
    }

    pub fn clear_candidate_start(&mut self) {
        if self.open {
            self.candidate_start = None;
        }
    }

    pub fn clear_candidate_end(&mut self) {
        if self.open {
            self.candidate_end = None;
        }
    }

    /// 現在の候補が時間帯として成立する場合のみ返す
    pub fn candidate_range(&self) -> Option<TimeRange> {
        let (start, end) = (self.candidate_start?, self.candidate_end?);
        TimeRange::new(start, end).ok()
    }

    /// 「追加」ボタンを有効にするかどうか
    pub fn can_add_candidate(&self) -> bool {
        self.open && self.candidate_range().is_some()
    }

    // ========================================================================
    // 選択リストの操作
    // ========================================================================

    /// 候補の時間帯を追加
    ///
    /// 候補が両方あり開始 < 終了の場合のみ追加する。それ以外は何もしない。
    /// UI 側も同じ条件で「追加」を無効化しているが、ここでも判定する。
    pub fn add_candidate_range(&mut self) -> bool {
        if !self.open {
            return false;
        }
        let Some(range) = self.candidate_range() else {
            tracing::debug!(
                start = ?self.candidate_start.map(TimeLabel::as_str),
                end = ?self.candidate_end.map(TimeLabel::as_str),
                "candidate range ignored"
            );
            return false;
        };
        self.push_unique(range.to_string())
    }

    /// 定型時間帯を追加（追加済みなら何もしない）
    pub fn add_quick_range(&mut self, preset: QuickPreset) -> bool {
        if !self.open {
            return false;
        }
        self.push_unique(preset.as_str().to_string())
    }

    /// 定型時間帯がまだ選択可能か
    pub fn is_preset_available(&self, preset: QuickPreset) -> bool {
        !self.contains(preset.as_str())
    }

    /// 時間帯を削除（存在しなければ何もしない）
    pub fn remove_range(&mut self, value: &str) -> bool {
        if !self.open {
            return false;
        }
        match self.selection.iter().position(|s| s == value) {
            Some(idx) => {
                self.selection.remove(idx);
                tracing::debug!(range = value, "range removed");
                true
            }
            None => false,
        }
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn contains(&self, value: &str) -> bool {
        self.selection.iter().any(|s| s == value)
    }

    /// 「保存」ボタンを有効にするかどうか
    pub fn can_save(&self) -> bool {
        self.open && !self.selection.is_empty()
    }

    // ========================================================================
    // 終了
    // ========================================================================

    /// 選択内容をホストに渡して閉じる
    ///
    /// 閉じている場合は何もせず false を返す。
    pub fn commit<H: SlotHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.open {
            return false;
        }
        let ranges = std::mem::take(&mut self.selection);
        tracing::info!(day = %self.day, count = ranges.len(), "time slots committed");
        host.on_save(&self.day, ranges);
        self.close(host);
        true
    }

    /// 選択内容を破棄して閉じる
    pub fn cancel<H: SlotHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.open {
            return false;
        }
        tracing::info!(
            day = %self.day,
            discarded = self.selection.len(),
            "time slot selection cancelled"
        );
        self.close(host);
        true
    }

    fn close<H: SlotHost + ?Sized>(&mut self, host: &mut H) {
        self.reset();
        self.open = false;
        self.day.clear();
        host.on_close();
    }

    /// 候補と選択リストを初期値に戻す
    fn reset(&mut self) {
        self.candidate_start = Some(DEFAULT_START);
        self.candidate_end = Some(DEFAULT_END);
        self.selection.clear();
    }

    fn push_unique(&mut self, value: String) -> bool {
        if self.contains(&value) {
            return false;
        }
        tracing::debug!(range = %value, "range added");
        self.selection.push(value);
        true
    }
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod tests;

#[cfg(test)]
#[path = "selector_proptests.rs"]
mod proptests;
