//! 時刻ラベル
//!
//! `HH:MM`（ゼロ埋め24時間表記、分は 00 または 30）。
//! 内部表現は 0 時からの30分単位のインデックスで、順序は時系列順と一致する。

use crate::error::{PcError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// 1日あたりのラベル数（30分刻み）
pub const LABEL_COUNT: usize = 48;

/// 開始時刻の初期値（09:00）
pub const DEFAULT_START: TimeLabel = TimeLabel(18);

/// 終了時刻の初期値（10:00）
pub const DEFAULT_END: TimeLabel = TimeLabel(20);

/// 表示用文字列テーブル（プロセス内で一度だけ生成）
static LABEL_STRINGS: LazyLock<Vec<String>> = LazyLock::new(|| {
    (0..LABEL_COUNT)
        .map(|i| format!("{:02}:{:02}", i / 2, (i % 2) * 30))
        .collect()
});

/// 全ラベル（00:00, 00:30, ..., 23:30）
static ALL_LABELS: LazyLock<Vec<TimeLabel>> =
    LazyLock::new(|| (0..LABEL_COUNT as u8).map(TimeLabel).collect());

/// 30分刻みの時刻ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeLabel(u8);

impl TimeLabel {
    /// 固定テーブル全体
    pub fn all() -> &'static [TimeLabel] {
        &ALL_LABELS
    }

    /// インデックスから取得（範囲外は None）
    pub fn from_index(index: usize) -> Option<Self> {
        ALL_LABELS.get(index).copied()
    }

    /// 時・分から取得（分は 0 か 30 のみ）
    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour >= 24 {
            return None;
        }
        match minute {
            0 => Some(TimeLabel(hour * 2)),
            30 => Some(TimeLabel(hour * 2 + 1)),
            _ => None,
        }
    }

    pub(crate) const fn at(index: u8) -> Self {
        assert!((index as usize) < LABEL_COUNT);
        TimeLabel(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 0時からの経過分
    pub fn minutes(self) -> u32 {
        u32::from(self.0) * 30
    }

    pub fn as_str(self) -> &'static str {
        LABEL_STRINGS[self.index()].as_str()
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeLabel {
    type Err = PcError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PcError::InvalidTimeLabel(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(invalid());
        }
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        TimeLabel::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl Serialize for TimeLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "label_test.rs"]
mod tests;
