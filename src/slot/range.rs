//! 時間帯（開始 < 終了 の時刻ラベルの組）

use super::label::TimeLabel;
use crate::error::{PcError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `HH:MM-HH:MM` で表される時間帯
///
/// 常に `start < end` を満たす。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: TimeLabel,
    end: TimeLabel,
}

impl TimeRange {
    /// 新しい時間帯を作成（開始が終了以降ならエラー）
    pub fn new(start: TimeLabel, end: TimeLabel) -> Result<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(PcError::InvalidTimeRange(format!("{start}-{end}")))
        }
    }

    /// 定数テーブル用。呼び出し側が `start < end` を保証する
    pub(crate) const fn ordered(start: TimeLabel, end: TimeLabel) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> TimeLabel {
        self.start
    }

    pub fn end(&self) -> TimeLabel {
        self.end
    }

    /// 長さ（分）
    pub fn duration_minutes(&self) -> u32 {
        self.end().minutes() - self.start().minutes()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for TimeRange {
    type Err = PcError;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| PcError::InvalidTimeRange(s.to_string()))?;
        TimeRange::new(start.parse()?, end.parse()?)
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 表示用の長さ（`1h`, `1h 30m`, `30m`）
pub fn format_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
