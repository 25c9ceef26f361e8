//! クイック追加用の定型時間帯

use super::label::TimeLabel;
use super::range::TimeRange;
use crate::error::PcError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// `range()` から生成した文字列テーブル（`QuickPreset::all()` の順）
static PRESET_STRINGS: LazyLock<Vec<String>> = LazyLock::new(|| {
    QuickPreset::all()
        .iter()
        .map(|p| p.range().to_string())
        .collect()
});

/// よく使われる時間帯（表示順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickPreset {
    /// 09:00-12:00
    Morning,
    /// 14:00-17:00
    Afternoon,
    /// 10:00-11:00
    LateMorning,
    /// 15:00-16:00
    MidAfternoon,
    /// 08:00-09:00
    EarlyMorning,
    /// 17:00-18:00
    Evening,
}

impl QuickPreset {
    pub fn all() -> &'static [QuickPreset] {
        &[
            QuickPreset::Morning,
            QuickPreset::Afternoon,
            QuickPreset::LateMorning,
            QuickPreset::MidAfternoon,
            QuickPreset::EarlyMorning,
            QuickPreset::Evening,
        ]
    }

    pub fn range(&self) -> TimeRange {
        let (start, end) = match self {
            QuickPreset::Morning => (18, 24),
            QuickPreset::Afternoon => (28, 34),
            QuickPreset::LateMorning => (20, 22),
            QuickPreset::MidAfternoon => (30, 32),
            QuickPreset::EarlyMorning => (16, 18),
            QuickPreset::Evening => (34, 36),
        };
        TimeRange::ordered(TimeLabel::at(start), TimeLabel::at(end))
    }

    /// 選択リストに格納される文字列（`HH:MM-HH:MM`）
    pub fn as_str(&self) -> &'static str {
        &PRESET_STRINGS[*self as usize]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuickPreset::Morning => "Morning",
            QuickPreset::Afternoon => "Afternoon",
            QuickPreset::LateMorning => "Late morning",
            QuickPreset::MidAfternoon => "Mid afternoon",
            QuickPreset::EarlyMorning => "Early morning",
            QuickPreset::Evening => "Evening",
        }
    }
}

impl fmt::Display for QuickPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickPreset {
    type Err = PcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickPreset::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PcError::UnknownPreset(s.to_string()))
    }
}
