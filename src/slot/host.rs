//! 選択ダイアログのホスト側インターフェース

use serde::Serialize;

/// ダイアログを開き、確定結果を受け取る側
///
/// `commit` では `on_save` → `on_close` の順に1回ずつ、
/// `cancel` では `on_close` のみが呼ばれる。
pub trait SlotHost {
    /// 確定した時間帯を受け取る（`day` は表示用ラベルのみ）
    fn on_save(&mut self, day: &str, ranges: Vec<String>);

    /// ダイアログが閉じた
    fn on_close(&mut self);
}

/// 1回分の確定結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedSlots {
    pub day: String,
    pub slots: Vec<String>,
}

/// 受け取った内容をそのまま記録するホスト
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub saved: Vec<SavedSlots>,
    pub close_count: usize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直近の確定結果
    pub fn last_saved(&self) -> Option<&SavedSlots> {
        self.saved.last()
    }
}

impl SlotHost for RecordingHost {
    fn on_save(&mut self, day: &str, ranges: Vec<String>) {
        self.saved.push(SavedSlots {
            day: day.to_string(),
            slots: ranges,
        });
    }

    fn on_close(&mut self) {
        self.close_count += 1;
    }
}
