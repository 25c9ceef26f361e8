//! 時間帯選択ダイアログの Model/Msg 定義

use crate::slot::{QuickPreset, TimeRangeSelector};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

// ============================================================================
// Focus（フォーカス位置）
// ============================================================================

/// フォーカス可能な要素（Tab での巡回順）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Start,
    End,
    Add,
    Selected,
    Presets,
    Save,
    Cancel,
}

impl Focus {
    pub fn all() -> &'static [Focus] {
        &[
            Focus::Start,
            Focus::End,
            Focus::Add,
            Focus::Selected,
            Focus::Presets,
            Focus::Save,
            Focus::Cancel,
        ]
    }

    pub fn index(&self) -> usize {
        Focus::all().iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        let all = Focus::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Focus::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

// ============================================================================
// Model（画面状態）
// ============================================================================

/// ダイアログの画面状態
pub struct Model {
    pub selector: TimeRangeSelector,
    pub focus: Focus,
    pub start_state: ListState,
    pub end_state: ListState,
    pub selected_state: ListState,
    /// クイック追加グリッドのカーソル位置
    pub preset_cursor: usize,
}

impl Model {
    /// 指定した曜日でダイアログを開いた状態を作成
    pub fn new(day: &str) -> Self {
        let selector = TimeRangeSelector::opened(day);

        let mut start_state = ListState::default();
        start_state.select(selector.candidate_start().map(|l| l.index()));
        let mut end_state = ListState::default();
        end_state.select(selector.candidate_end().map(|l| l.index()));

        Self {
            selector,
            focus: Focus::Start,
            start_state,
            end_state,
            selected_state: ListState::default(),
            preset_cursor: 0,
        }
    }

    /// カーソル位置の定型時間帯
    pub fn highlighted_preset(&self) -> QuickPreset {
        let presets = QuickPreset::all();
        presets[self.preset_cursor.min(presets.len() - 1)]
    }

    /// 選択リストでハイライト中の時間帯
    pub fn highlighted_range(&self) -> Option<&str> {
        let idx = self.selected_state.selected()?;
        self.selector.selection().get(idx).map(String::as_str)
    }

    /// フォーカスを移せるか（選択リストは空の間は表示されない）
    pub fn is_focusable(&self, focus: Focus) -> bool {
        focus != Focus::Selected || !self.selector.selection().is_empty()
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

/// ダイアログへのメッセージ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    FocusNext,
    FocusPrev,
    Up,
    Down,
    /// フォーカス中の要素を実行
    Activate,
    /// ハイライト中の時間帯を削除
    Delete,
    /// 候補を追加（ショートカット）
    Add,
    /// 保存（ショートカット）
    Save,
    Cancel,
}

/// キーコードをメッセージに変換
pub fn key_to_msg(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Tab => Some(Msg::FocusNext),
        KeyCode::BackTab => Some(Msg::FocusPrev),
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::Activate),
        KeyCode::Delete | KeyCode::Char('d') => Some(Msg::Delete),
        KeyCode::Char('a') => Some(Msg::Add),
        KeyCode::Char('s') => Some(Msg::Save),
        KeyCode::Esc | KeyCode::Char('q') => Some(Msg::Cancel),
        _ => None,
    }
}
