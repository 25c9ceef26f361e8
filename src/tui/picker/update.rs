//! 時間帯選択ダイアログの update（状態遷移ロジック）

use super::model::{Focus, Model, Msg};
use crate::slot::{QuickPreset, SlotHost, TimeLabel, DEFAULT_END, DEFAULT_START};

/// メッセージに応じて状態を更新
pub fn update<H: SlotHost + ?Sized>(model: &mut Model, msg: Msg, host: &mut H) {
    if !model.selector.is_open() {
        return;
    }

    match msg {
        Msg::FocusNext => move_focus(model, Focus::next),
        Msg::FocusPrev => move_focus(model, Focus::prev),
        Msg::Up => step(model, -1),
        Msg::Down => step(model, 1),
        Msg::Activate => activate(model, host),
        Msg::Delete => {
            if model.focus == Focus::Selected {
                remove_highlighted(model);
            }
        }
        Msg::Add => add_candidate(model),
        Msg::Save => save(model, host),
        Msg::Cancel => {
            model.selector.cancel(host);
        }
    }
}

/// 表示されている要素の中で次（前）にフォーカスを移す
fn move_focus(model: &mut Model, advance: fn(&Focus) -> Focus) {
    let mut focus = advance(&model.focus);
    while !model.is_focusable(focus) {
        focus = advance(&focus);
    }
    model.focus = focus;

    // 選択リストに入ったら必ずどれかをハイライトする
    if focus == Focus::Selected && model.selected_state.selected().is_none() {
        model.selected_state.select(Some(0));
    }
}

/// フォーカス中のリスト内でカーソルを移動
fn step(model: &mut Model, delta: isize) {
    match model.focus {
        Focus::Start => {
            let current = model.selector.candidate_start().unwrap_or(DEFAULT_START);
            if let Some(label) = shifted(current, delta) {
                model.selector.set_candidate_start(label);
                model.start_state.select(Some(label.index()));
            }
        }
        Focus::End => {
            let current = model.selector.candidate_end().unwrap_or(DEFAULT_END);
            if let Some(label) = shifted(current, delta) {
                model.selector.set_candidate_end(label);
                model.end_state.select(Some(label.index()));
            }
        }
        Focus::Selected => {
            let len = model.selector.selection().len();
            if len == 0 {
                return;
            }
            let next = match model.selected_state.selected() {
                Some(current) => clamp_step(current, delta, len),
                None => 0,
            };
            model.selected_state.select(Some(next));
        }
        Focus::Presets => {
            let len = QuickPreset::all().len();
            model.preset_cursor = clamp_step(model.preset_cursor, delta, len);
        }
        Focus::Add | Focus::Save | Focus::Cancel => {}
    }
}

fn clamp_step(current: usize, delta: isize, len: usize) -> usize {
    current
        .saturating_add_signed(delta)
        .min(len.saturating_sub(1))
}

/// 時刻ラベルを前後にずらす（端では None）
fn shifted(label: TimeLabel, delta: isize) -> Option<TimeLabel> {
    TimeLabel::from_index(label.index().checked_add_signed(delta)?)
}

/// フォーカス中の要素を実行
fn activate<H: SlotHost + ?Sized>(model: &mut Model, host: &mut H) {
    match model.focus {
        Focus::Start | Focus::End => move_focus(model, Focus::next),
        Focus::Add => add_candidate(model),
        Focus::Selected => remove_highlighted(model),
        Focus::Presets => {
            let preset = model.highlighted_preset();
            if model.selector.is_preset_available(preset)
                && model.selector.add_quick_range(preset)
            {
                select_last(model);
            }
        }
        Focus::Save => save(model, host),
        Focus::Cancel => {
            model.selector.cancel(host);
        }
    }
}

/// 「追加」ボタン（無効な候補のときは押せない）
fn add_candidate(model: &mut Model) {
    if model.selector.can_add_candidate() && model.selector.add_candidate_range() {
        select_last(model);
    }
}

/// 追加した時間帯（末尾）をハイライト
fn select_last(model: &mut Model) {
    let len = model.selector.selection().len();
    model.selected_state.select(len.checked_sub(1));
}

/// 「保存」ボタン（選択が空のときは押せない）
fn save<H: SlotHost + ?Sized>(model: &mut Model, host: &mut H) {
    if model.selector.can_save() {
        model.selector.commit(host);
    }
}

fn remove_highlighted(model: &mut Model) {
    let Some(value) = model.highlighted_range().map(str::to_string) else {
        return;
    };
    model.selector.remove_range(&value);

    let len = model.selector.selection().len();
    if len == 0 {
        model.selected_state.select(None);
        model.focus = Focus::Presets;
    } else {
        let current = model.selected_state.selected().unwrap_or(0);
        model.selected_state.select(Some(current.min(len - 1)));
    }
}

#[cfg(test)]
#[path = "update_test.rs"]
mod tests;
