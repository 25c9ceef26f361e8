//! 時間帯選択ダイアログの view（描画）

use super::model::{Focus, Model};
use crate::slot::{QuickPreset, TimeLabel};
use crate::tui::dialog_rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

const DIALOG_WIDTH: u16 = 56;
/// 選択リストの最大表示行数
const SELECTED_ROWS: u16 = 4;

/// 画面を描画（閉じている間は何も描画しない）
pub fn view(f: &mut Frame, model: &mut Model) {
    if !model.selector.is_open() {
        return;
    }

    let selected_len = model.selector.selection().len() as u16;
    let selected_height = if selected_len == 0 {
        0
    } else {
        selected_len.min(SELECTED_ROWS) + 2
    };
    let dialog_height = 21 + selected_height;

    let dialog_area = dialog_rect(DIALOG_WIDTH, dialog_height, f.area());
    f.render_widget(Clear, dialog_area);

    let title = format!(" Add Time Slots for {} ", model.selector.day());
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = outer.inner(dialog_area);
    f.render_widget(outer, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // 見出し
            Constraint::Length(10),              // 開始・終了リスト
            Constraint::Length(1),               // 追加ボタン
            Constraint::Length(selected_height), // 選択済み
            Constraint::Length(5),               // クイック追加
            Constraint::Length(1),               // フッター
            Constraint::Length(1),               // ヘルプ
        ])
        .split(inner);

    let heading = Paragraph::new(" Select Time Range").style(Style::default().fg(Color::Gray));
    f.render_widget(heading, chunks[0]);

    render_time_columns(f, chunks[1], model);
    render_add_button(f, chunks[2], model);
    if selected_height > 0 {
        render_selected(f, chunks[3], model);
    }
    render_presets(f, chunks[4], model);
    render_footer(f, chunks[5], model);

    let help = Paragraph::new(" Tab: focus  ↑/↓: move  enter: select  d: remove  esc: cancel")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[6]);
}

/// フォーカス中の枠線スタイル
fn border_style(model: &Model, focus: Focus) -> Style {
    if model.focus == focus {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// ボタンのスタイル（無効ならグレーアウト、フォーカス中は反転）
fn button_style(model: &Model, focus: Focus, enabled: bool) -> Style {
    let base = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if model.focus == focus {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

fn render_time_columns(f: &mut Frame, area: Rect, model: &mut Model) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let start = label_list(" Start Time ", border_style(model, Focus::Start));
    f.render_stateful_widget(start, columns[0], &mut model.start_state);

    let end = label_list(" End Time ", border_style(model, Focus::End));
    f.render_stateful_widget(end, columns[1], &mut model.end_state);
}

fn label_list(title: &str, border: Style) -> List<'static> {
    let items: Vec<ListItem> = TimeLabel::all()
        .iter()
        .map(|label| ListItem::new(label.as_str()))
        .collect();

    List::new(items)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(border),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ")
}

fn render_add_button(f: &mut Frame, area: Rect, model: &Model) {
    let enabled = model.selector.can_add_candidate();
    let button = Paragraph::new("[ + Add Time Slot ]")
        .alignment(Alignment::Center)
        .style(button_style(model, Focus::Add, enabled));
    f.render_widget(button, area);
}

fn render_selected(f: &mut Frame, area: Rect, model: &mut Model) {
    let items: Vec<ListItem> = model
        .selector
        .selection()
        .iter()
        .map(|slot| ListItem::new(format!("{slot}  [x]")).style(Style::default().fg(Color::Blue)))
        .collect();

    let focused = model.focus == Focus::Selected;
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Selected Time Slots ")
                .borders(Borders::ALL)
                .border_style(border_style(model, Focus::Selected)),
        )
        .highlight_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        })
        .highlight_symbol(if focused { "> " } else { "  " });

    f.render_stateful_widget(list, area, &mut model.selected_state);
}

fn render_presets(f: &mut Frame, area: Rect, model: &Model) {
    let presets = QuickPreset::all();
    let focused = model.focus == Focus::Presets;

    let lines: Vec<Line> = presets
        .chunks(2)
        .enumerate()
        .map(|(row, pair)| {
            let spans: Vec<Span> = pair
                .iter()
                .enumerate()
                .map(|(col, preset)| {
                    let idx = row * 2 + col;
                    let mut style = if model.selector.is_preset_available(*preset) {
                        Style::default()
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    if focused && idx == model.preset_cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!("  {}  ", preset.as_str()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Quick Add Common Slots ")
            .borders(Borders::ALL)
            .border_style(border_style(model, Focus::Presets)),
    );
    f.render_widget(grid, area);
}

fn render_footer(f: &mut Frame, area: Rect, model: &Model) {
    let count = model.selector.selection().len();
    let footer = Line::from(vec![
        Span::styled("[ Cancel ]", button_style(model, Focus::Cancel, true)),
        Span::raw("  "),
        Span::styled(
            format!("[ Save Slots ({count}) ]"),
            button_style(model, Focus::Save, model.selector.can_save()),
        ),
    ])
    .alignment(Alignment::Right);
    f.render_widget(Paragraph::new(footer), area);
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
