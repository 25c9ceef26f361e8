//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用した時間帯選択ダイアログを提供する。

pub mod picker;

use ratatui::prelude::Rect;

/// 画面中央に配置したダイアログ領域を計算（画面より大きい場合は切り詰める）
pub fn dialog_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
