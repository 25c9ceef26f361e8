//! 時間帯選択ダイアログ（TUI）
//!
//! ## モジュール構成
//!
//! - `model`: 画面状態（フォーカス、リストの選択位置）とメッセージ
//! - `update`: メッセージに応じた状態遷移
//! - `view`: 画面描画

mod model;
mod update;
mod view;

pub use model::{key_to_msg, Focus, Model, Msg};
pub use update::update;
pub use view::view;

use crate::slot::SlotHost;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};

/// ダイアログを表示し、確定またはキャンセルで閉じるまで入力を処理する
pub fn run<H: SlotHost + ?Sized>(day: &str, host: &mut H) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut model = Model::new(day);

    // 描画エラーでもターミナルは復元する
    let result = event_loop(&mut terminal, &mut model, host);

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// メインループ
fn event_loop<H: SlotHost + ?Sized>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    model: &mut Model,
    host: &mut H,
) -> io::Result<()> {
    while model.selector.is_open() {
        terminal.draw(|f| view(f, model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = key_to_msg(key.code) {
                    update(model, msg, host);
                }
            }
        }
    }
    Ok(())
}
