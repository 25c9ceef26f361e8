//! pocketcare pick コマンド
//!
//! 時間帯選択ダイアログを開き、確定した時間帯を出力する。

use crate::config::Config;
use crate::error::PcError;
use crate::output::{print_outcome, OutputFormat};
use crate::slot::RecordingHost;
use crate::tui::picker;
use clap::Parser;
use std::io::IsTerminal;

#[derive(Debug, Parser)]
#[command(about = "Pick time slots for a day in an interactive dialog")]
pub struct Args {
    /// Day label shown in the dialog (defaults to config or today's weekday)
    #[arg(long)]
    pub day: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args, config: &Config) -> Result<(), String> {
    if !std::io::stdin().is_terminal() {
        return Err(PcError::Tui(
            "stdin is not a terminal; use 'pocketcare apply' for scripted input".to_string(),
        )
        .render());
    }

    let day = super::resolve_day(args.day.as_deref(), config);
    let mut host = RecordingHost::new();

    picker::run(&day, &mut host).map_err(|e| PcError::Tui(e.to_string()).render())?;

    let format = OutputFormat::resolve(args.json, config.output);
    print_outcome(&day, host.last_saved(), format)
}
