//! pocketcare apply コマンド
//!
//! 操作トークンを順に適用し、ダイアログと同じ結果を出力する。

use crate::config::Config;
use crate::output::{print_outcome, OutputFormat};
use crate::slot::{parse_actions, run_script, RecordingHost, TimeRangeSelector};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    about = "Apply scripted selector actions without a terminal dialog",
    after_help = "ACTIONS:
  start=HH:MM          Set the candidate start time
  end=HH:MM            Set the candidate end time
  start= / end=        Clear the candidate start / end time
  add                  Add the candidate range (ignored unless start < end)
  add=HH:MM-HH:MM      Set both candidates, then add
  quick=HH:MM-HH:MM    Add a quick preset (see 'pocketcare presets')
  remove=HH:MM-HH:MM   Remove a selected range
  commit               Save the selection and close
  cancel               Discard the selection and close

A script without commit or cancel ends with cancel."
)]
pub struct Args {
    /// Day label passed to the host with the saved slots
    #[arg(long)]
    pub day: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Actions to apply in order
    #[arg(required = true, value_name = "ACTION")]
    pub actions: Vec<String>,
}

pub fn run(args: Args, config: &Config) -> Result<(), String> {
    let actions = parse_actions(&args.actions).map_err(|e| e.render())?;

    let day = super::resolve_day(args.day.as_deref(), config);
    let mut selector = TimeRangeSelector::opened(day.as_str());
    let mut host = RecordingHost::new();

    run_script(&mut selector, &actions, &mut host).map_err(|e| e.render())?;

    let format = OutputFormat::resolve(args.json, config.output);
    print_outcome(&day, host.last_saved(), format)
}
