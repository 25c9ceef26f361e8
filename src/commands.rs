use crate::cli::{Cli, Command};
use crate::config::Config;
use chrono::{Datelike, Local, Weekday};

pub mod apply;
pub mod labels;
pub mod pick;
pub mod presets;

pub fn dispatch(cli: Cli, config: &Config) -> Result<(), String> {
    match cli.command {
        Command::Pick(args) => pick::run(args, config),
        Command::Apply(args) => apply::run(args, config),
        Command::Labels(args) => labels::run(args, config),
        Command::Presets(args) => presets::run(args, config),
    }
}

/// 曜日ラベルを決定
///
/// 優先順位: `--day` > 設定の `default_day` > 今日の曜日
pub(crate) fn resolve_day(day: Option<&str>, config: &Config) -> String {
    day.map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .or_else(|| config.default_day.clone())
        .unwrap_or_else(|| weekday_name(Local::now().weekday()).to_string())
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
