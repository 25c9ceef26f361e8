//! pocketcare labels コマンド

use crate::config::Config;
use crate::output::{print_json, OutputFormat};
use crate::slot::TimeLabel;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
#[command(about = "List the half-hour time labels")]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args, config: &Config) -> Result<(), String> {
    match OutputFormat::resolve(args.json, config.output) {
        OutputFormat::Json => print_json(TimeLabel::all()),
        OutputFormat::Table => {
            println!("{}", labels_table());
            println!("{} labels", TimeLabel::all().len());
            Ok(())
        }
    }
}

/// 1時間1行（:00 と :30）のテーブル
fn labels_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![":00", ":30"]);

    for pair in TimeLabel::all().chunks(2) {
        table.add_row(pair.iter().map(|l| l.as_str()).collect::<Vec<_>>());
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_row_per_hour() {
        let table = labels_table();
        assert_eq!(table.row_iter().count(), 24);
        let rendered = table.to_string();
        assert!(rendered.contains("00:00"));
        assert!(rendered.contains("23:30"));
    }
}
