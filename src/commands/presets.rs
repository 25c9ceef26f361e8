//! pocketcare presets コマンド

use crate::config::Config;
use crate::output::{print_json, OutputFormat};
use crate::slot::{format_duration, QuickPreset, TimeRange};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(about = "List the quick-add presets")]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// JSON 出力用
#[derive(Debug, Serialize)]
struct PresetEntry {
    name: QuickPreset,
    range: TimeRange,
    minutes: u32,
}

pub fn run(args: Args, config: &Config) -> Result<(), String> {
    match OutputFormat::resolve(args.json, config.output) {
        OutputFormat::Json => {
            let entries: Vec<PresetEntry> = QuickPreset::all()
                .iter()
                .map(|p| PresetEntry {
                    name: *p,
                    range: p.range(),
                    minutes: p.range().duration_minutes(),
                })
                .collect();
            print_json(&entries)
        }
        OutputFormat::Table => {
            println!("{}", presets_table());
            Ok(())
        }
    }
}

fn presets_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Preset", "Range", "Duration"]);

    for preset in QuickPreset::all() {
        table.add_row(vec![
            preset.display_name().to_string(),
            preset.to_string(),
            format_duration(preset.range().duration_minutes()),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_presets_in_order() {
        let rendered = presets_table().to_string();
        let morning = rendered.find("09:00-12:00").unwrap();
        let evening = rendered.find("17:00-18:00").unwrap();
        assert!(morning < evening);
        assert!(rendered.contains("Late morning"));
    }
}
