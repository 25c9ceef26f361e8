//! コマンド出力（テーブル / JSON）

use crate::slot::{format_duration, SavedSlots, TimeRange};
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

/// 出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    /// `--json` フラグと設定値から決定
    pub fn resolve(json_flag: bool, configured: OutputFormat) -> Self {
        if json_flag {
            OutputFormat::Json
        } else {
            configured
        }
    }
}

/// ダイアログを閉じた結果の要約行
pub struct SaveSummary {
    pub prefix: String,
    pub message: String,
}

impl SaveSummary {
    pub fn format(day: &str, saved: Option<usize>) -> Self {
        Self::format_with_color(day, saved, should_use_color())
    }

    pub fn format_with_color(day: &str, saved: Option<usize>, use_color: bool) -> Self {
        let paint_ok = |s: &str| {
            if use_color {
                s.green().to_string()
            } else {
                s.to_string()
            }
        };
        let paint_note = |s: &str| {
            if use_color {
                s.yellow().to_string()
            } else {
                s.to_string()
            }
        };

        match saved {
            Some(0) => Self {
                prefix: paint_note("•"),
                message: format!("No time slots saved for {day}"),
            },
            Some(count) => Self {
                prefix: paint_ok("✓"),
                message: format!("{} slot(s) saved for {}", paint_ok(&count.to_string()), day),
            },
            None => Self {
                prefix: paint_note("•"),
                message: "Cancelled, no time slots saved".to_string(),
            },
        }
    }
}

/// stdout が端末で、`NO_COLOR` が未設定なら色を付ける
fn should_use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// JSON 出力用の結果
#[derive(Debug, Serialize)]
struct Outcome<'a> {
    day: &'a str,
    saved: bool,
    slots: Vec<String>,
}

/// 確定結果（キャンセル時は None）を出力
pub fn print_outcome(
    day: &str,
    saved: Option<&SavedSlots>,
    format: OutputFormat,
) -> Result<(), String> {
    match format {
        OutputFormat::Json => {
            let outcome = Outcome {
                day: saved.map_or(day, |s| s.day.as_str()),
                saved: saved.is_some(),
                slots: saved.map(|s| s.slots.clone()).unwrap_or_default(),
            };
            print_json(&outcome)
        }
        OutputFormat::Table => {
            if let Some(saved) = saved {
                if !saved.slots.is_empty() {
                    println!("{}", slots_table(&saved.slots));
                }
            }
            let summary = SaveSummary::format(day, saved.map(|s| s.slots.len()));
            println!("{} {}", summary.prefix, summary.message);
            Ok(())
        }
    }
}

/// 時間帯一覧のテーブル
pub fn slots_table(slots: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Slot", "Duration"]);

    for (i, slot) in slots.iter().enumerate() {
        let duration = slot
            .parse::<TimeRange>()
            .map(|r| format_duration(r.duration_minutes()))
            .unwrap_or_else(|_| "-".to_string());
        table.add_row(vec![(i + 1).to_string(), slot.clone(), duration]);
    }

    table
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    serde_json::to_string_pretty(value)
        .map(|json| println!("{json}"))
        .map_err(|e| crate::error::PcError::from(e).render())
}
