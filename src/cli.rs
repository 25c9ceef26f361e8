use clap::{Parser, Subcommand};

use crate::commands::{apply, labels, pick, presets};

#[derive(Debug, Parser)]
#[command(name = "pocketcare")]
#[command(about = "PocketCare availability slot picker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick time slots for a day in an interactive dialog
    Pick(pick::Args),

    /// Apply scripted selector actions without a terminal dialog
    Apply(apply::Args),

    /// List the half-hour time labels
    Labels(labels::Args),

    /// List the quick-add presets
    Presets(presets::Args),
}
