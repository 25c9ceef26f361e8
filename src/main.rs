mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod slot;
mod tui;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    let config = match config::Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.render());
            std::process::exit(1);
        }
    };
    logging::init(config.log_level.as_deref());

    if let Err(err) = commands::dispatch(cli, &config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
