//! Velha - unified CLI.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use velha::{Cli, Command, Config, logging};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command() {
        Command::Play { no_alert } => {
            logging::init_file(&config)?;
            info!(?config, "Starting velha");
            let show_alert = *config.show_alert() && !no_alert;
            velha::run(config.with_show_alert(show_alert))
        }
        Command::Replay { moves, json } => {
            logging::init_stderr(&config);
            let report = velha::replay(&moves);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.to_text());
            }
            Ok(())
        }
        Command::Eval { board, json } => {
            logging::init_stderr(&config);
            let report = velha::eval(board);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.to_text());
            }
            Ok(())
        }
    }
}
