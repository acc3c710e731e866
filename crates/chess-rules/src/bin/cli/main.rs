//! chess-rules - apply moves and evaluate positions from the command line.
//!
//! Every command takes FEN in and prints FEN or a status out; nothing is
//! kept between runs. Pass the earlier positions of a game with `--history`
//! so repetition draws can be detected.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Context;
use chess_core::FenRecord;
use clap::{Parser, Subcommand};
use config::{OutputFormat, RulesConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-rules")]
#[command(about = "Stateless chess rules over FEN positions")]
struct Cli {
    /// Path to a TOML config file (defaults to ./chess-rules.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a move and print the resulting position and status
    Apply {
        /// Position to move from
        #[arg(long)]
        fen: String,
        /// Move in UCI notation, e.g. e2e4 or e7e8q
        uci: String,
        /// Earlier positions of the game, oldest first
        #[arg(long, num_args = 1..)]
        history: Vec<String>,
    },
    /// Print the status of a position
    Status {
        #[arg(long)]
        fen: String,
        /// Earlier positions of the game, oldest first
        #[arg(long, num_args = 1..)]
        history: Vec<String>,
    },
    /// List the legal moves for the side to move
    Legal {
        #[arg(long)]
        fen: String,
    },
    /// Count leaf nodes of the legal move tree
    Perft {
        #[arg(long, default_value = FenRecord::STARTPOS)]
        fen: String,
        /// Depth to search, defaults to `perft_depth` from the config
        #[arg(short, long)]
        depth: Option<u32>,
        /// Print the count below each root move
        #[arg(long)]
        divide: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = RulesConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = cli.output.unwrap_or(config.output);

    let rendered = match cli.command {
        Commands::Apply { fen, uci, history } => {
            commands::render(&commands::apply(&fen, &uci, &history)?, output)?
        }
        Commands::Status { fen, history } => {
            commands::render(&commands::status(&fen, &history)?, output)?
        }
        Commands::Legal { fen } => commands::render(&commands::legal(&fen)?, output)?,
        Commands::Perft { fen, depth, divide } => {
            let depth = depth.unwrap_or(config.perft_depth);
            commands::render(&commands::perft_count(&fen, depth, divide)?, output)?
        }
    };
    println!("{}", rendered);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_apply_with_history() {
        let cli = Cli::try_parse_from([
            "chess-rules",
            "--output",
            "json",
            "apply",
            "--fen",
            FenRecord::STARTPOS,
            "e2e4",
            "--history",
            "a",
            "b",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Commands::Apply { fen, uci, history } => {
                assert_eq!(fen, FenRecord::STARTPOS);
                assert_eq!(uci, "e2e4");
                assert_eq!(history, ["a", "b"]);
            }
            _ => panic!("expected apply"),
        }
    }

    #[test]
    fn test_parse_perft_defaults() {
        let cli = Cli::try_parse_from(["chess-rules", "perft"]).unwrap();
        match cli.command {
            Commands::Perft { fen, depth, divide } => {
                assert_eq!(fen, FenRecord::STARTPOS);
                assert_eq!(depth, None);
                assert!(!divide);
            }
            _ => panic!("expected perft"),
        }
    }
}
