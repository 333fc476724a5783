use std::io::{self, Read};

use alien_order::sudoku::{Board, Zone};
use alien_order::Precedence;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "alien-order", version, about = "Infer an alphabet from sorted words")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read sorted words from stdin and print their alphabet order
    Order {
        /// Print a JSON report with edges and unordered pairs
        #[arg(long)]
        analyze: bool,
        /// Read a JSON array of strings instead of one word per line
        #[arg(long)]
        json: bool,
    },
    /// Read {"board": [...], "zones": [...]} from stdin and validate it
    Sudoku {
        /// List every repeated value instead of true/false
        #[arg(long)]
        explain: bool,
    },
}

#[derive(Deserialize)]
struct SudokuInput {
    board: Vec<Vec<String>>,
    #[serde(default)]
    zones: Vec<Zone>,
}

/// Words from stdin. Line mode keeps every character except the line
/// terminator and skips empty lines.
fn words_from(buf: &str, json: bool) -> Result<Vec<String>> {
    if json {
        let vals: Vec<Value> = serde_json::from_str(buf).context("invalid JSON array")?;
        vals.into_iter()
            .map(|v| match v {
                Value::String(w) => Ok(w),
                other => bail!("expected a string, got {other}"),
            })
            .collect()
    } else {
        Ok(buf
            .lines()
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;

    match cli.command {
        Command::Order { analyze, json } => {
            let words = words_from(&buf, json)?;
            let p = Precedence::from_words(&words)?;
            if analyze {
                println!("{}", serde_json::to_string_pretty(&p.report()?)?);
            } else {
                println!("{}", p.topo_one()?);
            }
        }
        Command::Sudoku { explain } => {
            let input: SudokuInput =
                serde_json::from_str(&buf).context("invalid sudoku JSON")?;
            let board = Board::from_rows(&input.board)?;
            if explain {
                let conflicts = board.conflicts(&input.zones)?;
                println!("{}", serde_json::to_string_pretty(&conflicts)?);
            } else {
                println!("{}", board.validate(&input.zones)?);
            }
        }
    }
    Ok(())
}
