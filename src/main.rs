//! Slidestar: solve sliding-tile puzzles with A* search.
//!
//! Usage:
//!   slidestar puzzle [-H KIND] [-n COUNT] [-s 8|15] [--board TILES]...
//!                    [--scramble MOVES] [--seed N] [-j THREADS] [--json] [--quiet]

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use slidestar::board::PuzzleSize;
use slidestar::config::{parse_boards, BoardSource, ConfigError, SolveConfig};
use slidestar::eval::HeuristicKind;
use slidestar::solver;

/// Default number of boards when none are given explicitly.
const DEFAULT_BOARDS: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "slidestar", version, about = "A* search for sliding-tile puzzles")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    domain: Domain,
}

#[derive(Subcommand, Debug)]
enum Domain {
    /// Solve 8- or 15-puzzle boards.
    Puzzle(PuzzleArgs),
}

#[derive(Args, Debug)]
struct PuzzleArgs {
    /// Heuristic guiding the search.
    #[arg(short = 'H', long, value_enum, default_value_t = HeuristicKind::Manhattan)]
    heuristic: HeuristicKind,

    /// Number of boards to solve (default 3, or the number of --board values).
    #[arg(short = 'n', long = "boards")]
    boards: Option<usize>,

    /// Puzzle size.
    #[arg(short, long, value_enum, default_value_t = PuzzleSize::Eight)]
    size: PuzzleSize,

    /// Solve this board instead of the presets, e.g. "1,2,3/4,0,6/7,5,8".
    #[arg(long = "board", value_name = "TILES")]
    board: Vec<String>,

    /// Solve random boards scrambled this many moves from the goal.
    #[arg(long, value_name = "MOVES", conflicts_with = "board")]
    scramble: Option<usize>,

    /// Seed for --scramble, 0 for entropy.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Worker threads for the batch.
    #[arg(short = 'j', long, default_value_t = 1)]
    threads: usize,

    /// Emit one JSON object per board instead of text.
    #[arg(long)]
    json: bool,

    /// Suppress the summary after the text report.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl PuzzleArgs {
    fn to_config(&self) -> Result<SolveConfig, ConfigError> {
        let (source, default_count) = if !self.board.is_empty() {
            let boards = parse_boards(&self.board)?;
            let count = boards.len();
            (BoardSource::Custom(boards), count)
        } else if let Some(moves) = self.scramble {
            (
                BoardSource::Scrambled {
                    moves,
                    seed: self.seed,
                },
                DEFAULT_BOARDS,
            )
        } else {
            (BoardSource::Presets, DEFAULT_BOARDS)
        };

        Ok(SolveConfig {
            size: self.size,
            heuristic: self.heuristic,
            boards: self.boards.unwrap_or(default_count),
            source,
            threads: self.threads,
        })
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn solve_puzzles(args: &PuzzleArgs) -> Result<(), CliError> {
    let config = args.to_config()?;
    let reports = solver::run(&config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.json {
        solver::write_jsonl(&mut out, &reports)?;
    } else {
        solver::write_header(&mut out, reports.len(), config.heuristic)?;
        for report in &reports {
            solver::write_report(&mut out, report)?;
        }
        if !args.quiet {
            writeln!(out)?;
            solver::write_summary(&mut out, &reports)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.domain {
        Domain::Puzzle(args) => solve_puzzles(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Config(e)) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
