//! Batch solving and report output.
//!
//! Resolves the boards a [`SolveConfig`] asks for, searches each one
//! independently, and renders the results either as human-readable
//! blocks or as JSONL.

use std::io::{self, Write};
use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::board::{preset_boards, Action, Board};
use crate::config::{BoardSource, ConfigError, SolveConfig};
use crate::eval::HeuristicKind;
use crate::movegen::scrambled_boards;
use crate::search::{search, SearchStats};

/// Result of searching a single board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardReport {
    /// 1-based position in the batch.
    pub index: usize,
    pub initial: Board,
    pub heuristic: HeuristicKind,
    pub solved: bool,
    pub path: Option<Vec<Action>>,
    pub cost: Option<u32>,
    #[serde(flatten)]
    pub stats: SearchStats,
    pub elapsed_ms: u64,
}

/// Validates `config`, resolves its boards, and searches each of them.
pub fn run(config: &SolveConfig) -> Result<Vec<BoardReport>, ConfigError> {
    config.validate()?;
    let boards = resolve_boards(config);
    solve_boards(&boards, config.size.goal(), config.heuristic, config.threads)
}

/// Returns the initial boards for `config`, capped at `config.boards`.
pub fn resolve_boards(config: &SolveConfig) -> Vec<Board> {
    match &config.source {
        BoardSource::Presets => preset_boards(config.size)
            .into_iter()
            .take(config.boards)
            .collect(),
        BoardSource::Scrambled { moves, seed } => {
            scrambled_boards(config.size.goal(), config.boards, *moves, *seed)
        }
        BoardSource::Custom(boards) => boards.iter().take(config.boards).cloned().collect(),
    }
}

/// Searches every board against `goal`, returning reports in input order.
///
/// With `threads > 1` boards are searched concurrently on a dedicated
/// rayon pool. Each search owns its own frontier and explored map.
pub fn solve_boards(
    boards: &[Board],
    goal: &Board,
    heuristic: HeuristicKind,
    threads: usize,
) -> Result<Vec<BoardReport>, ConfigError> {
    if threads > 1 {
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?;
        pool.install(|| {
            boards
                .par_iter()
                .enumerate()
                .map(|(i, b)| solve_one(i + 1, b, goal, heuristic))
                .collect()
        })
    } else {
        boards
            .iter()
            .enumerate()
            .map(|(i, b)| solve_one(i + 1, b, goal, heuristic))
            .collect()
    }
}

/// Searches a single board.
fn solve_one(
    index: usize,
    board: &Board,
    goal: &Board,
    heuristic: HeuristicKind,
) -> Result<BoardReport, ConfigError> {
    if !board.has_solvable_parity() {
        warn!(board = index, %board, "board has unsolvable parity; search will exhaust");
    }

    let start = Instant::now();
    let result = search(board, goal, heuristic)
        .map_err(|source| ConfigError::InvalidBoard { index, source })?;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    let (path, cost) = match result.solution {
        Some(s) => (Some(s.actions), Some(s.cost)),
        None => (None, None),
    };
    info!(
        board = index,
        solved = path.is_some(),
        cost,
        expanded = result.stats.expanded,
        generated = result.stats.generated,
        max_frontier = result.stats.max_frontier,
        elapsed_ms,
        "board searched"
    );

    Ok(BoardReport {
        index,
        initial: board.clone(),
        heuristic,
        solved: path.is_some(),
        path,
        cost,
        stats: result.stats,
        elapsed_ms,
    })
}

const RULE_HEAVY: &str = "========================================";
const RULE_LIGHT: &str = "----------------------------------------";

/// Writes the batch header.
pub fn write_header<W: Write>(
    out: &mut W,
    count: usize,
    heuristic: HeuristicKind,
) -> io::Result<()> {
    writeln!(
        out,
        "Running A* search on {} board(s) with '{}' heuristic...",
        count, heuristic
    )?;
    writeln!(out, "{}", RULE_HEAVY)
}

/// Writes one human-readable report block.
pub fn write_report<W: Write>(out: &mut W, report: &BoardReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Solving Board #{}:", report.index)?;
    writeln!(out, "  Initial State: {}", report.initial)?;
    match (&report.path, report.cost) {
        (Some(path), Some(cost)) => {
            let names: Vec<&str> = path.iter().map(|a| a.name()).collect();
            writeln!(out, "  Solution Found!")?;
            writeln!(out, "    - Path: [{}]", names.join(", "))?;
            writeln!(out, "    - Cost/Depth: {}", cost)?;
            writeln!(out, "    - Nodes Expanded: {}", report.stats.expanded)?;
            writeln!(out, "    - Nodes Generated: {}", report.stats.generated)?;
            writeln!(out, "    - Max Frontier Size: {}", report.stats.max_frontier)?;
        }
        _ => {
            writeln!(out, "  No solution was found.")?;
        }
    }
    writeln!(out, "{}", RULE_LIGHT)
}

/// Writes reports as JSONL, one object per line.
pub fn write_jsonl<W: Write>(out: &mut W, reports: &[BoardReport]) -> io::Result<()> {
    for report in reports {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Writes totals across the batch.
pub fn write_summary<W: Write>(out: &mut W, reports: &[BoardReport]) -> io::Result<()> {
    let solved = reports.iter().filter(|r| r.solved).count();
    let expanded: u64 = reports.iter().map(|r| r.stats.expanded).sum();
    let generated: u64 = reports.iter().map(|r| r.stats.generated).sum();
    let total_cost: u64 = reports.iter().filter_map(|r| r.cost).map(u64::from).sum();

    writeln!(out, "Solved {}/{} board(s)", solved, reports.len())?;
    if solved > 0 {
        writeln!(out, "Avg cost: {:.2}", total_cost as f64 / solved as f64)?;
    }
    writeln!(out, "Total nodes expanded: {}", expanded)?;
    writeln!(out, "Total nodes generated: {}", generated)?;

    if let Some(kind) = reports.first().map(|r| r.heuristic) {
        if !kind.is_admissible() && solved > 0 {
            writeln!(
                out,
                "Note: '{}' is not admissible; paths may be longer than optimal.",
                kind
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PuzzleSize;

    fn report_for(tiles: &str, heuristic: HeuristicKind) -> BoardReport {
        let board: Board = tiles.parse().unwrap();
        let goal = Board::solved(board.size()).unwrap();
        solve_one(1, &board, &goal, heuristic).unwrap()
    }

    #[test]
    fn presets_are_truncated_to_requested_count() {
        let config = SolveConfig {
            boards: 4,
            ..Default::default()
        };
        assert_eq!(resolve_boards(&config).len(), 4);

        let config = SolveConfig {
            size: PuzzleSize::Fifteen,
            boards: 100,
            ..Default::default()
        };
        assert_eq!(resolve_boards(&config), preset_boards(PuzzleSize::Fifteen));
    }

    #[test]
    fn scrambled_source_generates_requested_count() {
        let config = SolveConfig {
            boards: 5,
            source: BoardSource::Scrambled { moves: 12, seed: 7 },
            ..Default::default()
        };
        let boards = resolve_boards(&config);
        assert_eq!(boards.len(), 5);
        assert!(boards.iter().all(|b| b.size() == 3));
    }

    #[test]
    fn run_rejects_invalid_config_before_searching() {
        let config = SolveConfig {
            boards: 0,
            ..Default::default()
        };
        assert!(matches!(run(&config), Err(ConfigError::NoBoards)));
    }

    #[test]
    fn run_reports_in_order() {
        let config = SolveConfig {
            boards: 3,
            ..Default::default()
        };
        let reports = run(&config).unwrap();
        let indices: Vec<usize> = reports.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        let costs: Vec<Option<u32>> = reports.iter().map(|r| r.cost).collect();
        assert_eq!(costs, vec![Some(2), Some(5), Some(8)]);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let boards = preset_boards(PuzzleSize::Eight);
        let goal = PuzzleSize::Eight.goal();
        let seq = solve_boards(&boards[..6], goal, HeuristicKind::Manhattan, 1).unwrap();
        let par = solve_boards(&boards[..6], goal, HeuristicKind::Manhattan, 4).unwrap();
        let strip = |r: &[BoardReport]| -> Vec<(usize, Option<u32>, SearchStats)> {
            r.iter().map(|x| (x.index, x.cost, x.stats)).collect()
        };
        assert_eq!(strip(&seq), strip(&par));
    }

    #[test]
    fn human_report_for_solved_board() {
        let report = report_for("1,2,3/4,0,6/7,5,8", HeuristicKind::Manhattan);
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "\nSolving Board #1:\n  Initial State: [[1, 2, 3], [4, 0, 6], [7, 5, 8]]\n  Solution Found!\n    - Path: [DOWN, RIGHT]\n    - Cost/Depth: 2\n    - Nodes Expanded: 2\n    - Nodes Generated: 8\n    - Max Frontier Size: 5\n----------------------------------------\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn human_report_for_unsolvable_board() {
        let report = report_for("2,1,3,0", HeuristicKind::Zero);
        assert!(!report.solved);
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  No solution was found.\n"));
        assert!(!text.contains("Path"));
    }

    #[test]
    fn jsonl_has_one_object_per_line() {
        let reports = vec![
            report_for("1,2,3/4,0,6/7,5,8", HeuristicKind::Manhattan),
            report_for("2,1,3,0", HeuristicKind::Manhattan),
        ];
        let mut out = Vec::new();
        write_jsonl(&mut out, &reports).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["initial"], serde_json::json!([[1, 2, 3], [4, 0, 6], [7, 5, 8]]));
        assert_eq!(first["heuristic"], "manhattan");
        assert_eq!(first["path"], serde_json::json!(["DOWN", "RIGHT"]));
        assert_eq!(first["cost"], 2);
        assert_eq!(first["expanded"], 2);
        assert_eq!(first["generated"], 8);
        assert_eq!(first["max_frontier"], 5);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["solved"], false);
        assert!(second["path"].is_null());
    }

    #[test]
    fn summary_flags_inadmissible_heuristic() {
        let reports = vec![report_for("1,2,3/4,0,6/7,5,8", HeuristicKind::WeightedManhattan)];
        let mut out = Vec::new();
        write_summary(&mut out, &reports).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Solved 1/1 board(s)"));
        assert!(text.contains("not admissible"));

        let reports = vec![report_for("1,2,3/4,0,6/7,5,8", HeuristicKind::Manhattan)];
        let mut out = Vec::new();
        write_summary(&mut out, &reports).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains("not admissible"));
    }
}
