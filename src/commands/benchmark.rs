//! Benchmark command
//!
//! Runs the solver against every secret of a code space (or the first `n`)
//! and aggregates how it did.

use super::solve::{SolveConfig, solve_in_space};
use crate::core::Code;
use crate::game::Outcome;
use crate::solver::CodeSpace;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub nb_pawns: usize,
    pub total_secrets: usize,
    pub solved: usize,
    /// Ran out of attempts
    pub failed: usize,
    pub exhausted: usize,
    /// Average rounds over solved secrets
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds taken, solved secrets only
    pub distribution: FxHashMap<usize, usize>,
    pub worst_secrets: Vec<(Code, usize)>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Run the solver on the first `limit` secrets of `space` (all by default)
///
/// Secrets are solved in parallel; `progress` shows a bar on stderr.
pub fn run_benchmark(
    space: &CodeSpace,
    max_attempts: usize,
    limit: Option<usize>,
    progress: bool,
) -> BenchmarkResult {
    let total = limit.map_or(space.len(), |n| n.min(space.len()));
    let secrets = &space.as_slice()[..total];

    let pb = if progress {
        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
            .map_or_else(
                |_| ProgressStyle::default_bar(),
                |style| style.progress_chars("█▓▒░"),
            );
        pb.set_style(style);
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results: Vec<(Code, Outcome, usize)> = secrets
        .par_iter()
        .map(|&secret| {
            let config = SolveConfig {
                secret,
                max_attempts,
            };
            let result = solve_in_space(&config, space);
            pb.inc(1);
            (secret, result.outcome, result.guesses.len())
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let (mut solved, mut failed, mut exhausted) = (0, 0, 0);
    for &(_, outcome, rounds) in &results {
        match outcome {
            Outcome::Win => {
                solved += 1;
                *distribution.entry(rounds).or_insert(0) += 1;
            }
            Outcome::Loss => failed += 1,
            Outcome::Exhausted => exhausted += 1,
        }
    }

    let solved_rounds = || {
        results
            .iter()
            .filter(|(_, outcome, _)| *outcome == Outcome::Win)
            .map(|&(_, _, rounds)| rounds)
    };
    let total_rounds: usize = solved_rounds().sum();
    let average_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };

    let mut worst_secrets: Vec<(Code, usize)> = results
        .iter()
        .filter(|(_, outcome, _)| *outcome == Outcome::Win)
        .map(|&(secret, _, rounds)| (secret, rounds))
        .collect();
    worst_secrets.sort_by_key(|&(_, rounds)| std::cmp::Reverse(rounds));
    worst_secrets.truncate(10);

    info!(
        total,
        solved,
        failed,
        exhausted,
        elapsed_ms = duration.as_millis() as u64,
        "benchmark finished"
    );

    BenchmarkResult {
        nb_pawns: space.nb_pawns(),
        total_secrets: total,
        solved,
        failed,
        exhausted,
        average_rounds,
        min_rounds: solved_rounds().min().unwrap_or(0),
        max_rounds: solved_rounds().max().unwrap_or(0),
        distribution,
        worst_secrets,
        duration,
        secrets_per_second: total as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
