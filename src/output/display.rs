//! Display functions for command results

use super::formatters::{format_code, format_score};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::game::Outcome;
use crate::ledger::LedgerEntry;
use colored::Colorize;

/// Print the path the solver took to a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let nb_pawns = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", format_code(&result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nRound {}: {}  {}",
            i + 1,
            format_code(&step.code),
            format_score(step.score, nb_pawns)
        );

        if verbose {
            println!("  Score:      {}", step.score);
            println!("  Next scan:  index {}", step.solver_index);
        }
    }

    println!();
    let rounds = result.guesses.len();
    match result.outcome {
        Outcome::Win => println!("{}", format!("✅ Solved in {rounds} rounds!").green().bold()),
        Outcome::Loss => println!("{}", format!("❌ Not solved in {rounds} rounds").red().bold()),
        Outcome::Exhausted => println!(
            "{}",
            format!("❌ No consistent candidate left after {rounds} rounds")
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} pawns)",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.nb_pawns
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_secrets);
    println!("   Solved:           {}", result.solved.to_string().green().bold());
    println!("   Out of attempts:  {}", result.failed.to_string().yellow());
    println!("   Exhausted:        {}", result.exhausted.to_string().red());
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:        {}", result.min_rounds.to_string().green());
    println!("   Worst case:       {}", result.max_rounds.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Secrets/second:   {:.1}", result.secrets_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut rounds: Vec<usize> = result.distribution.keys().copied().collect();
    rounds.sort_unstable();
    for round in rounds {
        let count = result.distribution[&round];
        let pct = (count as f64 / result.total_secrets as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {round:>2}: {bar} {count:6} ({pct:5.1}%)");
    }

    if !result.worst_secrets.is_empty() {
        println!("\n🐢 {}", "Slowest secrets:".bright_cyan().bold());
        for (secret, rounds) in &result.worst_secrets {
            println!("   {}  {rounds} rounds", format_code(secret));
        }
    }
}

/// Print the ranked ledger
pub fn print_ranking(entries: &[&LedgerEntry]) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "HALL OF FAME".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    if entries.is_empty() {
        println!("\n   No scores yet.");
        return;
    }

    println!();
    for (rank, entry) in entries.iter().enumerate() {
        let place = format!("{:>3}.", rank + 1);
        let place = if rank == 0 {
            place.bright_yellow().bold()
        } else {
            place.bright_black()
        };
        println!("  {place} {:<30} {:>6}", entry.pseudo, entry.score);
    }
}
