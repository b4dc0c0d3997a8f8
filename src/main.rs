//! Mastermind - CLI
//!
//! Play Mastermind against the machine in either role, or watch the solver
//! work on a given secret.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mastermind::{
    commands::{SolveConfig, run_benchmark, run_play, solve_code, top_scores},
    core::Code,
    game::{DEFAULT_ATTEMPTS, DEFAULT_PAWNS, GameSession, Role, Settings, TallyCadence},
    ledger::{DEFAULT_RANKING_LIMIT, ScoreLedger},
    output::{print_benchmark_result, print_ranking, print_solve_result},
    solver::CodeSpace,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind: break the machine's code, or let it break yours",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Score file
    #[arg(long, global = true, default_value = "scores.txt")]
    scores: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play(PlayArgs),

    /// Let the solver break a given secret
    Solve {
        /// The secret, as color initials (e.g. BCGO)
        secret: Code,

        /// Maximum number of rounds
        #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
        attempts: usize,

        /// Show the score and scan position of every round
        #[arg(short, long)]
        details: bool,
    },

    /// Run the solver against every secret of a code space
    Benchmark {
        /// Number of pawns per code
        #[arg(short, long, default_value_t = DEFAULT_PAWNS)]
        pawns: usize,

        /// Maximum number of rounds per secret
        #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
        attempts: usize,

        /// Only test the first N secrets
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Show the best players
    Scores {
        /// Number of entries to show
        #[arg(short, long, default_value_t = DEFAULT_RANKING_LIMIT)]
        limit: usize,
    },
}

#[derive(Args)]
struct PlayArgs {
    /// Which side you play: guesser or proposer
    #[arg(long, default_value = "guesser")]
    role: Role,

    /// Number of pawns per code (4-8)
    #[arg(short, long, default_value_t = DEFAULT_PAWNS)]
    pawns: usize,

    /// Number of rounds allowed
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Name recorded in the score file
    #[arg(long, default_value = "player")]
    pseudo: String,

    /// When to add to your score: every-round or human-win
    #[arg(long, default_value = "every-round")]
    tally: TallyCadence,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            role: Role::default(),
            pawns: DEFAULT_PAWNS,
            attempts: DEFAULT_ATTEMPTS,
            pseudo: "player".to_string(),
            tally: TallyCadence::default(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        None => run_play_command(PlayArgs::default(), &cli.scores),
        Some(Commands::Play(args)) => run_play_command(args, &cli.scores),
        Some(Commands::Solve {
            secret,
            attempts,
            details,
        }) => run_solve_command(secret, attempts, details),
        Some(Commands::Benchmark {
            pawns,
            attempts,
            count,
        }) => run_benchmark_command(pawns, attempts, count),
        Some(Commands::Scores { limit }) => run_scores_command(&cli.scores, limit),
    }
}

/// Logs go to stderr; stdout belongs to the game
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_play_command(args: PlayArgs, scores: &Path) -> Result<()> {
    let mut settings = Settings::default();
    settings.choose_role(args.role);
    settings.set_pawn_count(args.pawns)?;
    settings.set_attempts(args.attempts)?;
    settings.set_pseudo(&args.pseudo)?;
    settings.set_cadence(args.tally);

    let ledger = ScoreLedger::load(scores).context("cannot start without the score file")?;
    let mut session = GameSession::new(settings, ledger, &mut rand::rng());

    run_play(&mut session, io::stdin().lock(), io::stdout().lock())?;

    let ledger = session.into_ledger();
    ledger.save(scores)?;
    print_ranking(&ledger.ranked_entries(DEFAULT_RANKING_LIMIT));
    Ok(())
}

fn run_solve_command(secret: Code, attempts: usize, details: bool) -> Result<()> {
    let mut settings = Settings::default();
    settings.set_pawn_count(secret.len())?;
    settings.set_attempts(attempts)?;

    let mut config = SolveConfig::new(secret);
    config.max_attempts = settings.attempts();

    let result = solve_code(&config);
    print_solve_result(&result, details);
    Ok(())
}

fn run_benchmark_command(pawns: usize, attempts: usize, count: Option<usize>) -> Result<()> {
    let mut settings = Settings::default();
    settings.set_pawn_count(pawns)?;
    settings.set_attempts(attempts)?;

    let space = CodeSpace::generate(settings.nb_pawns());
    let total = count.map_or(space.len(), |n| n.min(space.len()));
    println!("Running the solver on {total} secrets of {pawns} pawns...");

    let result = run_benchmark(&space, settings.attempts(), count, true);
    print_benchmark_result(&result);
    Ok(())
}

fn run_scores_command(scores: &Path, limit: usize) -> Result<()> {
    let top = top_scores(scores, limit)?;
    let entries: Vec<_> = top.iter().collect();
    print_ranking(&entries);
    Ok(())
}
