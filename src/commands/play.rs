//! Interactive play mode
//!
//! Line-oriented game loop over a [`GameSession`]. Each line the player
//! types becomes session gestures; the session's state is rendered back
//! after every step.

use crate::core::{Code, FeedbackPeg};
use crate::game::{GameSession, Outcome, Phase, Role, SessionError};
use crate::output::formatters::{format_code, format_feedback, format_proposition, format_round};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run a session to its end, or until the player quits
///
/// Reads commands from `input` and writes the game to `out`. Returns once the
/// game has ended, the player typed `quit`, or input ran out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    print_intro(session, &mut out)?;

    while session.in_game() {
        write_prompt(session, &mut out)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = line.trim();

        match line.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Game abandoned.")?;
                return Ok(());
            }
            "reset" | "r" => {
                session.reset();
                writeln!(out, "✓ Cleared.")?;
                continue;
            }
            "history" | "h" => {
                print_history(session, &mut out)?;
                continue;
            }
            _ => {}
        }

        if let Err(message) = handle_line(session, line) {
            writeln!(out, "{} {message}", "❌".red())?;
            continue;
        }
        print_history(session, &mut out)?;
    }

    if let Phase::Ended(outcome) = session.phase() {
        print_outcome(session, outcome, &mut out)?;
    }
    Ok(())
}

/// Turn one input line into gestures, then apply
fn handle_line(session: &mut GameSession, line: &str) -> Result<(), String> {
    match session.phase() {
        Phase::GuesserPlaying | Phase::ProposerSettingSolution => {
            let code = parse_code(line, session.nb_pawns())?;
            enter_code(session, &code).map_err(|e| e.to_string())?;
        }
        Phase::ProposerPlaying => {
            let markers = parse_markers(line, session.nb_pawns())?;
            enter_feedback(session, &markers).map_err(|e| e.to_string())?;
        }
        Phase::Ended(_) => return Err(SessionError::GameOver.to_string()),
    }

    session.apply().map_err(|e| e.to_string())?;
    Ok(())
}

fn parse_code(line: &str, nb_pawns: usize) -> Result<Code, String> {
    let code: Code = line.parse().map_err(|e| format!("{e}"))?;
    if code.len() != nb_pawns {
        return Err(format!("enter {nb_pawns} colors, got {}", code.len()));
    }
    Ok(code)
}

/// Parse one marker per slot; `win` stands for all black
fn parse_markers(line: &str, nb_pawns: usize) -> Result<Vec<Option<FeedbackPeg>>, String> {
    if line.eq_ignore_ascii_case("win") {
        return Ok(vec![Some(FeedbackPeg::Black); nb_pawns]);
    }

    let markers = line
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            FeedbackPeg::from_symbol(c)
                .ok_or_else(|| format!("'{c}' is not a marker (use B, W or -)"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if markers.len() != nb_pawns {
        return Err(format!("enter {nb_pawns} markers, got {}", markers.len()));
    }
    Ok(markers)
}

/// Select each color and place it, slot by slot
fn enter_code(session: &mut GameSession, code: &Code) -> Result<(), SessionError> {
    session.reset_proposition();
    for (slot, &color) in code.colors().iter().enumerate() {
        session.select_color(color);
        session.set_proposition_slot(slot)?;
    }
    Ok(())
}

/// Cycle each slot's marker until it shows the wanted one
fn enter_feedback(
    session: &mut GameSession,
    markers: &[Option<FeedbackPeg>],
) -> Result<(), SessionError> {
    session.reset_feedback();
    for (slot, &wanted) in markers.iter().enumerate() {
        while session.feedback().get(slot) != wanted {
            session.cycle_feedback_slot(slot)?;
        }
    }
    Ok(())
}

fn print_intro<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    let settings = session.settings();
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        " {}  {} pawns, {} attempts, playing as {}",
        "MASTERMIND".bright_cyan().bold(),
        settings.nb_pawns(),
        settings.attempts(),
        settings.role().to_string().bright_yellow()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "Colors: B(lue) C(yan) G(reen) O(range) P(urple) R(ed) Y(ellow)")?;

    match settings.role() {
        Role::Guesser => writeln!(out, "Break the secret code. Type a code like 'BCGO'.")?,
        Role::Proposer => {
            writeln!(out, "Pick a secret code, then score each machine guess.")?;
            writeln!(
                out,
                "Feedback: one marker per slot, B = right place, W = wrong place, - = none \
                 ('win' for all B)"
            )?;
        }
    }
    writeln!(out, "Commands: 'reset', 'history', 'quit'\n")
}

fn write_prompt<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    let remaining = session.history().attempts_remaining();
    match session.phase() {
        Phase::GuesserPlaying => write!(out, "[{remaining} left] Your guess: ")?,
        Phase::ProposerSettingSolution => write!(out, "Your secret code: ")?,
        Phase::ProposerPlaying => {
            writeln!(
                out,
                "Machine guesses: {}   (markers: {})",
                format_proposition(session.proposition()),
                format_feedback(session.feedback())
            )?;
            write!(out, "[{remaining} left] Your feedback: ")?;
        }
        Phase::Ended(_) => {}
    }
    out.flush()
}

fn print_history<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    for (i, round) in session.history().iter().filter(|r| r.score.is_some()).enumerate() {
        writeln!(out, "{}", format_round(i + 1, round))?;
    }
    writeln!(out)
}

fn print_outcome<W: Write>(session: &GameSession, outcome: Outcome, out: &mut W) -> io::Result<()> {
    let rounds = session.history().rounds_played();
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;

    let headline = match (session.role(), outcome) {
        (Role::Guesser, Outcome::Win) => format!("🎉 You broke the code in {rounds} rounds!"),
        (Role::Guesser, _) => "💀 Out of attempts.".to_string(),
        (Role::Proposer, Outcome::Win) => {
            format!("🤖 The machine broke your code in {rounds} rounds.")
        }
        (Role::Proposer, Outcome::Loss) => "🎉 The machine ran out of attempts!".to_string(),
        (Role::Proposer, Outcome::Exhausted) => {
            "🎉 The machine has no consistent guess left. Was the feedback right?".to_string()
        }
    };
    let headline = if session.human_won() {
        headline.bright_green().bold()
    } else {
        headline.bright_red().bold()
    };
    writeln!(out, "  {headline}")?;

    if let Some(solution) = session.solution() {
        writeln!(out, "  Secret: {}", format_code(solution))?;
    }
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}
