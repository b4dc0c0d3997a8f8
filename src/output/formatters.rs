//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback, FeedbackPeg, Proposition, Score};
use crate::game::Round;
use colored::{ColoredString, Colorize};

/// Paint a color's initial in its own color
#[must_use]
pub fn color_pawn(color: Color) -> ColoredString {
    let initial = color.initial().to_string();
    match color {
        Color::Blue => initial.blue(),
        Color::Cyan => initial.cyan(),
        Color::Green => initial.green(),
        Color::Orange => initial.truecolor(255, 165, 0),
        Color::Purple => initial.magenta(),
        Color::Red => initial.red(),
        Color::Yellow => initial.yellow(),
    }
    .bold()
}

/// Format a code as space-separated colored initials
#[must_use]
pub fn format_code(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&color| color_pawn(color).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a proposition, unset slots shown as `_`
#[must_use]
pub fn format_proposition(proposition: &Proposition) -> String {
    proposition
        .slots()
        .iter()
        .map(|slot| {
            slot.map_or_else(
                || "_".bright_black().to_string(),
                |c| color_pawn(c).to_string(),
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a score as black then white pegs, padded with empty pegs
#[must_use]
pub fn format_score(score: Score, nb_pawns: usize) -> String {
    let blacks = usize::from(score.correct());
    let whites = usize::from(score.misplaced());
    let empty = nb_pawns.saturating_sub(blacks + whites);

    format!(
        "{}{}{}",
        "●".repeat(blacks).bright_white().bold(),
        "○".repeat(whites).white(),
        "·".repeat(empty).bright_black()
    )
}

/// Format feedback markers slot by slot
#[must_use]
pub fn format_feedback(feedback: &Feedback) -> String {
    feedback
        .markers()
        .iter()
        .map(|marker| match marker {
            Some(FeedbackPeg::Black) => "B".bright_white().bold().to_string(),
            Some(FeedbackPeg::White) => "W".white().to_string(),
            None => "-".bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One history line: number, code, pegs and the raw counts
#[must_use]
pub fn format_round(number: usize, round: &Round) -> String {
    let nb_pawns = round.code.len();
    let score = round.score.map_or_else(
        || "waiting for feedback".bright_black().to_string(),
        |score| format!("{}  {score}", format_score(score, nb_pawns)),
    );
    format!(
        "{}. {}  {score}",
        format!("{number:>3}").bright_black(),
        format_code(&round.code)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn code_is_spaced_initials() {
        plain();
        assert_eq!(format_code(&code("BCGO")), "B C G O");
    }

    #[test]
    fn proposition_marks_unset_slots() {
        plain();
        let mut proposition = Proposition::new(4);
        proposition.set(1, Color::Red);
        assert_eq!(format_proposition(&proposition), "_ R _ _");
    }

    #[test]
    fn score_pads_with_empty_pegs() {
        plain();
        assert_eq!(format_score(Score::new(2, 1), 4), "●●○·");
        assert_eq!(format_score(Score::new(0, 0), 4), "····");
        assert_eq!(format_score(Score::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn feedback_shows_markers() {
        plain();
        let mut feedback = Feedback::new(3);
        feedback.cycle(0);
        feedback.cycle(2);
        feedback.cycle(2);
        assert_eq!(format_feedback(&feedback), "B - W");
    }

    #[test]
    fn pending_round_waits_for_feedback() {
        plain();
        let round = Round {
            code: code("BBBB"),
            score: None,
        };
        assert_eq!(format_round(1, &round), "  1. B B B B  waiting for feedback");

        let scored = Round {
            code: code("BBBB"),
            score: Some(Score::new(1, 0)),
        };
        assert_eq!(
            format_round(2, &scored),
            "  2. B B B B  ●···  1 correct, 0 misplaced"
        );
    }
}
