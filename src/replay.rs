//! Headless sessions driven by a script of steps.
//!
//! A script is the keyboard-free equivalent of a play session: each step
//! becomes one [`SessionEvent`] dispatched in order.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use std::str::FromStr;
use tictactoe_session::{
    DisplayOrder, GameSession, Position, SessionEvent, SessionSnapshot, Transition,
};
use tracing::{debug, info, instrument, warn};

/// One step of a replay script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScriptStep {
    /// Place the current mark.
    #[display("{}", _0)]
    Select(Position),
    /// Show the board after N moves.
    #[display("jump:{}", _0)]
    JumpTo(usize),
    /// Flip the move list order.
    #[display("order")]
    ToggleOrder,
    /// Empty the winner log.
    #[display("clear")]
    ClearLog,
}

/// Text that is not a script step.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "cannot parse {:?} (expected 0-8, a position label, jump:N, order or clear)",
    input
)]
pub struct StepParseError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl FromStr for ScriptStep {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let err = || StepParseError {
            input: trimmed.to_string(),
        };
        match lower.as_str() {
            "order" => Ok(Self::ToggleOrder),
            "clear" => Ok(Self::ClearLog),
            _ => match lower.strip_prefix("jump:") {
                Some(target) => target.trim().parse().map(Self::JumpTo).map_err(|_| err()),
                None => trimmed.parse().map(Self::Select).map_err(|_| err()),
            },
        }
    }
}

/// Failure to run a script.
#[derive(Debug, Display, Error)]
pub enum ReplayError {
    /// A step could not be parsed.
    #[display("Step {}: {}", step, source)]
    BadStep {
        /// 1-based step number.
        step: usize,
        /// Why parsing failed.
        source: StepParseError,
    },
    /// A jump named a move that is not in the history.
    #[display(
        "Step {}: cannot jump to move {} (history has {} snapshots)",
        step,
        target,
        history_len
    )]
    JumpOutOfRange {
        /// 1-based step number.
        step: usize,
        /// Requested move.
        target: usize,
        /// History length at that point.
        history_len: usize,
    },
}

/// Parses every step, reporting the first bad one.
#[instrument(skip(steps), fields(count = steps.len()))]
pub fn parse_script<S: AsRef<str>>(steps: &[S]) -> Result<Vec<ScriptStep>, ReplayError> {
    steps
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            raw.as_ref()
                .parse()
                .map_err(|source| ReplayError::BadStep { step: i + 1, source })
        })
        .collect()
}

/// A move the session refused.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct IgnoredStep {
    /// 1-based step number.
    step: usize,
    /// Target square.
    position: Position,
    /// Why it was refused.
    reason: String,
}

/// Final state of a replayed session.
#[derive(Debug, Clone, Getters)]
pub struct ReplayOutcome {
    /// The session after the last step.
    session: GameSession,
    /// Moves that were refused along the way.
    ignored: Vec<IgnoredStep>,
}

/// Runs `steps` against a fresh session.
///
/// Refused moves are collected, not treated as errors. Jumps are checked
/// against the history before dispatch.
#[instrument(skip(steps), fields(count = steps.len()))]
pub fn run_script(steps: &[ScriptStep], order: DisplayOrder) -> Result<ReplayOutcome, ReplayError> {
    let mut session = GameSession::with_display_order(order);
    let mut ignored = Vec::new();

    for (i, step) in steps.iter().enumerate() {
        let number = i + 1;
        let event = match *step {
            ScriptStep::Select(position) => SessionEvent::SelectSquare(position),
            ScriptStep::JumpTo(target) => {
                let history_len = session.history().len();
                if target >= history_len {
                    warn!(step = number, target, history_len, "Jump outside history");
                    return Err(ReplayError::JumpOutOfRange {
                        step: number,
                        target,
                        history_len,
                    });
                }
                SessionEvent::JumpTo(target)
            }
            ScriptStep::ToggleOrder => SessionEvent::ToggleDisplayOrder,
            ScriptStep::ClearLog => SessionEvent::ClearWinnerLog,
        };
        debug!(step = number, %event, "Dispatching");
        if let Transition::Ignored(reason) = session.dispatch(event)
            && let SessionEvent::SelectSquare(position) = event
        {
            ignored.push(IgnoredStep {
                step: number,
                position,
                reason: reason.to_string(),
            });
        }
    }

    info!(
        history_len = session.history().len(),
        ignored = ignored.len(),
        status = %session.status(),
        "Replay finished"
    );
    Ok(ReplayOutcome { session, ignored })
}

/// Human-readable report of a replay.
pub fn render_report(outcome: &ReplayOutcome) -> String {
    let session = outcome.session();
    let mut out = String::new();

    out.push_str(&session.current_board().display());
    out.push_str("\n\n");
    out.push_str(&format!("{}\n", session.status()));
    out.push_str(&format!("Winner string: {}\n", session.winner_log()));
    out.push_str(&format!("{}\n", session.display_order().control_label()));
    out.push_str("\nMoves:\n");
    for (n, entry) in session.move_list().enumerate() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, n + 1, entry.label()));
    }

    if !outcome.ignored().is_empty() {
        out.push_str("\nIgnored:\n");
        for skipped in outcome.ignored() {
            out.push_str(&format!(
                "  step {} ({}): {}\n",
                skipped.step(),
                skipped.position(),
                skipped.reason()
            ));
        }
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    session: SessionSnapshot,
    ignored: &'a [IgnoredStep],
}

/// JSON report of a replay.
pub fn render_json(outcome: &ReplayOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        session: SessionSnapshot::capture(outcome.session()),
        ignored: outcome.ignored(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!("4".parse::<ScriptStep>(), Ok(ScriptStep::Select(Position::Center)));
        assert_eq!(" Top-Left ".parse::<ScriptStep>(), Ok(ScriptStep::Select(Position::TopLeft)));
        assert_eq!("JUMP: 3".parse::<ScriptStep>(), Ok(ScriptStep::JumpTo(3)));
        assert_eq!("order".parse::<ScriptStep>(), Ok(ScriptStep::ToggleOrder));
        assert_eq!("Clear".parse::<ScriptStep>(), Ok(ScriptStep::ClearLog));
        assert!("jump:x".parse::<ScriptStep>().is_err());
        assert!("10".parse::<ScriptStep>().is_err());
    }

    #[test]
    fn test_parse_script_reports_step_number() {
        let err = parse_script(&["0", "1", "nope"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Step 3: cannot parse \"nope\" (expected 0-8, a position label, jump:N, order or clear)"
        );
    }

    #[test]
    fn test_step_display_parses_back() {
        for step in [
            ScriptStep::Select(Position::BottomRight),
            ScriptStep::JumpTo(2),
            ScriptStep::ToggleOrder,
            ScriptStep::ClearLog,
        ] {
            assert_eq!(step.to_string().parse::<ScriptStep>(), Ok(step));
        }
    }
}
