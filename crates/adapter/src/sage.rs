//! Sage commentary - flavor text attached to observations.
//!
//! The sage is a pluggable collaborator behind the [`Sage`] trait. Its
//! output is cosmetic: any failure, timeout, or empty line is replaced by
//! a fixed fallback so commentary can never stall or break a session.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

/// Line shown before the first move of a session.
pub const SAGE_GREETING: &str = "Flow with the square.";

/// Line substituted when the sage fails or returns nothing.
pub const SAGE_FALLBACK: &str = "The elements align in mysterious ways.";

/// Upper bound on how long a move waits for commentary.
pub const SAGE_TIMEOUT_MS: u64 = 2_000;

/// A commentary source consulted after each committed move.
///
/// `combo` is the number of cascade rounds the move produced (0 for a
/// rejected swap). Implementations may block; callers wrap them in
/// [`advise_with_timeout`].
pub trait Sage: Send + Sync {
    fn commentary(&self, score: u32, combo: u32, game_over: bool) -> Result<String>;
}

/// Deterministic built-in sage with canned lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSage;

const COMBO_LINES: [&str; 4] = [
    "A single ripple, felt across the whole pond.",
    "Twice the elements answered. Stay present.",
    "The cascade deepens. Do not chase it.",
    "Such resonance is rare. Breathe, and continue.",
];

const QUIET_LINES: [&str; 3] = [
    "Stillness, too, is a move.",
    "The grid waits without judgment.",
    "Observe before you act.",
];

impl Sage for StaticSage {
    fn commentary(&self, score: u32, combo: u32, game_over: bool) -> Result<String> {
        if game_over {
            return Ok(format!(
                "The final stone settles at {score}. What remains is what you learned."
            ));
        }
        let line = if combo == 0 {
            QUIET_LINES[(score as usize / 100) % QUIET_LINES.len()]
        } else {
            COMBO_LINES[(combo as usize - 1).min(COMBO_LINES.len() - 1)]
        };
        Ok(line.to_string())
    }
}

/// Consult the sage, normalizing failures and blank output to the fallback.
pub fn advise(sage: &dyn Sage, score: u32, combo: u32, game_over: bool) -> String {
    match sage.commentary(score, combo, game_over) {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                SAGE_FALLBACK.to_string()
            } else {
                trimmed.to_string()
            }
        }
        Err(_) => SAGE_FALLBACK.to_string(),
    }
}

/// Consult the sage off the async runtime with a hard deadline.
///
/// Slow or panicking implementations degrade to the fallback line.
pub async fn advise_with_timeout(
    sage: Arc<dyn Sage>,
    score: u32,
    combo: u32,
    game_over: bool,
    timeout: Duration,
) -> String {
    let task = tokio::task::spawn_blocking(move || advise(sage.as_ref(), score, combo, game_over));
    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(line)) => line,
        _ => SAGE_FALLBACK.to_string(),
    }
}
