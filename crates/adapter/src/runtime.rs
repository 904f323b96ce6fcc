//! Session runtime - async orchestration around the core session.
//!
//! Owns one [`SessionState`] plus a sage, paces cascade rounds for
//! presentation, and fans observations out to subscribers over unbounded
//! channels. Commands arrive either as typed calls ([`SessionRuntime::apply_move`],
//! [`SessionRuntime::reset`]) or as protocol lines ([`SessionRuntime::handle_line`]).

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use prism_match_core::SessionState;
use prism_match_engine::{validate_move, MoveError, MoveOutcome};
use prism_match_types::{
    Pos, CASCADE_PAUSE_MS, EVALUATE_PAUSE_MS, INITIAL_MOVES, REFILL_PAUSE_MS,
};

use crate::protocol::{
    create_ack, create_error, create_observation, ClientMessage, ObservationMessage,
};
use crate::sage::{advise_with_timeout, Sage, SAGE_GREETING, SAGE_TIMEOUT_MS};

/// Runtime configuration, overridable from the environment:
///
/// - `PRISM_SEED`: RNG seed (default 1)
/// - `PRISM_MOVES`: starting move count (default 30)
/// - `PRISM_PACED`: set to `1` to pace cascade rounds with real delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub seed: u32,
    pub starting_moves: u32,
    pub paced: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            starting_moves: INITIAL_MOVES,
            paced: false,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            seed: parse_env("PRISM_SEED", defaults.seed),
            starting_moves: parse_env("PRISM_MOVES", defaults.starting_moves),
            paced: std::env::var("PRISM_PACED").map(|v| v == "1").unwrap_or(false),
        }
    }
}

fn parse_env(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct SessionRuntime {
    session: SessionState,
    sage: Arc<dyn Sage>,
    sage_message: String,
    seq: u64,
    paced: bool,
    observers: Vec<mpsc::UnboundedSender<ObservationMessage>>,
}

impl SessionRuntime {
    pub fn new(config: RuntimeConfig, sage: Arc<dyn Sage>) -> Self {
        Self {
            session: SessionState::new(config.seed, config.starting_moves),
            sage,
            sage_message: SAGE_GREETING.to_string(),
            seq: 0,
            paced: config.paced,
            observers: Vec::new(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn sage_message(&self) -> &str {
        &self.sage_message
    }

    /// Register an observer. Every state change after this call produces an
    /// observation on the returned channel; dropped receivers are pruned on
    /// the next emit.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ObservationMessage> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.observers.push(tx);
        rx
    }

    /// Snapshot the current state as an observation (also broadcast).
    pub fn observe(&mut self) -> ObservationMessage {
        self.seq += 1;
        let obs = create_observation(&self.session, &self.sage_message, self.seq, now_ms());
        self.observers.retain(|tx| tx.send(obs.clone()).is_ok());
        obs
    }

    async fn pause(&self, ms: u64) {
        if self.paced {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    /// Apply one swap, stepping the cascade round by round with pacing and
    /// an observation per round, then refresh the sage line.
    pub async fn apply_move(&mut self, from: Pos, to: Pos) -> Result<MoveOutcome, MoveError> {
        validate_move(&self.session, from, to)?;

        if !self.session.begin_swap(from, to) {
            self.observe();
            return Ok(MoveOutcome::Rejected);
        }

        self.observe();
        let mut score_gained = 0u32;
        let mut rounds = 0u32;
        loop {
            self.pause(EVALUATE_PAUSE_MS).await;
            let Some(round) = self.session.step_round() else {
                break;
            };
            score_gained = score_gained.saturating_add(round.gain);
            rounds += 1;
            self.observe();
            self.pause(CASCADE_PAUSE_MS).await;
            self.pause(REFILL_PAUSE_MS).await;
        }

        self.sage_message = advise_with_timeout(
            Arc::clone(&self.sage),
            self.session.score(),
            rounds,
            self.session.game_over(),
            Duration::from_millis(SAGE_TIMEOUT_MS),
        )
        .await;
        self.observe();

        Ok(MoveOutcome::Resolved {
            score_gained,
            rounds,
        })
    }

    /// Reinitialize the session and greet again.
    pub fn reset(&mut self) {
        self.session.reset();
        self.sage_message = SAGE_GREETING.to_string();
        self.observe();
    }

    /// Handle one protocol line and produce the reply line (ack or error).
    /// Unparseable input is an error reply with seq 0, never a panic.
    pub async fn handle_line(&mut self, line: &str) -> Result<String> {
        let message: ClientMessage = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(err) => {
                let reply = create_error(0, now_ms(), "bad_request", &err.to_string());
                return serde_json::to_string(&reply).context("serializing error reply");
            }
        };

        let seq = message.seq();
        let reply = match message {
            ClientMessage::Move { from, to, .. } => {
                match self.apply_move(from.into(), to.into()).await {
                    Ok(_) => serde_json::to_string(&create_ack(seq, now_ms())),
                    Err(err) => serde_json::to_string(&create_error(
                        seq,
                        now_ms(),
                        err.code(),
                        err.message(),
                    )),
                }
            }
            ClientMessage::Reset { .. } => {
                self.reset();
                serde_json::to_string(&create_ack(seq, now_ms()))
            }
        };
        reply.context("serializing reply")
    }
}

/// Run one full session with a simple greedy agent: take the first legal
/// matching move until no moves remain or the board is dead.
pub async fn run_headless(runtime: &mut SessionRuntime) -> Result<u32> {
    while !runtime.session().game_over() {
        let Some((from, to)) = prism_match_engine::find_valid_move(runtime.session().board())
        else {
            break;
        };
        let outcome = runtime
            .apply_move(from, to)
            .await
            .map_err(|e| anyhow::anyhow!("{}: {}", e.code(), e.message()))?;
        debug_assert!(matches!(outcome, MoveOutcome::Resolved { .. }));
    }
    Ok(runtime.session().score())
}
