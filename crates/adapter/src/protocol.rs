//! Protocol module - JSON message types for observers and controllers
//!
//! Implements a line-delimited JSON protocol. All messages have: type, seq
//! (sequence number), ts (timestamp in ms). Field names on the wire are
//! camelCase; element, special, and phase values use their string codecs
//! from the types crate.

use serde::{Deserialize, Serialize};

use prism_match_core::SessionState;
use prism_match_types::{GamePhase, Pos, GRID_SIZE};

// ============== Server -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

impl Default for ObservationType {
    fn default() -> Self {
        Self::Observation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AckType {
    #[serde(rename = "ack")]
    Ack,
}

impl Default for AckType {
    fn default() -> Self {
        Self::Ack
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

impl Default for ErrorType {
    fn default() -> Self {
        Self::Error
    }
}

/// One tile as seen by observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMessage {
    pub id: u32,
    pub element: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
}

/// Full session snapshot streamed to observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub ts: u64,
    pub grid: Vec<Vec<Option<TileMessage>>>,
    pub score: u32,
    #[serde(rename = "movesRemaining")]
    pub moves_remaining: u32,
    pub multiplier: u32,
    pub phase: String,
    #[serde(rename = "sageMessage")]
    pub sage_message: String,
    #[serde(rename = "gameOver")]
    pub game_over: bool,
}

/// Command acknowledgment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: AckType,
    pub seq: u64,
    pub ts: u64,
    pub status: String,
}

/// Error response with a stable code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub ts: u64,
    pub code: String,
    pub message: String,
}

// ============== Client -> Server Messages ==============

/// A grid coordinate on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: i8,
    pub col: i8,
}

impl From<CellRef> for Pos {
    fn from(value: CellRef) -> Self {
        Pos::new(value.row, value.col)
    }
}

impl From<Pos> for CellRef {
    fn from(value: Pos) -> Self {
        Self {
            row: value.row,
            col: value.col,
        }
    }
}

/// Inbound client command
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "move")]
    Move {
        seq: u64,
        #[serde(default)]
        ts: u64,
        from: CellRef,
        to: CellRef,
    },
    #[serde(rename = "reset")]
    Reset {
        seq: u64,
        #[serde(default)]
        ts: u64,
    },
}

impl ClientMessage {
    pub fn seq(&self) -> u64 {
        match self {
            ClientMessage::Move { seq, .. } | ClientMessage::Reset { seq, .. } => *seq,
        }
    }
}

/// Build an observation from live session state.
pub fn create_observation(
    session: &SessionState,
    sage_message: &str,
    seq: u64,
    ts: u64,
) -> ObservationMessage {
    let size = GRID_SIZE as i8;
    let grid = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    session.board().tile(Pos::new(row, col)).map(|tile| TileMessage {
                        id: tile.id,
                        element: tile.element.as_str().to_string(),
                        special: tile.special.map(|s| s.as_str().to_string()),
                    })
                })
                .collect()
        })
        .collect();

    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        ts,
        grid,
        score: session.score(),
        moves_remaining: session.moves_remaining(),
        multiplier: session.multiplier(),
        phase: session.phase().as_str().to_string(),
        sage_message: sage_message.to_string(),
        game_over: session.phase() == GamePhase::GameOver,
    }
}

pub fn create_ack(seq: u64, ts: u64) -> AckMessage {
    AckMessage {
        msg_type: AckType::Ack,
        seq,
        ts,
        status: "ok".to_string(),
    }
}

pub fn create_error(seq: u64, ts: u64, code: &str, message: &str) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        seq,
        ts,
        code: code.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_match_types::INITIAL_MOVES;

    #[test]
    fn test_observation_wire_shape() {
        let session = SessionState::new(7, INITIAL_MOVES);
        let obs = create_observation(&session, "Flow with the square.", 1, 42);
        let json = serde_json::to_string(&obs).unwrap();

        assert!(json.contains("\"type\":\"observation\""));
        assert!(json.contains("\"movesRemaining\":30"));
        assert!(json.contains("\"sageMessage\":\"Flow with the square.\""));
        assert!(json.contains("\"phase\":\"idle\""));

        let back: ObservationMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obs);
        assert_eq!(back.grid.len(), 8);
        assert!(back.grid.iter().all(|row| row.len() == 8));
    }

    #[test]
    fn test_plain_tile_omits_special_field() {
        let session = SessionState::new(7, INITIAL_MOVES);
        let obs = create_observation(&session, "", 1, 0);
        let json = serde_json::to_string(&obs).unwrap();
        // Fresh boards hold only plain tiles.
        assert!(!json.contains("\"special\""));
    }

    #[test]
    fn test_parse_move_command() {
        let line = r#"{"type":"move","seq":3,"ts":9,"from":{"row":2,"col":1},"to":{"row":2,"col":2}}"#;
        let msg: ClientMessage = serde_json::from_str(line).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Move {
                seq: 3,
                ts: 9,
                from: CellRef { row: 2, col: 1 },
                to: CellRef { row: 2, col: 2 },
            }
        );
        assert_eq!(msg.seq(), 3);
    }

    #[test]
    fn test_parse_reset_command_without_ts() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"reset","seq":8}"#).unwrap();
        assert_eq!(msg, ClientMessage::Reset { seq: 8, ts: 0 });
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"jump","seq":1}"#).is_err());
    }

    #[test]
    fn test_error_message_carries_code() {
        let err = create_error(4, 10, "invalid_move", "cells are not grid-adjacent");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"invalid_move\""));
    }
}
