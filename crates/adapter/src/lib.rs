//! Async adapter - protocol, pacing, and sage commentary over the core.
//!
//! The core and engine crates are pure and synchronous; this crate is the
//! I/O boundary. It defines the line-delimited JSON protocol, an async
//! session runtime that paces cascade rounds and broadcasts observations,
//! and the sage commentary trait with its built-in implementation.

pub mod protocol;
pub mod runtime;
pub mod sage;

pub use protocol::{
    create_ack, create_error, create_observation, AckMessage, CellRef, ClientMessage,
    ErrorMessage, ObservationMessage, TileMessage,
};
pub use runtime::{run_headless, RuntimeConfig, SessionRuntime};
pub use sage::{
    advise, advise_with_timeout, Sage, StaticSage, SAGE_FALLBACK, SAGE_GREETING, SAGE_TIMEOUT_MS,
};
