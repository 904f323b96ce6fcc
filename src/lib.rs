//! Prism Match (workspace facade crate).
//!
//! This package keeps the `prism_match::{core,engine,adapter,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use prism_match_adapter as adapter;
pub use prism_match_core as core;
pub use prism_match_engine as engine;
pub use prism_match_types as types;
