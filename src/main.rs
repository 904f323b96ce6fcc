//! Headless session runner (default binary).
//!
//! Plays one full session with the greedy first-move agent, streaming each
//! observation as a JSON line on stdout. Configure via `PRISM_SEED`,
//! `PRISM_MOVES`, and `PRISM_PACED=1` for real cascade pacing.

use std::sync::Arc;

use anyhow::Result;

use prism_match::adapter::{run_headless, RuntimeConfig, SessionRuntime, StaticSage};

#[tokio::main]
async fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    let mut runtime = SessionRuntime::new(config, Arc::new(StaticSage));
    let mut observations = runtime.subscribe();

    // Opening frame, then one line per state change.
    runtime.observe();

    let score = run_headless(&mut runtime).await?;

    while let Ok(obs) = observations.try_recv() {
        println!("{}", serde_json::to_string(&obs)?);
    }

    eprintln!(
        "session over: score {score}, moves left {}, seed {}",
        runtime.session().moves_remaining(),
        runtime.session().seed()
    );
    Ok(())
}
