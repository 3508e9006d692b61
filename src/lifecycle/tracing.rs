//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber for the binary.
//!
//! Contender activity is logged at `info` as `[<registration code>] <what happened>`:
//!
//! ```text
//! INFO [AB12CD34] Picked name Hope Simoneau
//! INFO [AB12CD34] Joining contest Spring Boulder Jam as Open
//! INFO [AB12CD34] Added tick of problem 17
//! INFO [EF56GH78] Removed tick for problem 4
//! ```
//!
//! Failed actions, no-op actions, phase transitions and every request are
//! logged at `debug`:
//!
//! ```bash
//! RUST_LOG=debug cargo run -- contenders.txt
//! RUST_LOG=contender_sim::clients=debug cargo run -- contenders.txt
//! ```
//!
//! Without `RUST_LOG` the filter defaults to `info`.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Activity lines carry the contender instead
        .compact()
        .init();
}
