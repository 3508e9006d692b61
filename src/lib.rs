//! # Contender Simulator
//!
//! > **Simulated contenders generating live traffic against a climbing-competition scoring service.**
//!
//! Every contender runs as its own Tokio task. It loads its profile, classes,
//! ticks and problems, joins the contest under a made-up name, and then keeps
//! ticking problems, withdrawing ticks and occasionally switching class at
//! random intervals until the whole fleet is told to stop.
//!
//! ## Concurrency Model
//!
//! - One task per contender; each task exclusively owns its
//!   [`ContenderState`](contender_actor::ContenderState), so there are no locks.
//! - The only shared value is a `CancellationToken`, cancelled once to stop
//!   everybody. Drivers check it between pacing steps; an in-flight request is
//!   always allowed to finish.
//! - Local state changes only after the server acknowledged the write, so a
//!   failed request leaves it untouched.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Interface ([`clients`])
//! - **Role**: Talks to the scoring service. [`RemoteService`](clients::RemoteService)
//!   is the seam, [`HttpRemote`](clients::HttpRemote) the reqwest implementation,
//!   [`ScoringClient`](clients::ScoringClient) the typed operations.
//! - **Testing**: [`clients::mock::MockRemote`] scripts responses in order.
//!
//! ### 2. The Implementation ([`contender_actor`])
//! - **Role**: Local state, the three actions, and the load → join → loop driver.
//! - **Key items**: [`ContenderDriver`](contender_actor::ContenderDriver),
//!   [`ContenderAction`](contender_actor::ContenderAction).
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! - **Role**: Spawns the drivers, stops and joins them.
//! - **Key items**: [`Fleet`](lifecycle::Fleet), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 4. Data ([`model`], [`config`])
//! - Wire types for the scoring API and the settings of a run.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # One registration code per line
//! RUST_LOG=info cargo run -- --delay 20 contenders.txt
//! ```
//!
//! Press Ctrl-C to stop every contender.

pub mod clients;
pub mod config;
pub mod contender_actor;
pub mod lifecycle;
pub mod model;
