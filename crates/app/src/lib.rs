//! # iotsim-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Device` — a simulated appliance that can connect and handle commands
//!   - `EventPublisher` — sink for the side-effect log
//! - Provide the `DeviceRegistry` service: registration and message dispatch
//! - Provide the sequential/parallel **composition combinators** and the
//!   `ProgramRunner` that interprets a `Program` tree with them
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `iotsim-domain` only (plus `tokio::sync` and `futures`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod compose;
pub mod event_bus;
pub mod ports;
pub mod program_runner;
pub mod services;
