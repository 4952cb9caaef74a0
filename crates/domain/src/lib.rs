//! # iotsim-domain
//!
//! Pure domain model for the iotsim device simulator.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Commands** (the closed set of operations a device may receive)
//! - Define **Device kinds** and their capability sets
//! - Define **Messages** (one command addressed to one device)
//! - Define **Programs** (trees of sequential/parallel groups of messages)
//! - Define **Events** (records of registrations and command executions)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or runtime crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod command;
pub mod device;
pub mod event;
pub mod message;
pub mod program;
