//! # iotsim-adapter-virtual
//!
//! Simulated devices for the iotsim demo. Nothing here talks to hardware:
//! every action waits for an artificial latency and logs a line.
//!
//! ## Provided devices
//!
//! | Device | Default name | Commands |
//! |--------|--------------|----------|
//! | [`VirtualLight`] | `Hue Light` | `SWITCH_ON` / `SWITCH_OFF` |
//! | [`VirtualSpeaker`] | `Smart Speaker` | `SWITCH_ON` / `SWITCH_OFF` / `PLAY_SONG` |
//! | [`VirtualToilet`] | `Smart Toilet` | `FLUSH` / `CLEAN` |
//!
//! [`VirtualDevice`] wraps the three so a single registry can hold them all.
//!
//! ## Dependency rule
//!
//! Depends on `iotsim-app` (port traits) and `iotsim-domain` only.

mod devices;

pub use devices::{DEFAULT_LATENCY, VirtualDevice, VirtualLight, VirtualSpeaker, VirtualToilet};
