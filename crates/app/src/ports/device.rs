//! Device port — a simulated appliance the registry can route commands to.

use std::future::Future;

use iotsim_domain::command::CommandKind;
use iotsim_domain::device::DeviceKind;
use iotsim_domain::error::IotError;

/// A device that can be registered and driven by messages.
///
/// Implementations live in adapter crates (e.g. `adapter_virtual`).
/// The registry calls the methods in order:
///
/// 1. [`connect`](Self::connect) — once, when the device is registered
/// 2. [`handle`](Self::handle) — once per dispatched message
///
/// Handlers take `&self`: the registry does not serialise calls to the same
/// device, so implementations must not rely on exclusive access.
pub trait Device: Send + Sync {
    /// Human readable name used in logs (e.g. `"Hue Light"`).
    fn name(&self) -> &str;

    /// Which appliance family this is; decides the capability set.
    fn kind(&self) -> DeviceKind;

    /// Bring the device online. Suspends for the device's latency.
    fn connect(&self) -> impl Future<Output = Result<(), IotError>> + Send;

    /// Execute `command`, suspending for the device's latency.
    ///
    /// `payload` is the message payload, if any (the song title for
    /// `PLAY_SONG`).
    fn handle(
        &self,
        command: CommandKind,
        payload: Option<&str>,
    ) -> impl Future<Output = Result<(), IotError>> + Send;
}
