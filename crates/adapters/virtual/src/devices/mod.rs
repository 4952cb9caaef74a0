//! Virtual device implementations — light, speaker, toilet.
//!
//! Every action sleeps for the device's latency and then logs what it did.
//! Devices keep no state between commands.

mod light;
mod speaker;
mod toilet;

pub use light::VirtualLight;
pub use speaker::VirtualSpeaker;
pub use toilet::VirtualToilet;

use std::future::Future;
use std::time::Duration;

use iotsim_app::ports::Device;
use iotsim_domain::command::CommandKind;
use iotsim_domain::device::DeviceKind;
use iotsim_domain::error::{CommandNotSupportedError, IotError, ValidationError};

/// Latency used by the `Default` constructors.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Wrapper enum for the concrete virtual device types.
pub enum VirtualDevice {
    Light(VirtualLight),
    Speaker(VirtualSpeaker),
    Toilet(VirtualToilet),
}

impl From<VirtualLight> for VirtualDevice {
    fn from(device: VirtualLight) -> Self {
        Self::Light(device)
    }
}

impl From<VirtualSpeaker> for VirtualDevice {
    fn from(device: VirtualSpeaker) -> Self {
        Self::Speaker(device)
    }
}

impl From<VirtualToilet> for VirtualDevice {
    fn from(device: VirtualToilet) -> Self {
        Self::Toilet(device)
    }
}

impl Device for VirtualDevice {
    fn name(&self) -> &str {
        match self {
            Self::Light(d) => d.name(),
            Self::Speaker(d) => d.name(),
            Self::Toilet(d) => d.name(),
        }
    }

    fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(_) => DeviceKind::Light,
            Self::Speaker(_) => DeviceKind::Speaker,
            Self::Toilet(_) => DeviceKind::Toilet,
        }
    }

    fn connect(&self) -> impl Future<Output = Result<(), IotError>> + Send {
        async move {
            match self {
                Self::Light(d) => d.connect().await,
                Self::Speaker(d) => d.connect().await,
                Self::Toilet(d) => d.connect().await,
            }
            Ok(())
        }
    }

    fn handle(
        &self,
        command: CommandKind,
        payload: Option<&str>,
    ) -> impl Future<Output = Result<(), IotError>> + Send {
        async move {
            match (self, command) {
                (Self::Light(d), CommandKind::SwitchOn) => d.switch_on().await,
                (Self::Light(d), CommandKind::SwitchOff) => d.switch_off().await,
                (Self::Speaker(d), CommandKind::SwitchOn) => d.switch_on().await,
                (Self::Speaker(d), CommandKind::SwitchOff) => d.switch_off().await,
                (Self::Speaker(d), CommandKind::PlaySong) => {
                    let title = payload.ok_or(ValidationError::MissingPayload { command })?;
                    d.play_song(title).await;
                }
                (Self::Toilet(d), CommandKind::Flush) => d.flush().await,
                (Self::Toilet(d), CommandKind::Clean) => d.clean().await,
                _ => {
                    return Err(CommandNotSupportedError {
                        device: self.kind(),
                        command,
                    }
                    .into());
                }
            }
            Ok(())
        }
    }
}
