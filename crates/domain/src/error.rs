//! Common error types used across the workspace.
//!
//! Each failure has its own typed struct; [`IotError`] gathers them with
//! `#[from]` conversions so callers can propagate with `?`.

use crate::command::CommandKind;
use crate::device::DeviceKind;
use crate::id::DeviceId;

/// Top-level error for every fallible operation in the simulator.
#[derive(Debug, thiserror::Error)]
pub enum IotError {
    #[error("unknown device")]
    UnknownDevice(#[from] UnknownDeviceError),

    #[error("command not supported")]
    CommandNotSupported(#[from] CommandNotSupportedError),

    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// A message targeted an identifier that was never registered.
#[derive(Debug, thiserror::Error)]
#[error("no device registered with id {id}")]
pub struct UnknownDeviceError {
    pub id: DeviceId,
}

/// A message asked a device for a command outside its capability set.
#[derive(Debug, thiserror::Error)]
#[error("{device} does not support {command}")]
pub struct CommandNotSupportedError {
    pub device: DeviceKind,
    pub command: CommandKind,
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{command} requires a payload")]
    MissingPayload { command: CommandKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_unknown_device_into_iot_error() {
        let id = DeviceId::new();
        let err: IotError = UnknownDeviceError { id }.into();
        assert!(matches!(err, IotError::UnknownDevice(UnknownDeviceError { id: got }) if got == id));
    }

    #[test]
    fn should_describe_unsupported_command() {
        let err = CommandNotSupportedError {
            device: DeviceKind::Light,
            command: CommandKind::Flush,
        };
        assert_eq!(err.to_string(), "light does not support FLUSH");
    }

    #[test]
    fn should_keep_source_on_wrapped_error() {
        let err: IotError = ValidationError::MissingPayload {
            command: CommandKind::PlaySong,
        }
        .into();
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("PLAY_SONG requires a payload"));
    }
}
