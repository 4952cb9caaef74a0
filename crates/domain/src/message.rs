//! Message — a single command addressed to one device.

use serde::{Deserialize, Serialize};

use crate::command::CommandKind;
use crate::error::{IotError, ValidationError};
use crate::id::DeviceId;

/// Immutable `(target, command, payload)` triple.
///
/// Fields are private so a message cannot change once it is part of a
/// [`Program`](crate::program::Program).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    device_id: DeviceId,
    kind: CommandKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<String>,
}

impl Message {
    /// A command without payload.
    #[must_use]
    pub fn new(device_id: DeviceId, kind: CommandKind) -> Self {
        Self {
            device_id,
            kind,
            payload: None,
        }
    }

    /// A command carrying a string payload.
    #[must_use]
    pub fn with_payload(device_id: DeviceId, kind: CommandKind, payload: impl Into<String>) -> Self {
        Self {
            device_id,
            kind,
            payload: Some(payload.into()),
        }
    }

    /// Shorthand for a `PLAY_SONG` message.
    #[must_use]
    pub fn play_song(device_id: DeviceId, title: impl Into<String>) -> Self {
        Self::with_payload(device_id, CommandKind::PlaySong, title)
    }

    #[must_use]
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    #[must_use]
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingPayload`] when the command needs a
    /// payload and none was given.
    pub fn validate(&self) -> Result<(), IotError> {
        if self.kind.requires_payload() && self.payload.is_none() {
            return Err(ValidationError::MissingPayload { command: self.kind }.into());
        }
        Ok(())
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.payload {
            Some(payload) => write!(f, "{}({}, {payload:?})", self.kind, self.device_id),
            None => write!(f, "{}({})", self.kind, self.device_id),
        }
    }
}
