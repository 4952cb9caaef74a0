//! Event — an immutable record of something a device did.
//!
//! The registry emits one event per registration and two per dispatched
//! message (started, completed). Read in publication order, the stream is
//! the side-effect log of a run.

use serde::{Deserialize, Serialize};

use crate::command::CommandKind;
use crate::id::{DeviceId, EventId};
use crate::message::Message;
use crate::time::{self, Timestamp};

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    DeviceRegistered,
    CommandStarted,
    CommandCompleted,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeviceRegistered => f.write_str("device_registered"),
            Self::CommandStarted => f.write_str("command_started"),
            Self::CommandCompleted => f.write_str("command_completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    pub device_id: DeviceId,
    pub command: Option<CommandKind>,
    pub payload: Option<String>,
    pub timestamp: Timestamp,
}

impl Event {
    /// A device joined the registry.
    #[must_use]
    pub fn registered(device_id: DeviceId) -> Self {
        Self {
            id: EventId::new(),
            event_type: EventType::DeviceRegistered,
            device_id,
            command: None,
            payload: None,
            timestamp: time::now(),
        }
    }

    /// A message moved through dispatch (`CommandStarted` / `CommandCompleted`).
    #[must_use]
    pub fn command(event_type: EventType, message: &Message) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            device_id: message.device_id(),
            command: Some(message.kind()),
            payload: message.payload().map(str::to_string),
            timestamp: time::now(),
        }
    }

    /// Whether this event is `event_type` for `command` on `device_id`.
    #[must_use]
    pub fn is(&self, event_type: EventType, device_id: DeviceId, command: CommandKind) -> bool {
        self.event_type == event_type
            && self.device_id == device_id
            && self.command == Some(command)
    }
}
