//! Command kind — the closed set of operations a device may receive.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operation requested by a [`Message`](crate::message::Message).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandKind {
    SwitchOn,
    SwitchOff,
    PlaySong,
    Flush,
    Clean,
}

impl CommandKind {
    /// Every command kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::SwitchOn,
        Self::SwitchOff,
        Self::PlaySong,
        Self::Flush,
        Self::Clean,
    ];

    /// Wire name, e.g. `SWITCH_ON`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SwitchOn => "SWITCH_ON",
            Self::SwitchOff => "SWITCH_OFF",
            Self::PlaySong => "PLAY_SONG",
            Self::Flush => "FLUSH",
            Self::Clean => "CLEAN",
        }
    }

    /// Whether a message carrying this command must have a payload.
    #[must_use]
    pub fn requires_payload(self) -> bool {
        matches!(self, Self::PlaySong)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unrecognised command name.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown command {0:?}")]
pub struct UnknownCommandError(pub String);

impl FromStr for CommandKind {
    type Err = UnknownCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownCommandError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_displayed_name() {
        for kind in CommandKind::ALL {
            assert_eq!(kind.to_string().parse::<CommandKind>(), Ok(kind));
        }
    }

    #[test]
    fn should_reject_unknown_or_lowercase_names() {
        assert!("DANCE".parse::<CommandKind>().is_err());
        assert!("switch_on".parse::<CommandKind>().is_err());
    }

    #[test]
    fn should_serialize_with_wire_name() {
        let json = serde_json::to_string(&CommandKind::PlaySong).unwrap();
        assert_eq!(json, "\"PLAY_SONG\"");
    }

    #[test]
    fn should_only_require_payload_for_play_song() {
        let with_payload: Vec<_> = CommandKind::ALL
            .into_iter()
            .filter(|kind| kind.requires_payload())
            .collect();
        assert_eq!(with_payload, vec![CommandKind::PlaySong]);
    }
}
