//! Device kind — which simulated appliance a device is, and what it can do.

use serde::{Deserialize, Serialize};

use crate::command::CommandKind;

/// The appliance families known to the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Speaker,
    Toilet,
}

impl DeviceKind {
    /// Commands this kind of device has a handler for.
    #[must_use]
    pub fn capabilities(self) -> &'static [CommandKind] {
        match self {
            Self::Light => &[CommandKind::SwitchOn, CommandKind::SwitchOff],
            Self::Speaker => &[
                CommandKind::SwitchOn,
                CommandKind::SwitchOff,
                CommandKind::PlaySong,
            ],
            Self::Toilet => &[CommandKind::Flush, CommandKind::Clean],
        }
    }

    /// Whether `command` belongs to this kind's capability set.
    #[must_use]
    pub fn supports(self, command: CommandKind) -> bool {
        self.capabilities().contains(&command)
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Speaker => f.write_str("speaker"),
            Self::Toilet => f.write_str("toilet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_let_light_switch_but_not_flush() {
        assert!(DeviceKind::Light.supports(CommandKind::SwitchOn));
        assert!(DeviceKind::Light.supports(CommandKind::SwitchOff));
        assert!(!DeviceKind::Light.supports(CommandKind::Flush));
        assert!(!DeviceKind::Light.supports(CommandKind::PlaySong));
    }

    #[test]
    fn should_let_speaker_play_songs() {
        assert!(DeviceKind::Speaker.supports(CommandKind::PlaySong));
        assert!(!DeviceKind::Speaker.supports(CommandKind::Clean));
    }

    #[test]
    fn should_not_let_toilet_switch() {
        assert_eq!(
            DeviceKind::Toilet.capabilities(),
            &[CommandKind::Flush, CommandKind::Clean]
        );
        assert!(!DeviceKind::Toilet.supports(CommandKind::SwitchOn));
    }

    #[test]
    fn should_display_lowercase_name() {
        assert_eq!(DeviceKind::Speaker.to_string(), "speaker");
    }
}
