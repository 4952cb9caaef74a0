//! The two demo programs driven by the binary.

use iotsim_domain::command::CommandKind;
use iotsim_domain::id::DeviceId;
use iotsim_domain::message::Message;
use iotsim_domain::program::Program;

/// Ids handed out when the demo devices were registered.
#[derive(Debug, Clone, Copy)]
pub struct Household {
    pub light: DeviceId,
    pub speaker: DeviceId,
    pub toilet: DeviceId,
}

/// Light and speaker on together, then the song.
#[must_use]
pub fn wake_up(home: Household, song: &str) -> Program {
    Program::sequence([
        Program::parallel([Program::run([
            Message::new(home.light, CommandKind::SwitchOn),
            Message::new(home.speaker, CommandKind::SwitchOn),
        ])]),
        Program::sequence([Program::run([Message::play_song(home.speaker, song)])]),
    ])
}

/// Light and speaker off together, then flush and clean.
#[must_use]
pub fn sleep(home: Household) -> Program {
    Program::sequence([
        Program::parallel([Program::run([
            Message::new(home.light, CommandKind::SwitchOff),
            Message::new(home.speaker, CommandKind::SwitchOff),
        ])]),
        Program::sequence([Program::run([
            Message::new(home.toilet, CommandKind::Flush),
            Message::new(home.toilet, CommandKind::Clean),
        ])]),
    ])
}

/// Events a run publishes on the bus: one per registered device, then a
/// started and a completed event per message.
#[must_use]
pub fn event_volume(devices: usize, program: &Program) -> usize {
    devices + 2 * program.len()
}
