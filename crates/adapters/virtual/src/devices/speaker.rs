//! Virtual speaker — responds to `SWITCH_ON`, `SWITCH_OFF` and `PLAY_SONG`.

use std::time::Duration;

use super::DEFAULT_LATENCY;

/// A simulated smart speaker.
pub struct VirtualSpeaker {
    name: String,
    latency: Duration,
}

impl Default for VirtualSpeaker {
    fn default() -> Self {
        Self::new("Smart Speaker", DEFAULT_LATENCY)
    }
}

impl VirtualSpeaker {
    #[must_use]
    pub fn new(name: impl Into<String>, latency: Duration) -> Self {
        Self {
            name: name.into(),
            latency,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn connect(&self) {
        tracing::info!(device = %self.name, "connecting");
        tokio::time::sleep(self.latency).await;
        tracing::info!(device = %self.name, "connected");
    }

    pub async fn switch_on(&self) {
        tokio::time::sleep(self.latency).await;
        tracing::info!(device = %self.name, "speaker turned on");
    }

    pub async fn switch_off(&self) {
        tokio::time::sleep(self.latency).await;
        tracing::info!(device = %self.name, "speaker turned off");
    }

    pub async fn play_song(&self, title: &str) {
        tokio::time::sleep(self.latency).await;
        tracing::info!(device = %self.name, song = title, "playing song");
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn should_suspend_while_playing() {
        let speaker = VirtualSpeaker::new("Kitchen", Duration::from_secs(1));

        let started = Instant::now();
        speaker.play_song("Never Gonna Give You Up").await;
        assert_eq!(started.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn should_interleave_two_speakers() {
        let a = VirtualSpeaker::new("A", Duration::from_millis(300));
        let b = VirtualSpeaker::new("B", Duration::from_millis(300));

        let started = Instant::now();
        tokio::join!(a.switch_on(), b.switch_on());
        assert_eq!(started.elapsed(), Duration::from_millis(300));
    }
}
