//! Virtual toilet — responds to `FLUSH` and `CLEAN`.

use std::time::Duration;

use super::DEFAULT_LATENCY;

/// A simulated smart toilet. It has no power switch.
pub struct VirtualToilet {
    name: String,
    latency: Duration,
}

impl Default for VirtualToilet {
    fn default() -> Self {
        Self::new("Smart Toilet", DEFAULT_LATENCY)
    }
}

impl VirtualToilet {
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

    pub async fn flush(&self) {
        tokio::time::sleep(self.latency).await;
        tracing::info!(device = %self.name, "flushed");
    }

    pub async fn clean(&self) {
        tokio::time::sleep(self.latency).await;
        tracing::info!(device = %self.name, "cleaned");
    }
}
