//! Virtual light — responds to `SWITCH_ON` and `SWITCH_OFF`.

use std::time::Duration;

use super::DEFAULT_LATENCY;

/// A simulated smart bulb.
pub struct VirtualLight {
    name: String,
    latency: Duration,
}

impl Default for VirtualLight {
    fn default() -> Self {
        Self::new("Hue Light", DEFAULT_LATENCY)
    }
}

impl VirtualLight {
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
        tracing::info!(device = %self.name, "light turned on");
    }

    pub async fn switch_off(&self) {
        tokio::time::sleep(self.latency).await;
        tracing::info!(device = %self.name, "light turned off");
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[test]
    fn should_use_default_name() {
        assert_eq!(VirtualLight::default().name(), "Hue Light");
    }

    #[tokio::test(start_paused = true)]
    async fn should_take_configured_latency_per_action() {
        let light = VirtualLight::new("Desk", Duration::from_millis(250));

        let started = Instant::now();
        light.switch_on().await;
        light.switch_off().await;
        assert_eq!(started.elapsed(), Duration::from_millis(500));
    }
}
