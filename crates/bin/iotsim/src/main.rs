//! # iotsim — smart-home program demo
//!
//! Composition root that wires the virtual devices into a registry and runs
//! the wake-up and sleep programs concurrently.
//!
//! ## Responsibilities
//! - Load configuration (`iotsim.toml`, environment overrides)
//! - Initialise logging
//! - Register the light, speaker and toilet concurrently
//! - Build both programs, check them, run them side by side
//! - Report elapsed wall-clock time
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod programs;

use std::time::Instant;

use iotsim_adapter_virtual::{VirtualDevice, VirtualLight, VirtualSpeaker, VirtualToilet};
use iotsim_app::event_bus::{InProcessEventBus, drain};
use iotsim_app::program_runner::ProgramRunner;
use iotsim_app::services::device_registry::DeviceRegistry;
use iotsim_domain::event::EventType;
use iotsim_domain::program::Program;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::programs::Household;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();

    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_target(false)
        .init();

    // Event bus
    let event_bus = InProcessEventBus::new(config.events.capacity);
    let mut events = event_bus.subscribe();

    // Devices
    let registry: DeviceRegistry<VirtualDevice, _> = DeviceRegistry::new(event_bus);
    let (light, speaker, toilet) = tokio::join!(
        registry.register_device(
            VirtualLight::new("Hue Light", config.devices.light_delay()).into()
        ),
        registry.register_device(
            VirtualSpeaker::new("Smart Speaker", config.devices.speaker_delay()).into()
        ),
        registry.register_device(
            VirtualToilet::new("Smart Toilet", config.devices.toilet_delay()).into()
        ),
    );
    let home = Household {
        light: light?,
        speaker: speaker?,
        toilet: toilet?,
    };

    // Programs
    let wake_up = programs::wake_up(home, &config.demo.song);
    let sleep = programs::sleep(home);
    tracing::info!(%wake_up, "wake-up program");
    tracing::info!(%sleep, "sleep program");

    let both = Program::parallel([wake_up, sleep]);
    let expected = programs::event_volume(registry.len().await, &both);
    if let Err(err) = config.events.ensure_room_for(expected) {
        tracing::error!(error = %err, "event bus too small for the run");
        return Err(err.into());
    }

    let runner = ProgramRunner::new(&registry);
    if let Err(err) = runner.check_and_run(&both).await {
        tracing::error!(error = %err, "program failed");
        return Err(err.into());
    }

    let completed = drain(&mut events)
        .iter()
        .filter(|e| e.event_type == EventType::CommandCompleted)
        .count();
    tracing::info!(completed, "all programs finished");

    println!("Completed: {completed} commands");
    println!("Elapsed: {:.3}s", started.elapsed().as_secs_f64());
    Ok(())
}
