//! Device registry — owns the known devices and routes messages to them.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use iotsim_domain::device::DeviceKind;
use iotsim_domain::error::{CommandNotSupportedError, IotError, UnknownDeviceError};
use iotsim_domain::event::{Event, EventType};
use iotsim_domain::id::DeviceId;
use iotsim_domain::message::Message;

use crate::ports::{Device, EventPublisher};

/// Registry of devices keyed by the id generated at registration.
///
/// Entries are only ever added. The map lock is released before a device
/// handler is awaited, so commands to different devices interleave freely.
pub struct DeviceRegistry<D, P> {
    devices: RwLock<HashMap<DeviceId, Arc<D>>>,
    publisher: P,
}

impl<D, P> DeviceRegistry<D, P>
where
    D: Device,
    P: EventPublisher,
{
    /// Create an empty registry that reports to `publisher`.
    pub fn new(publisher: P) -> Self {
        Self {
            devices: RwLock::new(HashMap::new()),
            publisher,
        }
    }

    /// Connect `device`, store it under a fresh id and return that id.
    ///
    /// Several registrations may run concurrently.
    ///
    /// # Errors
    ///
    /// Propagates a failure from [`Device::connect`]; the device is not
    /// stored in that case.
    #[tracing::instrument(skip_all, fields(device = device.name(), kind = %device.kind()))]
    pub async fn register_device(&self, device: D) -> Result<DeviceId, IotError> {
        device.connect().await?;

        let id = DeviceId::new();
        self.devices.write().await.insert(id, Arc::new(device));
        tracing::info!(%id, "device registered");
        self.publisher.publish(Event::registered(id));
        Ok(id)
    }

    /// Dispatch every message in order, each one after the previous handler
    /// completed.
    ///
    /// # Errors
    ///
    /// Stops at the first message that fails (see [`dispatch`](Self::dispatch));
    /// the remaining messages are not sent.
    #[tracing::instrument(skip_all, fields(messages = messages.len()))]
    pub async fn run_program(&self, messages: &[Message]) -> Result<(), IotError> {
        tracing::info!("running program");
        for message in messages {
            self.dispatch(message).await?;
        }
        tracing::info!("end of program");
        Ok(())
    }

    /// Route one message to its target device and wait for the handler.
    ///
    /// # Errors
    ///
    /// - [`IotError::UnknownDevice`] when the target id was never registered
    /// - [`IotError::CommandNotSupported`] when the target lacks the command
    /// - any error returned by the device handler
    pub async fn dispatch(&self, message: &Message) -> Result<(), IotError> {
        let device = self.resolve(message).await?;

        self.publisher
            .publish(Event::command(EventType::CommandStarted, message));
        device.handle(message.kind(), message.payload()).await?;
        self.publisher
            .publish(Event::command(EventType::CommandCompleted, message));
        Ok(())
    }

    /// Check that every message could be dispatched, without sending any.
    ///
    /// # Errors
    ///
    /// Returns the first invalid message's error: a validation error, an
    /// unknown device or an unsupported command.
    pub async fn validate<'a>(
        &self,
        messages: impl IntoIterator<Item = &'a Message>,
    ) -> Result<(), IotError> {
        for message in messages {
            self.resolve(message).await?;
        }
        Ok(())
    }

    /// The kind of the device registered under `id`, if any.
    pub async fn kind_of(&self, id: DeviceId) -> Option<DeviceKind> {
        self.devices.read().await.get(&id).map(|d| d.kind())
    }

    /// Whether a device is registered under `id`.
    pub async fn contains(&self, id: DeviceId) -> bool {
        self.devices.read().await.contains_key(&id)
    }

    /// Number of registered devices.
    pub async fn len(&self) -> usize {
        self.devices.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Look up the target of `message` and check it can handle the command.
    async fn resolve(&self, message: &Message) -> Result<Arc<D>, IotError> {
        message.validate()?;

        let id = message.device_id();
        let device = self
            .devices
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(UnknownDeviceError { id })?;

        let kind = device.kind();
        if !kind.supports(message.kind()) {
            return Err(CommandNotSupportedError {
                device: kind,
                command: message.kind(),
            }
            .into());
        }
        Ok(device)
    }
}
