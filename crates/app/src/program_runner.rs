//! Program runner — interprets a [`Program`] tree against a registry.
//!
//! Leaves are handed to [`DeviceRegistry::run_program`]; inner nodes are
//! mapped onto [`run_sequence`] and [`run_parallel`].

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use iotsim_domain::error::IotError;
use iotsim_domain::program::Program;

use crate::compose::{run_parallel, run_sequence};
use crate::ports::{Device, EventPublisher};
use crate::services::device_registry::DeviceRegistry;

/// Executes programs against the devices of one registry.
pub struct ProgramRunner<'r, D, P> {
    registry: &'r DeviceRegistry<D, P>,
}

impl<'r, D, P> ProgramRunner<'r, D, P>
where
    D: Device,
    P: EventPublisher,
{
    #[must_use]
    pub fn new(registry: &'r DeviceRegistry<D, P>) -> Self {
        Self { registry }
    }

    /// Check every message of `program` against the registry without
    /// dispatching anything.
    ///
    /// # Errors
    ///
    /// Returns the first message that could not be dispatched: unknown
    /// device, unsupported command, or missing payload.
    pub async fn check(&self, program: &Program) -> Result<(), IotError> {
        self.registry.validate(program.messages()).await
    }

    /// [`check`](Self::check) the whole program, then [`run`](Self::run) it.
    ///
    /// # Errors
    ///
    /// Returns the check failure before any device acts, otherwise the
    /// outcome of the run.
    pub async fn check_and_run(&self, program: &Program) -> Result<(), IotError> {
        self.check(program).await?;
        self.run(program).await
    }

    /// Run `program` to completion.
    ///
    /// # Errors
    ///
    /// A failing leaf aborts its enclosing sequence. A parallel group lets
    /// all its children finish, then reports the first failure.
    pub fn run<'a>(&'a self, program: &'a Program) -> LocalBoxFuture<'a, Result<(), IotError>> {
        match program {
            Program::Run(messages) => self.registry.run_program(messages).boxed_local(),
            Program::Sequence(steps) => {
                run_sequence(steps.iter().map(|step| self.run(step))).boxed_local()
            }
            Program::Parallel(steps) => {
                run_parallel(steps.iter().map(|step| self.run(step))).boxed_local()
            }
        }
    }
}
