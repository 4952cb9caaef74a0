//! Sequential and parallel composition of asynchronous steps.
//!
//! Both combinators accept any iterator of futures resolving to
//! `Result<(), IotError>` and can be nested freely. Rust futures are lazy, so
//! a step does nothing until the combinator polls it.

use std::future::Future;

use futures::future::join_all;
use iotsim_domain::error::IotError;

/// Run every step to completion, strictly in order.
///
/// # Errors
///
/// Returns the first failure; the steps after it are never polled.
pub async fn run_sequence<I, F>(steps: I) -> Result<(), IotError>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<(), IotError>>,
{
    for step in steps {
        step.await?;
    }
    Ok(())
}

/// Run every step concurrently on the current task and wait for all of them.
///
/// A failing step never stops its siblings.
///
/// # Errors
///
/// Once every step has finished, returns the first failure in declaration
/// order. Further failures are logged and dropped.
pub async fn run_parallel<I, F>(steps: I) -> Result<(), IotError>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<(), IotError>>,
{
    let mut failures = join_all(steps).await.into_iter().filter_map(Result::err);
    let Some(first) = failures.next() else {
        return Ok(());
    };
    for err in failures {
        tracing::warn!(error = %err, "additional failure in parallel group");
    }
    Err(first)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use futures::FutureExt;
    use futures::future::LocalBoxFuture;
    use iotsim_domain::error::UnknownDeviceError;
    use iotsim_domain::id::DeviceId;
    use tokio::time::Instant;

    use super::*;

    type Log = RefCell<Vec<String>>;

    async fn step(log: &Log, name: &'static str, millis: u64) -> Result<(), IotError> {
        log.borrow_mut().push(format!("start {name}"));
        tokio::time::sleep(Duration::from_millis(millis)).await;
        log.borrow_mut().push(format!("end {name}"));
        Ok(())
    }

    async fn failing(log: &Log, name: &'static str, millis: u64) -> Result<(), IotError> {
        log.borrow_mut().push(format!("start {name}"));
        tokio::time::sleep(Duration::from_millis(millis)).await;
        log.borrow_mut().push(format!("fail {name}"));
        Err(UnknownDeviceError { id: DeviceId::new() }.into())
    }

    #[tokio::test(start_paused = true)]
    async fn should_start_next_step_only_after_previous_completed() {
        let log = Log::default();
        run_sequence([step(&log, "a", 50), step(&log, "b", 10)])
            .await
            .unwrap();
        assert_eq!(*log.borrow(), ["start a", "end a", "start b", "end b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn should_wait_for_slowest_parallel_step() {
        let log = Log::default();
        run_parallel([step(&log, "slow", 80), step(&log, "fast", 10)])
            .await
            .unwrap();
        assert_eq!(
            *log.borrow(),
            ["start slow", "start fast", "end fast", "end slow"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_overlap_parallel_steps_in_time() {
        let log = Log::default();

        let started = Instant::now();
        run_parallel([step(&log, "a", 100), step(&log, "b", 100)])
            .await
            .unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(100));

        let started = Instant::now();
        run_sequence([step(&log, "c", 100), step(&log, "d", 100)])
            .await
            .unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn should_abandon_remaining_steps_after_sequence_failure() {
        let log = Log::default();
        let result = run_sequence([
            step(&log, "a", 10).boxed_local(),
            failing(&log, "b", 10).boxed_local(),
            step(&log, "c", 10).boxed_local(),
        ])
        .await;

        assert!(matches!(result, Err(IotError::UnknownDevice(_))));
        assert_eq!(*log.borrow(), ["start a", "end a", "start b", "fail b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn should_let_siblings_finish_when_parallel_step_fails() {
        let log = Log::default();
        let result = run_parallel([
            failing(&log, "a", 10).boxed_local(),
            step(&log, "b", 50).boxed_local(),
        ])
        .await;

        assert!(matches!(result, Err(IotError::UnknownDevice(_))));
        assert!(log.borrow().contains(&"end b".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn should_nest_sequences_inside_parallel_groups() {
        let log = Log::default();
        let left = run_sequence([step(&log, "l1", 30), step(&log, "l2", 30)]).boxed_local();
        let right = run_sequence([step(&log, "r1", 10), step(&log, "r2", 10)]).boxed_local();

        let started = Instant::now();
        run_parallel([left, right]).await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(60));

        let log = log.borrow();
        let pos = |entry: &str| log.iter().position(|e| e == entry).unwrap();
        assert!(pos("end l1") < pos("start l2"));
        assert!(pos("end r1") < pos("start r2"));
        assert!(pos("start r1") < pos("end l1"));
    }

    #[tokio::test]
    async fn should_succeed_on_empty_groups() {
        let none: Vec<LocalBoxFuture<'_, Result<(), IotError>>> = Vec::new();
        assert!(run_sequence(none).await.is_ok());
        let none: Vec<LocalBoxFuture<'_, Result<(), IotError>>> = Vec::new();
        assert!(run_parallel(none).await.is_ok());
    }
}
