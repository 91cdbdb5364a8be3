// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper.

use asynccond::{CondError, Report, Shared, Step, Task};
use once_cell::sync::Lazy;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("asynccond framework error: {0}")]
  Cond(String), // Stored as a String so TestError stays Eq.

  #[error("Test step failed: {0}")]
  Step(String),
}

impl From<CondError> for TestError {
  fn from(err: CondError) -> Self {
    TestError::Cond(format!("{:?}", err))
  }
}

pub fn step_err(msg: &str) -> TestError {
  TestError::Step(msg.to_string())
}

// --- Common Step Creators ---

/// `+1`, reported from a separate tokio task the way an I/O-bound step would.
pub fn increment() -> Step<i32, TestError> {
  Step::value_cb(|data: i32, next| {
    tokio::spawn(async move { next.ok(data + 1) });
  })
}

/// `+1` as an async closure that yields once before reporting.
pub fn increment_async() -> Step<i32, TestError> {
  Step::value(|data: i32| async move {
    tokio::task::yield_now().await;
    Report::next(data + 1)
  })
}

/// `+1` after a short sleep, so concurrent runs interleave.
pub fn increment_slow(millis: u64) -> Step<i32, TestError> {
  Step::value(move |data: i32| async move {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    Report::next(data + 1)
  })
}

/// A value step that counts its invocations and passes the value through.
/// Placed where a step must be skipped; tests assert the count stays 0.
pub fn counted(calls: &Arc<AtomicUsize>) -> Step<i32, TestError> {
  let calls = Arc::clone(calls);
  Step::value(move |data: i32| {
    calls.fetch_add(1, Ordering::SeqCst);
    async move { Report::next(data + 1) }
  })
}

/// A trap that counts its invocations and clears the error.
pub fn counted_trap(calls: &Arc<AtomicUsize>) -> Step<i32, TestError> {
  let calls = Arc::clone(calls);
  Step::trap(move |_err: TestError, data: i32| {
    calls.fetch_add(1, Ordering::SeqCst);
    async move { Report::next(data + 10) }
  })
}

// --- Common Task Creators ---

/// Bumps the shared counter and reports its new value, asynchronously.
pub fn counter_task(data: &Shared<i32>) -> Task<i32, TestError> {
  let data = data.clone();
  Task::cb(move |next| {
    let data = data.clone();
    tokio::spawn(async move {
      let value = data.update(|d| *d += 1);
      next.ok(value);
    });
  })
}

/// Like [`counter_task`] but asks the series to stop once the counter reaches `limit`.
pub fn counter_task_until(data: &Shared<i32>, limit: i32) -> Task<i32, TestError> {
  let data = data.clone();
  Task::new(move || {
    let data = data.clone();
    async move {
      tokio::task::yield_now().await;
      let value = data.update(|d| *d += 1);
      Report::from_parts(None, value, value >= limit)
    }
  })
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn calls() -> Arc<AtomicUsize> {
  Arc::new(AtomicUsize::new(0))
}

pub fn count(calls: &Arc<AtomicUsize>) -> usize {
  calls.load(Ordering::SeqCst)
}
