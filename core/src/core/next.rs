// asynccond/src/core/next.rs

//! The continuation handed to callback-style steps.
//!
//! A `Next` is consumed when called, so reporting twice is a compile error.
//! The engine awaits the matching [`Pending`]; if the step drops its `Next`
//! without calling it, the engine gets [`CondError::ContinuationDropped`]
//! instead of waiting forever.

use crate::core::outcome::Report;
use crate::error::CondError;
use std::future::Future;
use tokio::sync::oneshot;
use tracing::{event, Level};

tokio::task_local! {
  static CURRENT_STEP: Option<String>;
}

/// Runs `fut` as the step called `step`, so a continuation dropped inside it
/// is reported under that name.
pub(crate) async fn in_step<F: Future>(step: Option<String>, fut: F) -> F::Output {
  CURRENT_STEP.scope(step, fut).await
}

fn current_step() -> Option<String> {
  CURRENT_STEP.try_with(|step| step.clone()).ok().flatten()
}

/// One-shot continuation with the `(error, value, exit)` calling convention.
#[derive(Debug)]
pub struct Next<V, E> {
  tx: oneshot::Sender<Report<V, E>>,
}

/// Receiving side of a [`Next`], awaited by the engine.
#[derive(Debug)]
pub(crate) struct Pending<V, E> {
  rx: oneshot::Receiver<Report<V, E>>,
}

pub(crate) fn channel<V, E>() -> (Next<V, E>, Pending<V, E>) {
  let (tx, rx) = oneshot::channel();
  (Next { tx }, Pending { rx })
}

impl<V, E> Next<V, E> {
  /// Reports the step's outcome in continuation form.
  pub fn call(self, error: Option<E>, value: V, exit: bool) {
    self.report(Report::from_parts(error, value, exit));
  }

  pub fn ok(self, value: V) {
    self.report(Report::next(value));
  }

  pub fn fail(self, error: E, value: V) {
    self.report(Report::fail(error, value));
  }

  pub fn exit(self, value: V) {
    self.report(Report::exit(value));
  }

  pub fn report(self, report: Report<V, E>) {
    // The run may have been dropped while this step was in flight.
    if self.tx.send(report).is_err() {
      event!(Level::TRACE, "Continuation called after its run was dropped; ignoring.");
    }
  }
}

impl<V, E> Pending<V, E> {
  pub(crate) async fn wait(self) -> Result<Report<V, E>, CondError> {
    self
      .rx
      .await
      .map_err(|_| CondError::ContinuationDropped { step: current_step() })
  }
}
