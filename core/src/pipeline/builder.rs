// asynccond/src/pipeline/builder.rs

//! Fluent construction of a `Seq<V, E>`, one step at a time.

use crate::core::next::Next;
use crate::core::outcome::Report;
use crate::error::CondError;
use crate::pipeline::definition::Seq;
use crate::pipeline::step::Step;
use std::future::Future;
use tracing::{event, Level};

/// Appends steps in execution order; [`SeqBuilder::build`] freezes them into a [`Seq`].
pub struct SeqBuilder<V, E> {
  steps: Vec<Step<V, E>>,
}

impl<V, E> SeqBuilder<V, E> {
  pub fn new() -> Self {
    Self { steps: Vec::new() }
  }

  /// Appends an already-built step (value or trap).
  pub fn step(mut self, step: Step<V, E>) -> Self {
    self.steps.push(step);
    self
  }

  pub fn build(self) -> Seq<V, E> {
    event!(
      Level::DEBUG,
      num_steps = self.steps.len(),
      num_traps = self.steps.iter().filter(|s| s.is_trap()).count(),
      "Pipeline built."
    );
    Seq::new(self.steps)
  }
}

impl<V, E> SeqBuilder<V, E>
where
  V: Send + 'static,
  E: Send + 'static,
{
  pub fn then<F, Fut>(self, f: F) -> Self
  where
    F: Fn(V) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Report<V, E>> + Send + 'static,
  {
    self.step(Step::value(f))
  }

  pub fn then_cb<F>(self, f: F) -> Self
  where
    V: Clone,
    E: From<CondError>,
    F: Fn(V, Next<V, E>) + Send + Sync + 'static,
  {
    self.step(Step::value_cb(f))
  }

  pub fn trap<F, Fut>(self, f: F) -> Self
  where
    F: Fn(E, V) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Report<V, E>> + Send + 'static,
  {
    self.step(Step::trap(f))
  }

  pub fn trap_cb<F>(self, f: F) -> Self
  where
    V: Clone,
    E: From<CondError>,
    F: Fn(E, V, Next<V, E>) + Send + Sync + 'static,
  {
    self.step(Step::trap_cb(f))
  }
}

impl<V, E> Default for SeqBuilder<V, E> {
  fn default() -> Self {
    Self::new()
  }
}
