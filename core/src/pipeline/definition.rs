// asynccond/src/pipeline/definition.rs

//! Contains the `Seq<V, E>` struct and the ways to build one.

use crate::pipeline::builder::SeqBuilder;
use crate::pipeline::step::Step;
use std::sync::Arc;

/// A composed pipeline of value and trap steps.
///
/// A `Seq` is built once and is immutable afterwards. Every call to
/// [`Seq::run`] gets its own cursor and running `(error, value)` pair, so a
/// single `Seq` can be driven many times, concurrently, without the runs
/// seeing each other. Cloning is cheap and shares the step list.
pub struct Seq<V, E> {
  pub(crate) steps: Arc<[Step<V, E>]>,
}

impl<V, E> Seq<V, E> {
  /// Builds a pipeline from an ordered list of steps.
  pub fn new(steps: impl IntoIterator<Item = Step<V, E>>) -> Self {
    Self {
      steps: steps.into_iter().collect(),
    }
  }

  /// Builds a pipeline from a keyed mapping, in key insertion order.
  ///
  /// Keys do not affect dispatch; they only name steps that have no name of
  /// their own, for tracing, dropped-continuation errors and [`Seq::step_names`].
  pub fn from_keyed<K, I>(steps: I) -> Self
  where
    K: Into<String>,
    I: IntoIterator<Item = (K, Step<V, E>)>,
  {
    Self::new(steps.into_iter().map(|(key, step)| {
      if step.name.is_some() {
        step
      } else {
        step.named(key)
      }
    }))
  }

  pub fn builder() -> SeqBuilder<V, E> {
    SeqBuilder::new()
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn steps(&self) -> &[Step<V, E>] {
    &self.steps
  }

  /// Step names in run order, `None` for unnamed steps.
  pub fn step_names(&self) -> Vec<Option<&str>> {
    self.steps.iter().map(Step::name).collect()
  }
}

impl<V, E> Clone for Seq<V, E> {
  fn clone(&self) -> Self {
    Self {
      steps: Arc::clone(&self.steps),
    }
  }
}

impl<V, E> FromIterator<Step<V, E>> for Seq<V, E> {
  fn from_iter<I: IntoIterator<Item = Step<V, E>>>(iter: I) -> Self {
    Self::new(iter)
  }
}

impl<V, E> From<Vec<Step<V, E>>> for Seq<V, E> {
  fn from(steps: Vec<Step<V, E>>) -> Self {
    Self::new(steps)
  }
}

impl<V, E> std::fmt::Debug for Seq<V, E> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Seq").field("steps", &self.steps).finish()
  }
}
