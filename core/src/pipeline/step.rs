// asynccond/src/pipeline/step.rs

//! Defines the two kinds of pipeline step and the adapters that turn
//! closures (async or continuation-style) into them.
//!
//! The kind of a step is picked by the caller at construction time:
//! a *value* step runs while no error is pending, a *trap* step runs only
//! while one is.

use crate::core::next::{self, Next};
use crate::core::outcome::Report;
use crate::error::CondError;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use tracing::{event, Level};

/// A step that consumes the current value and reports the next one.
///
/// Implement this directly for steps that carry their own state
/// (connections, caches, counters); closures go through [`Step::value`]
/// or [`Step::value_cb`].
#[async_trait]
pub trait ValueStep<V, E>: Send + Sync {
  async fn run(&self, value: V) -> Report<V, E>;
}

/// A step that is only invoked while an error is pending.
///
/// Reporting `Outcome::Ok` clears the error and resumes value steps from
/// this point on; reporting an error keeps skipping forward.
#[async_trait]
pub trait TrapStep<V, E>: Send + Sync {
  async fn recover(&self, error: E, value: V) -> Report<V, E>;
}

// --- Closure adapters ---

struct AsyncValue<F>(F);

#[async_trait]
impl<V, E, F, Fut> ValueStep<V, E> for AsyncValue<F>
where
  V: Send + 'static,
  E: Send + 'static,
  F: Fn(V) -> Fut + Send + Sync,
  Fut: Future<Output = Report<V, E>> + Send + 'static,
{
  async fn run(&self, value: V) -> Report<V, E> {
    (self.0)(value).await
  }
}

struct CallbackValue<F>(F);

#[async_trait]
impl<V, E, F> ValueStep<V, E> for CallbackValue<F>
where
  V: Clone + Send + 'static,
  E: From<CondError> + Send + 'static,
  F: Fn(V, Next<V, E>) + Send + Sync,
{
  async fn run(&self, value: V) -> Report<V, E> {
    // Kept so a dropped continuation still reports the value this step was given.
    let fallback = value.clone();
    let (next, pending) = next::channel();
    (self.0)(value, next);
    match pending.wait().await {
      Ok(report) => report,
      Err(err) => {
        event!(Level::WARN, error = %err, "Value step dropped its continuation.");
        Report::fail(E::from(err), fallback)
      }
    }
  }
}

struct AsyncTrap<F>(F);

#[async_trait]
impl<V, E, F, Fut> TrapStep<V, E> for AsyncTrap<F>
where
  V: Send + 'static,
  E: Send + 'static,
  F: Fn(E, V) -> Fut + Send + Sync,
  Fut: Future<Output = Report<V, E>> + Send + 'static,
{
  async fn recover(&self, error: E, value: V) -> Report<V, E> {
    (self.0)(error, value).await
  }
}

struct CallbackTrap<F>(F);

#[async_trait]
impl<V, E, F> TrapStep<V, E> for CallbackTrap<F>
where
  V: Clone + Send + 'static,
  E: From<CondError> + Send + 'static,
  F: Fn(E, V, Next<V, E>) + Send + Sync,
{
  async fn recover(&self, error: E, value: V) -> Report<V, E> {
    let fallback = value.clone();
    let (next, pending) = next::channel();
    (self.0)(error, value, next);
    match pending.wait().await {
      Ok(report) => report,
      Err(err) => {
        event!(Level::WARN, error = %err, "Trap step dropped its continuation.");
        Report::fail(E::from(err), fallback)
      }
    }
  }
}

// --- Step ---

/// Which dispatch rule a step follows.
pub enum StepKind<V, E> {
  Value(Arc<dyn ValueStep<V, E>>),
  Trap(Arc<dyn TrapStep<V, E>>),
}

impl<V, E> StepKind<V, E> {
  pub fn label(&self) -> &'static str {
    match self {
      StepKind::Value(_) => "value",
      StepKind::Trap(_) => "trap",
    }
  }
}

impl<V, E> Clone for StepKind<V, E> {
  fn clone(&self) -> Self {
    match self {
      StepKind::Value(s) => StepKind::Value(Arc::clone(s)),
      StepKind::Trap(t) => StepKind::Trap(Arc::clone(t)),
    }
  }
}

/// One entry of a [`Seq`](crate::Seq): a value or trap step, optionally named.
///
/// The name only shows up in tracing spans.
pub struct Step<V, E> {
  pub(crate) name: Option<String>,
  pub(crate) kind: StepKind<V, E>,
}

impl<V, E> Step<V, E>
where
  V: Send + 'static,
  E: Send + 'static,
{
  /// A value step from an async closure `value -> Report`.
  pub fn value<F, Fut>(f: F) -> Self
  where
    F: Fn(V) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Report<V, E>> + Send + 'static,
  {
    Self::from_value(AsyncValue(f))
  }

  /// A value step in continuation style: `f(value, next)` must eventually call `next`.
  pub fn value_cb<F>(f: F) -> Self
  where
    V: Clone,
    E: From<CondError>,
    F: Fn(V, Next<V, E>) + Send + Sync + 'static,
  {
    Self::from_value(CallbackValue(f))
  }

  /// A trap step from an async closure `(error, value) -> Report`.
  pub fn trap<F, Fut>(f: F) -> Self
  where
    F: Fn(E, V) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Report<V, E>> + Send + 'static,
  {
    Self::from_trap(AsyncTrap(f))
  }

  /// A trap step in continuation style: `f(error, value, next)`.
  pub fn trap_cb<F>(f: F) -> Self
  where
    V: Clone,
    E: From<CondError>,
    F: Fn(E, V, Next<V, E>) + Send + Sync + 'static,
  {
    Self::from_trap(CallbackTrap(f))
  }

  pub fn from_value(step: impl ValueStep<V, E> + 'static) -> Self {
    Self {
      name: None,
      kind: StepKind::Value(Arc::new(step)),
    }
  }

  pub fn from_trap(step: impl TrapStep<V, E> + 'static) -> Self {
    Self {
      name: None,
      kind: StepKind::Trap(Arc::new(step)),
    }
  }
}

impl<V, E> Step<V, E> {
  pub fn named<S: Into<String>>(mut self, name: S) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  pub fn kind(&self) -> &StepKind<V, E> {
    &self.kind
  }

  pub fn is_trap(&self) -> bool {
    matches!(self.kind, StepKind::Trap(_))
  }
}

impl<V, E> Clone for Step<V, E> {
  fn clone(&self) -> Self {
    Self {
      name: self.name.clone(),
      kind: self.kind.clone(),
    }
  }
}

impl<V, E> std::fmt::Debug for Step<V, E> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Step")
      .field("name", &self.name)
      .field("kind", &self.kind.label())
      .finish()
  }
}
