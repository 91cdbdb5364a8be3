// asynccond/src/core/outcome.rs

//! The running `(error, value)` pair and the report a step hands back when it finishes.

use crate::core::control::PipelineControl;
use crate::error::CondResult;

/// Running state of a run: a value, optionally paired with a pending error.
///
/// An error always travels with the value reported next to it, so an error
/// trap sees both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<V, E> {
  Ok(V),
  Err(E, V),
}

impl<V, E> Outcome<V, E> {
  pub fn from_parts(error: Option<E>, value: V) -> Self {
    match error {
      Some(e) => Outcome::Err(e, value),
      None => Outcome::Ok(value),
    }
  }

  pub fn is_ok(&self) -> bool {
    matches!(self, Outcome::Ok(_))
  }

  pub fn is_err(&self) -> bool {
    matches!(self, Outcome::Err(..))
  }

  pub fn value(&self) -> &V {
    match self {
      Outcome::Ok(v) | Outcome::Err(_, v) => v,
    }
  }

  pub fn error(&self) -> Option<&E> {
    match self {
      Outcome::Ok(_) => None,
      Outcome::Err(e, _) => Some(e),
    }
  }

  pub fn into_value(self) -> V {
    match self {
      Outcome::Ok(v) | Outcome::Err(_, v) => v,
    }
  }

  /// Splits into the `(error, value)` shape handed to a final callback.
  pub fn into_parts(self) -> (Option<E>, V) {
    match self {
      Outcome::Ok(v) => (None, v),
      Outcome::Err(e, v) => (Some(e), v),
    }
  }

  /// Drops the value carried next to an error.
  pub fn into_result(self) -> CondResult<V, E> {
    match self {
      Outcome::Ok(v) => Ok(v),
      Outcome::Err(e, _) => Err(e),
    }
  }

  pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Outcome<U, E> {
    match self {
      Outcome::Ok(v) => Outcome::Ok(f(v)),
      Outcome::Err(e, v) => Outcome::Err(e, f(v)),
    }
  }
}

/// What a step reports when it completes: its outcome plus the exit flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<V, E> {
  pub outcome: Outcome<V, E>,
  pub control: PipelineControl,
}

impl<V, E> Report<V, E> {
  pub fn next(value: V) -> Self {
    Self {
      outcome: Outcome::Ok(value),
      control: PipelineControl::Continue,
    }
  }

  pub fn exit(value: V) -> Self {
    Self {
      outcome: Outcome::Ok(value),
      control: PipelineControl::Stop,
    }
  }

  pub fn fail(error: E, value: V) -> Self {
    Self {
      outcome: Outcome::Err(error, value),
      control: PipelineControl::Continue,
    }
  }

  pub fn fail_and_exit(error: E, value: V) -> Self {
    Self {
      outcome: Outcome::Err(error, value),
      control: PipelineControl::Stop,
    }
  }

  /// Builds a report from the `(error, value, exit)` continuation shape.
  pub fn from_parts(error: Option<E>, value: V, exit: bool) -> Self {
    Self {
      outcome: Outcome::from_parts(error, value),
      control: PipelineControl::from_exit(exit),
    }
  }
}
