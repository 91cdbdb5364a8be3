// asynccond/src/flow/results.rs

//! What a series or each-series run hands to its final callback.

use crate::core::control::PipelineResult;
use indexmap::IndexMap;

/// Collected results, shaped like the tasks that produced them.
///
/// On an early stop only the tasks that actually ran have an entry; the
/// task that stopped the run is included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results<T> {
  Ordered(Vec<T>),
  Keyed(IndexMap<String, T>),
}

impl<T> Results<T> {
  pub(crate) fn from_values(values: Vec<T>, keys: Option<Vec<String>>) -> Self {
    match keys {
      Some(keys) => Results::Keyed(keys.into_iter().zip(values).collect()),
      None => Results::Ordered(values),
    }
  }

  pub fn len(&self) -> usize {
    match self {
      Results::Ordered(values) => values.len(),
      Results::Keyed(values) => values.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn as_ordered(&self) -> Option<&[T]> {
    match self {
      Results::Ordered(values) => Some(values.as_slice()),
      Results::Keyed(_) => None,
    }
  }

  pub fn as_keyed(&self) -> Option<&IndexMap<String, T>> {
    match self {
      Results::Ordered(_) => None,
      Results::Keyed(values) => Some(values),
    }
  }

  /// Values in run order, dropping keys if there were any.
  pub fn into_values(self) -> Vec<T> {
    match self {
      Results::Ordered(values) => values,
      Results::Keyed(values) => values.into_values().collect(),
    }
  }
}

/// The `(error, results)` pair a run settles with, plus how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled<R, E> {
  pub error: Option<E>,
  pub results: R,
  pub status: PipelineResult,
}

impl<R, E> Settled<R, E> {
  pub fn is_ok(&self) -> bool {
    self.error.is_none()
  }

  pub fn into_parts(self) -> (Option<E>, R) {
    (self.error, self.results)
  }

  pub fn map_results<U>(self, f: impl FnOnce(R) -> U) -> Settled<U, E> {
    Settled {
      error: self.error,
      results: f(self.results),
      status: self.status,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keyed_results_only_cover_attempted_tasks() {
    let keys = vec!["one".to_string(), "two".to_string(), "three".to_string()];
    let results = Results::from_values(vec![1, 2], Some(keys));
    let keyed = results.as_keyed().unwrap();
    assert_eq!(keyed.keys().collect::<Vec<_>>(), vec!["one", "two"]);
    assert_eq!(results.into_values(), vec![1, 2]);
  }
}
