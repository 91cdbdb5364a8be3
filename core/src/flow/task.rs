// asynccond/src/flow/task.rs

//! Zero-input series tasks and the ordered/keyed collections they come in.

use crate::core::next::{self, Next};
use crate::core::outcome::Report;
use crate::error::CondError;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::future::Future;
use std::sync::Arc;
use tracing::{event, Level};

/// A unit of work for [`series`](crate::series): no input, one report.
#[async_trait]
pub trait SeriesTask<T, E>: Send + Sync {
  async fn run(&self) -> Report<T, E>;
}

struct AsyncTask<F>(F);

#[async_trait]
impl<T, E, F, Fut> SeriesTask<T, E> for AsyncTask<F>
where
  T: Send + 'static,
  E: Send + 'static,
  F: Fn() -> Fut + Send + Sync,
  Fut: Future<Output = Report<T, E>> + Send + 'static,
{
  async fn run(&self) -> Report<T, E> {
    (self.0)().await
  }
}

struct CallbackTask<F>(F);

#[async_trait]
impl<T, E, F> SeriesTask<T, E> for CallbackTask<F>
where
  T: Default + Send + 'static,
  E: From<CondError> + Send + 'static,
  F: Fn(Next<T, E>) + Send + Sync,
{
  async fn run(&self) -> Report<T, E> {
    let (next, pending) = next::channel();
    (self.0)(next);
    match pending.wait().await {
      Ok(report) => report,
      Err(err) => {
        event!(Level::WARN, error = %err, "Series task dropped its continuation.");
        Report::fail(E::from(err), T::default())
      }
    }
  }
}

/// A shareable series task.
pub struct Task<T, E> {
  inner: Arc<dyn SeriesTask<T, E>>,
}

impl<T, E> Task<T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  pub fn new<F, Fut>(f: F) -> Self
  where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Report<T, E>> + Send + 'static,
  {
    Self::from_task(AsyncTask(f))
  }

  /// Continuation style: `f(next)`. If `next` is dropped uncalled, the task
  /// fails with `CondError::ContinuationDropped` (carrying the task's key in
  /// a keyed series) and a default result slot.
  pub fn cb<F>(f: F) -> Self
  where
    T: Default,
    E: From<CondError>,
    F: Fn(Next<T, E>) + Send + Sync + 'static,
  {
    Self::from_task(CallbackTask(f))
  }

  pub fn from_task(task: impl SeriesTask<T, E> + 'static) -> Self {
    Self { inner: Arc::new(task) }
  }
}

impl<T, E> Task<T, E> {
  pub(crate) async fn run(&self) -> Report<T, E> {
    self.inner.run().await
  }
}

impl<T, E> Clone for Task<T, E> {
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<T, E> std::fmt::Debug for Task<T, E> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Task").finish_non_exhaustive()
  }
}

/// Tasks for a series run: an ordered list, or a keyed mapping run in
/// insertion order whose results come back under the same keys.
#[derive(Debug)]
pub enum Tasks<T, E> {
  Ordered(Vec<Task<T, E>>),
  Keyed(IndexMap<String, Task<T, E>>),
}

impl<T, E> Tasks<T, E> {
  pub fn keyed<K, I>(tasks: I) -> Self
  where
    K: Into<String>,
    I: IntoIterator<Item = (K, Task<T, E>)>,
  {
    Tasks::Keyed(tasks.into_iter().map(|(k, t)| (k.into(), t)).collect())
  }

  pub fn len(&self) -> usize {
    match self {
      Tasks::Ordered(tasks) => tasks.len(),
      Tasks::Keyed(tasks) => tasks.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn is_keyed(&self) -> bool {
    matches!(self, Tasks::Keyed(_))
  }

  /// Splits into the keys (if keyed) and the tasks in run order.
  pub(crate) fn into_parts(self) -> (Option<Vec<String>>, Vec<Task<T, E>>) {
    match self {
      Tasks::Ordered(tasks) => (None, tasks),
      Tasks::Keyed(tasks) => {
        let (keys, tasks) = tasks.into_iter().unzip();
        (Some(keys), tasks)
      }
    }
  }
}

impl<T, E> From<Vec<Task<T, E>>> for Tasks<T, E> {
  fn from(tasks: Vec<Task<T, E>>) -> Self {
    Tasks::Ordered(tasks)
  }
}

impl<T, E> From<IndexMap<String, Task<T, E>>> for Tasks<T, E> {
  fn from(tasks: IndexMap<String, Task<T, E>>) -> Self {
    Tasks::Keyed(tasks)
  }
}

impl<T, E> FromIterator<Task<T, E>> for Tasks<T, E> {
  fn from_iter<I: IntoIterator<Item = Task<T, E>>>(iter: I) -> Self {
    Tasks::Ordered(iter.into_iter().collect())
  }
}
