// asynccond/src/core/shared.rs
use parking_lot::Mutex;
use std::sync::Arc;

/// A cloneable accumulator for tasks that close over common state.
///
/// Series tasks take no input, so anything they build up together lives
/// here. The closures passed to [`Shared::with`] and [`Shared::update`] run
/// under a blocking lock and must not await.
#[derive(Debug)]
pub struct Shared<T>(Arc<Mutex<T>>);

impl<T> Shared<T> {
  pub fn new(data: T) -> Self {
    Shared(Arc::new(Mutex::new(data)))
  }

  /// Runs `f` under the lock and returns its result.
  pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    f(&mut self.0.lock())
  }

  /// Applies `f` and returns a copy of the updated state.
  pub fn update(&self, f: impl FnOnce(&mut T)) -> T
  where
    T: Clone,
  {
    let mut guard = self.0.lock();
    f(&mut guard);
    guard.clone()
  }

  pub fn snapshot(&self) -> T
  where
    T: Clone,
  {
    self.0.lock().clone()
  }
}

impl<T> Clone for Shared<T> {
  fn clone(&self) -> Self {
    Shared(Arc::clone(&self.0))
  }
}

impl<T: Default> Default for Shared<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}
