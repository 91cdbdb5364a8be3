// asynccond/src/core/callback.rs

//! Final-callback type for the spawned (`*_then`) forms of each runner.

/// Invoked once with the final outcome of a run.
pub type Callback<T> = Box<dyn FnOnce(T) + Send + 'static>;

/// Falls back to a no-op built for this call when no callback was given.
pub(crate) fn or_noop<T: 'static>(callback: Option<Callback<T>>) -> Callback<T> {
  callback.unwrap_or_else(|| Box::new(|_| {}))
}
