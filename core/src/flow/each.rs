// asynccond/src/flow/each.rs

//! Applies an async iterator function to each element of a sequence, one at a time.

use crate::core::callback::{or_noop, Callback};
use crate::core::next::{self, Next};
use crate::core::outcome::Report;
use crate::error::CondError;
use crate::flow::collect_in_series;
use crate::flow::results::Settled;
use std::future::Future;
use tokio::task::JoinHandle;
use tracing::{event, span, Instrument, Level};

/// Calls `iterator` once per element, in order, waiting for each report
/// before moving to the next element.
///
/// Same stop rules as [`series`](crate::series). Every element is visited
/// by position, whatever its value: `0`, `""` or `None` are processed like
/// anything else.
pub async fn each_series<I, T, E, F, Fut>(items: impl IntoIterator<Item = I>, iterator: F) -> Settled<Vec<T>, E>
where
  F: Fn(I) -> Fut,
  Fut: Future<Output = Report<T, E>>,
{
  let items: Vec<I> = items.into_iter().collect();
  let run_span = span!(Level::DEBUG, "each_series_run", num_items = items.len());
  collect_in_series(items.into_iter().map(&iterator))
    .instrument(run_span)
    .await
}

/// [`each_series`] with a continuation-style iterator `iterator(item, next)`.
///
/// A dropped `next` fails that element with `CondError::ContinuationDropped`
/// and a default result slot.
pub async fn each_series_cb<I, T, E, F>(items: impl IntoIterator<Item = I>, iterator: F) -> Settled<Vec<T>, E>
where
  T: Default,
  E: From<CondError>,
  F: Fn(I, Next<T, E>),
{
  each_series(items, |item| {
    let (next, pending) = next::channel();
    iterator(item, next);
    async move {
      match pending.wait().await {
        Ok(report) => report,
        Err(err) => {
          event!(Level::WARN, error = %err, "Iterator dropped its continuation.");
          Report::fail(E::from(err), T::default())
        }
      }
    }
  })
  .await
}

/// Callback form of [`each_series`], spawned on the current tokio runtime.
pub fn each_series_then<I, T, E, F, Fut>(
  items: impl IntoIterator<Item = I>,
  iterator: F,
  callback: Option<Callback<Settled<Vec<T>, E>>>,
) -> JoinHandle<()>
where
  I: Send + 'static,
  T: Send + 'static,
  E: Send + 'static,
  F: Fn(I) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Report<T, E>> + Send + 'static,
{
  let items: Vec<I> = items.into_iter().collect();
  let callback = or_noop(callback);
  tokio::spawn(async move {
    let settled = each_series(items, iterator).await;
    callback(settled);
  })
}
