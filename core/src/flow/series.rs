// asynccond/src/flow/series.rs

//! Runs independent tasks one at a time, in order.

use crate::core::callback::{or_noop, Callback};
use crate::core::next::in_step;
use crate::flow::collect_in_series;
use crate::flow::results::{Results, Settled};
use crate::flow::task::Tasks;
use tokio::task::JoinHandle;
use tracing::{span, Instrument, Level};

/// Runs `tasks` strictly one after another.
///
/// Every reported value is collected, including the one from a task that
/// fails or asks to stop. The first error or `PipelineControl::Stop` ends
/// the run; otherwise all tasks run and `error` is `None`. Keyed tasks
/// produce keyed results in the same key order.
pub async fn series<T, E>(tasks: impl Into<Tasks<T, E>>) -> Settled<Results<T>, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  let tasks = tasks.into();
  let run_span = span!(
    Level::DEBUG,
    "series_run",
    num_tasks = tasks.len(),
    keyed = tasks.is_keyed()
  );

  async move {
    let (keys, tasks) = tasks.into_parts();
    let settled = collect_in_series(tasks.into_iter().enumerate().map(|(idx, task)| {
      let key = keys.as_ref().and_then(|keys| keys.get(idx).cloned());
      async move { in_step(key, task.run()).await }
    }))
    .await;
    settled.map_results(|values| Results::from_values(values, keys))
  }
  .instrument(run_span)
  .await
}

/// Callback form of [`series`], spawned on the current tokio runtime.
///
/// `callback` receives the settled run; `None` means nothing is notified.
pub fn series_then<T, E>(
  tasks: impl Into<Tasks<T, E>>,
  callback: Option<Callback<Settled<Results<T>, E>>>,
) -> JoinHandle<()>
where
  T: Send + 'static,
  E: Send + 'static,
{
  let tasks = tasks.into();
  let callback = or_noop(callback);
  tokio::spawn(async move {
    let settled = series(tasks).await;
    callback(settled);
  })
}
