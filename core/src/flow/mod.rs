// asynccond/src/flow/mod.rs

//! Series runners: independent tasks one after another (`series`), or one
//! iterator call per element (`each_series`). Both stop at the first error
//! or `PipelineControl::Stop`.

pub mod each;
pub mod results;
pub mod series;
pub mod task;

pub use each::{each_series, each_series_cb, each_series_then};
pub use results::{Results, Settled};
pub use series::{series, series_then};
pub use task::{SeriesTask, Task, Tasks};

use crate::core::control::PipelineResult;
use crate::core::outcome::Report;
use std::future::Future;
use tracing::{event, Level};

/// Awaits each future in turn, collecting every reported value.
///
/// Futures are pulled from `steps` one at a time, so a step is not even
/// created until the previous one has reported.
pub(crate) async fn collect_in_series<T, E, I, Fut>(steps: I) -> Settled<Vec<T>, E>
where
  I: IntoIterator<Item = Fut>,
  Fut: Future<Output = Report<T, E>>,
{
  let mut results = Vec::new();

  for (step_idx, step) in steps.into_iter().enumerate() {
    let Report { outcome, control } = step.await;
    let (error, value) = outcome.into_parts();
    results.push(value);

    if error.is_some() || control.is_stop() {
      event!(
        Level::DEBUG,
        step_index = step_idx,
        failed = error.is_some(),
        exit = control.is_stop(),
        "Series stopped early."
      );
      return Settled {
        error,
        results,
        status: PipelineResult::Stopped,
      };
    }
  }

  event!(Level::DEBUG, num_results = results.len(), "Series completed.");
  Settled {
    error: None,
    results,
    status: PipelineResult::Completed,
  }
}
