// asynccond/examples/series_stop.rs

use asynccond::{each_series, series, CondError, Report, Results, Shared, Task, Tasks};
use tracing::{info, warn};

// 1. Shared state the tasks build up together
#[derive(Clone, Debug, Default)]
struct StopContext {
  log: Vec<String>,
}

fn logging_task(ctx: &Shared<StopContext>, name: &'static str, stop: bool) -> Task<usize, CondError> {
  let ctx = ctx.clone();
  Task::new(move || {
    let ctx = ctx.clone();
    async move {
      tokio::task::yield_now().await;
      let entries = ctx.with(|c| {
        c.log.push(format!("{} executed", name));
        c.log.len()
      });
      info!(task = name, entries, stop, "Task executed.");
      Report::from_parts(None, entries, stop)
    }
  })
}

#[tokio::main]
async fn main() -> Result<(), CondError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Series Stop Example ---");

  let ctx = Shared::new(StopContext::default());

  // 2. Keyed tasks; the second asks the series to stop
  let tasks = Tasks::keyed([
    ("step_one", logging_task(&ctx, "step_one", false)),
    ("step_two_stop_action", logging_task(&ctx, "step_two_stop_action", true)),
    ("step_three_after_stop", logging_task(&ctx, "step_three_after_stop", false)),
  ]);

  let settled = series(tasks).await;
  info!(status = ?settled.status, "Series settled.");
  if let Results::Keyed(results) = &settled.results {
    for (key, entries) in results {
      info!(%key, entries, "Result.");
    }
  }
  if let Some(err) = settled.error {
    return Err(err);
  }

  // 3. Each-series over inputs, stopping at the first oversized one
  let sizes = each_series(vec![3usize, 0, 12, 7], |size| async move {
    if size > 10 {
      warn!(size, "Size over limit, stopping.");
      Report::exit(size)
    } else {
      Report::<_, CondError>::next(size)
    }
  })
  .await;
  info!(results = ?sizes.results, status = ?sizes.status, "Each-series settled.");

  let final_state = ctx.snapshot();
  info!("Execution Log:");
  for entry in &final_state.log {
    info!("- {}", entry);
  }

  Ok(())
}
