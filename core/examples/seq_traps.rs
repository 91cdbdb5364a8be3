// asynccond/examples/seq_traps.rs

use asynccond::{Callback, CondError, Outcome, Report, Seq, Step};
use std::time::Duration;
use tracing::{error, info};

// 1. Define an application error type
#[derive(Debug, thiserror::Error)]
enum FetchError {
  #[error("upstream timed out after {0} ms")]
  Timeout(u64),

  #[error("asynccond error: {0}")]
  Framework(#[from] CondError), // Needed by the continuation-style steps
}

// 2. Steps
fn fetch_quota() -> Step<u32, FetchError> {
  Step::value_cb(|requested: u32, next| {
    tokio::spawn(async move {
      tokio::time::sleep(Duration::from_millis(5)).await;
      if requested > 100 {
        next.fail(FetchError::Timeout(5), requested);
      } else {
        next.ok(requested * 2);
      }
    });
  })
  .named("fetch_quota")
}

fn cap_quota() -> Step<u32, FetchError> {
  Step::value(|quota: u32| async move {
    info!(quota, "Capping quota.");
    // A quota at the cap is final: nothing after this step needs to run.
    Report::from_parts(None, quota.min(150), quota >= 150)
  })
  .named("cap_quota")
}

fn fallback_quota() -> Step<u32, FetchError> {
  Step::trap(|err: FetchError, requested: u32| async move {
    error!(error = %err, requested, "Fetch failed, using fallback quota.");
    Report::next(10)
  })
  .named("fallback_quota")
}

fn log_quota() -> Step<u32, FetchError> {
  Step::value(|quota: u32| async move {
    info!(quota, "Quota ready.");
    Report::next(quota)
  })
  .named("log_quota")
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Seq Error Trap Example ---");

  // 3. Build the pipeline once
  let pipeline: Seq<u32, FetchError> = Seq::new([fetch_quota(), cap_quota(), fallback_quota(), log_quota()]);

  // 4. Run it with different inputs, concurrently
  let (small, large, capped) = tokio::join!(pipeline.run(20), pipeline.run(500), pipeline.run(80));

  for (label, outcome) in [("small", small), ("large", large), ("capped", capped)] {
    match outcome {
      Outcome::Ok(quota) => info!(label, quota, "Pipeline finished."),
      Outcome::Err(err, quota) => error!(label, quota, error = %err, "Pipeline finished with an error."),
    }
  }

  // 5. Callback form
  let callback: Callback<Outcome<u32, FetchError>> = Box::new(|outcome| info!(?outcome, "Callback received outcome."));
  let handle = pipeline.run_then(30, Some(callback));
  if let Err(join_err) = handle.await {
    error!(error = %join_err, "Pipeline task failed.");
  }
}
