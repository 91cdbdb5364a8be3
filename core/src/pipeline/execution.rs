// asynccond/src/pipeline/execution.rs

//! Contains `Seq::run()`, which threads the running `(error, value)` pair
//! through the step list, and its spawned callback form `Seq::run_then()`.

use crate::core::callback::{or_noop, Callback};
use crate::core::next::in_step;
use crate::core::outcome::Outcome;
use crate::pipeline::definition::Seq;
use crate::pipeline::step::StepKind;
use tokio::task::JoinHandle;
use tracing::{event, span, Instrument, Level};

impl<V, E> Seq<V, E>
where
  V: Send + 'static,
  E: Send + 'static,
{
  /// Runs the pipeline once, starting from `initial` with no pending error.
  ///
  /// Dispatch for each step, in list order:
  /// - no error pending: value steps run with the value, traps are skipped;
  /// - error pending: traps run with the error and value, value steps are skipped.
  ///
  /// The run ends when the list is exhausted or a step reports
  /// `PipelineControl::Stop`; either way the current outcome is returned.
  ///
  /// Steps are awaited in a loop, so a pipeline of any length runs in
  /// constant stack depth even when every step completes immediately.
  pub async fn run(&self, initial: V) -> Outcome<V, E> {
    let run_span = span!(
      Level::DEBUG,
      "seq_run",
      num_steps = self.steps.len(),
      value_type = %std::any::type_name::<V>(),
      error_type = %std::any::type_name::<E>()
    );
    self.drive(initial).instrument(run_span).await
  }

  async fn drive(&self, initial: V) -> Outcome<V, E> {
    event!(Level::DEBUG, "Pipeline invocation starting.");
    let mut state = Outcome::Ok(initial);

    for (step_idx, step) in self.steps.iter().enumerate() {
      let step_span = span!(
        Level::DEBUG,
        "seq_step",
        step_index = step_idx,
        step_name = step.name().unwrap_or(""),
        kind = step.kind.label()
      );

      let report = match (state, &step.kind) {
        (Outcome::Ok(value), StepKind::Value(handler)) => {
          in_step(step.name.clone(), handler.run(value))
            .instrument(step_span)
            .await
        }
        (Outcome::Err(error, value), StepKind::Trap(trap)) => {
          step_span.in_scope(|| event!(Level::DEBUG, "Error pending, invoking trap."));
          in_step(step.name.clone(), trap.recover(error, value))
            .instrument(step_span)
            .await
        }
        (pending, _) => {
          step_span.in_scope(|| event!(Level::TRACE, error_pending = pending.is_err(), "Step skipped."));
          state = pending;
          continue;
        }
      };

      let stop = report.control.is_stop();
      state = report.outcome;
      if stop {
        event!(
          Level::INFO,
          step_index = step_idx,
          error_pending = state.is_err(),
          "Pipeline exited early."
        );
        return state;
      }
    }

    event!(Level::DEBUG, error_pending = state.is_err(), "Pipeline invocation finished.");
    state
  }

  /// Callback form of [`Seq::run`]: spawns the run on the current tokio
  /// runtime and hands the final outcome to `callback` (a no-op if `None`).
  ///
  /// Must be called from within a tokio runtime.
  pub fn run_then(&self, initial: V, callback: Option<Callback<Outcome<V, E>>>) -> JoinHandle<()> {
    let seq = self.clone();
    let callback = or_noop(callback);
    tokio::spawn(async move {
      let outcome = seq.run(initial).await;
      callback(outcome);
    })
  }
}
