// asynccond/src/core/control.rs

//! Defines signals for controlling run flow and the outcome of a series run.

/// Signal reported alongside a step's outcome: keep going, or end the run here.
///
/// This is the `earlyExit` flag of the continuation protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineControl {
  /// Proceed to the next step (subject to the error/skip rules).
  #[default]
  Continue,
  /// End the run immediately with the current outcome, error or not.
  /// No further steps are invoked, traps included.
  Stop,
}

impl PipelineControl {
  pub fn from_exit(exit: bool) -> Self {
    if exit {
      PipelineControl::Stop
    } else {
      PipelineControl::Continue
    }
  }

  pub fn is_stop(self) -> bool {
    matches!(self, PipelineControl::Stop)
  }
}

/// How a series or each-series run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineResult {
  /// Every task ran and none of them reported an error or `Stop`.
  Completed,
  /// A task reported an error or `PipelineControl::Stop`; later tasks never ran.
  Stopped,
}
