// asynccond/src/lib.rs

//! asynccond: sequential async control flow for Rust.
//!
//! Three primitives, all strictly one-step-at-a-time:
//!  - [`series`]: run independent tasks in order, collecting their results.
//!  - [`each_series`]: run an async iterator function over each element.
//!  - [`Seq`]: compose value steps and error traps into a reusable pipeline.
//!
//! Every step reports an [`Outcome`] (a value, possibly paired with an
//! error) and a [`PipelineControl`] (`Continue` or `Stop`). `series` and
//! `each_series` stop at the first error or `Stop`. A `Seq` instead switches
//! to error mode on an error: value steps are skipped until a trap step
//! clears the error, or the pipeline ends.
//!
//! Steps can be written as async closures ([`Step::value`], [`Step::trap`])
//! or in continuation style ([`Step::value_cb`], [`Step::trap_cb`]), where
//! the step receives a [`Next`] and calls it exactly once.

pub mod core;
pub mod error;
pub mod flow;
mod macros;
pub mod pipeline;

// --- Re-exports for the Public API ---

pub use crate::core::{Callback, Next, Outcome, PipelineControl, PipelineResult, Report, Shared};

pub use crate::pipeline::{Seq, SeqBuilder, Step, StepKind, TrapStep, ValueStep};

pub use crate::flow::{
  each_series, each_series_cb, each_series_then, series, series_then, Results, SeriesTask, Settled, Task, Tasks,
};

pub use crate::error::{CondError, CondResult};

// Keyed collections are IndexMaps; re-exported so callers need no extra dependency.
pub use indexmap::IndexMap;
