// asynccond/src/pipeline/mod.rs

//! Defines the `Seq<V, E>` pipeline composer: its steps, construction and execution.

pub mod builder;
pub mod definition;
pub mod execution;
pub mod step;

pub use builder::SeqBuilder;
pub use definition::Seq;
pub use step::{Step, StepKind, TrapStep, ValueStep};
