pub mod callback;
pub mod control;
pub mod next;
pub mod outcome;
pub mod shared;

// Re-export key types for easier access from other modules (and lib.rs)
pub use callback::Callback;
pub use control::{PipelineControl, PipelineResult};
pub use next::Next;
pub use outcome::{Outcome, Report};
pub use shared::Shared;
