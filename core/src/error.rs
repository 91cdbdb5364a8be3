// asynccond/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Framework-level failures raised by the engine itself.
///
/// User errors flowing through a pipeline stay opaque; `CondError` only shows
/// up where the engine has to manufacture an error (a callback-style step
/// that never reported) and is folded into the caller's type via
/// `E: From<CondError>`.
#[derive(Debug, Error)]
pub enum CondError {
  /// A callback-style step dropped its `Next` without calling it.
  /// `step` is the step name or task key, when there is one.
  #[error(
    "Continuation of step '{}' was dropped without being called",
    .step.as_deref().unwrap_or("<unnamed>")
  )]
  ContinuationDropped { step: Option<String> },

  #[error("Error in user-provided step. Source: {source}")]
  Handler {
    #[source]
    source: AnyhowError,
  },
}

impl From<AnyhowError> for CondError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap an anyhow that already carries a CondError instead of nesting it.
    match err.downcast::<CondError>() {
      Ok(cond_err) => cond_err,
      Err(source) => CondError::Handler { source },
    }
  }
}

pub type CondResult<T, E = CondError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn anyhow_wrapping_does_not_nest_cond_errors() {
    let dropped = CondError::ContinuationDropped {
      step: Some("fetch".to_string()),
    };
    let wrapped: CondError = AnyhowError::new(dropped).into();
    assert!(matches!(wrapped, CondError::ContinuationDropped { step: Some(ref s) } if s == "fetch"));

    let foreign: CondError = anyhow::anyhow!("disk full").into();
    match foreign {
      CondError::Handler { source } => assert_eq!(source.to_string(), "disk full"),
      other => panic!("Expected CondError::Handler, got {:?}", other),
    }
  }

  #[test]
  fn dropped_continuation_display_names_the_step() {
    let named = CondError::ContinuationDropped {
      step: Some("fetch".to_string()),
    };
    assert_eq!(
      named.to_string(),
      "Continuation of step 'fetch' was dropped without being called"
    );

    let unnamed = CondError::ContinuationDropped { step: None };
    assert!(unnamed.to_string().contains("'<unnamed>'"));
  }
}
