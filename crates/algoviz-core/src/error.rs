#![forbid(unsafe_code)]

//! Engine failures.
//!
//! Only true failures live here. Cancellation and "not found" are normal
//! outcomes and are reported through the run phase and search outcome.

use crate::catalog::SearchAlgorithm;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// An order-dependent search was given input that is not ascending.
    #[error("{} requires an ascending array; sort it first", .algorithm.info().name)]
    Unsorted { algorithm: SearchAlgorithm },

    /// A job was started while another one is still running.
    #[error("a run is already in progress; stop it before starting another")]
    Busy,

    /// The worker thread running a job panicked.
    #[error("worker thread panicked: {message}")]
    WorkerPanicked { message: String },
}

impl EngineError {
    /// Whether this is the sortedness precondition failure.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Unsorted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsorted_message_names_the_algorithm() {
        let err = EngineError::Unsorted {
            algorithm: SearchAlgorithm::Binary,
        };
        assert_eq!(
            err.to_string(),
            "Binary Search requires an ascending array; sort it first"
        );
        assert!(err.is_precondition());
        assert!(!EngineError::Busy.is_precondition());
    }
}
