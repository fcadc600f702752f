use std::sync::atomic::{AtomicI64, Ordering};

// =============================================================================
// TEST ID GENERATION
// =============================================================================

static NEXT_TEST_ID: AtomicI64 = AtomicI64::new(1);

/// Generate a unique numeric id for test records.
///
/// Ids are process-wide monotonic so tests that build several events or
/// predictions never collide, even when running in parallel.
pub fn generate_unique_id() -> i64 {
    NEXT_TEST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Generate a unique string id with a readable prefix, e.g. `event-17`.
pub fn generate_unique_test_id(prefix: &str) -> String {
    format!("{}-{}", prefix, generate_unique_id())
}

// =============================================================================
// UNIFIED TEST ERROR HANDLING
// =============================================================================

/// Unified error type for all test failures
///
/// This provides a consistent error interface across all test suites,
/// making debugging easier and error handling more predictable.
#[derive(Debug, thiserror::Error)]
pub enum TestError {
    #[error("Mock failure: {message}")]
    MockFailure { message: String },

    #[error("Assertion failed: {message}")]
    AssertionFailure { message: String },

    #[error("Serialization error: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Prediction not found: {id}")]
    PredictionNotFound { id: i64 },

    #[error("Event not found: {id}")]
    EventNotFound { id: i64 },

    #[error("Generic test error: {message}")]
    Generic { message: String },
}

impl TestError {
    /// Create a mock failure error
    pub fn mock_failure(message: impl Into<String>) -> Self {
        Self::MockFailure {
            message: message.into(),
        }
    }

    /// Create an assertion failure error
    pub fn assertion_failure(message: impl Into<String>) -> Self {
        Self::AssertionFailure {
            message: message.into(),
        }
    }

    /// Create a prediction not found error
    pub fn prediction_not_found(id: i64) -> Self {
        Self::PredictionNotFound { id }
    }

    /// Create an event not found error
    pub fn event_not_found(id: i64) -> Self {
        Self::EventNotFound { id }
    }
}
