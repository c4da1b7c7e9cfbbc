//! API error body and the client-facing messages.

use serde::Serialize;

pub const MISSING_FIELDS: &str = "Missing required fields.";
pub const INFEASIBLE: &str = "Unable to meet the load with given constraints.";
pub const INTERNAL: &str = "Internal server error.";

/// Error response body for 4xx/5xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
