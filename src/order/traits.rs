//! Trait abstraction for the order API to enable mocking in tests

use super::error::SubmissionError;
use crate::state::FormValues;
use async_trait::async_trait;

/// Order submission, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Place an order; returns the server's confirmation message
    async fn submit_order(&self, order: &FormValues) -> Result<String, SubmissionError>;
}
