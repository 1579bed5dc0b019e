//! Trait abstraction for the submit side effect to enable mocking in tests

use crate::validation::ContactDetails;
use anyhow::Result;
use async_trait::async_trait;

/// Receives contact details once the form has accepted a submit
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    /// Handle an accepted submission, returning the confirmation to show
    async fn submit(&mut self, details: &ContactDetails) -> Result<String>;
}
