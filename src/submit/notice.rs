//! Submit handler that confirms the submission to the user

use super::traits::SubmitHandler;
use crate::validation::ContactDetails;
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Local};
use uuid::Uuid;

/// Confirms accepted submissions with a receipt, without sending them anywhere
pub struct NoticeSubmitHandler {
    message: String,
}

impl NoticeSubmitHandler {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn format_notice(&self, details: &ContactDetails, receipt: Uuid, at: DateTime<Local>) -> String {
        let name = details.first_name.trim();
        format!(
            "{}\n\nThank you, {name}.\nReceipt {receipt} at {}",
            self.message,
            at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

#[async_trait]
impl SubmitHandler for NoticeSubmitHandler {
    async fn submit(&mut self, details: &ContactDetails) -> Result<String> {
        if details.first_name.trim().is_empty() {
            bail!("Refusing to confirm a submission without a name");
        }
        let receipt = Uuid::new_v4();
        tracing::info!(%receipt, gender = ?details.gender, "submission confirmed");
        Ok(self.format_notice(details, receipt, Local::now()))
    }
}
