use crate::domain::BookId;
use crate::ports::notification_service::{NotificationService as NotificationServiceTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// 送信された確認通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentConfirmation {
    pub book_id: BookId,
    pub review_count: usize,
    pub recipient: String,
}

/// Mock implementation of NotificationService
///
/// Does not deliver real mail. Logs each confirmation and keeps it
/// in memory so tests can assert on what would have been sent.
#[derive(Debug, Default)]
pub struct NotificationService {
    sent: Mutex<Vec<SentConfirmation>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the confirmations sent so far, in delivery order
    pub fn sent(&self) -> Vec<SentConfirmation> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn send_review_confirmation(
        &self,
        book_id: BookId,
        review_count: usize,
        recipient: &str,
    ) -> Result<()> {
        tracing::info!(
            %book_id,
            "Confirmation email sent for review #{} to {}",
            review_count,
            recipient
        );

        let mut sent = self.sent.lock().map_err(|_| "notification log poisoned")?;
        sent.push(SentConfirmation {
            book_id,
            review_count,
            recipient: recipient.to_string(),
        });

        Ok(())
    }
}
