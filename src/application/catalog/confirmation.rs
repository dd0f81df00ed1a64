use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use crate::domain::BookId;
use crate::ports::NotificationService;

/// レビュー投稿の確認通知メッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfirmation {
    pub book_id: BookId,
    /// 投稿直後のその書籍のレビュー件数
    pub review_count: usize,
    pub recipient: String,
}

/// 確認通知キュー
///
/// `enqueue`はブロックせず即座に戻る。
/// ワーカーが停止していても呼び出し側には失敗を返さない。
#[derive(Clone)]
pub struct ConfirmationQueue {
    sender: UnboundedSender<ReviewConfirmation>,
}

impl ConfirmationQueue {
    pub fn enqueue(&self, confirmation: ReviewConfirmation) {
        if let Err(e) = self.sender.send(confirmation) {
            tracing::warn!(
                book_id = %e.0.book_id,
                "Confirmation worker is not running, dropping notification"
            );
        }
    }
}

/// ワーカーの処理結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkerStats {
    pub delivered: usize,
    pub failed: usize,
}

/// 確認通知ワーカーを起動する
///
/// 返されたキューのすべてのクローンが破棄されると、
/// 残りのメッセージを配信してから終了し、統計を返す。
/// Tokioランタイム内で呼び出すこと。
pub fn spawn_confirmation_worker(
    notification_service: Arc<dyn NotificationService>,
) -> (ConfirmationQueue, JoinHandle<WorkerStats>) {
    let (sender, receiver) = unbounded_channel();
    let handle = tokio::spawn(run_worker(receiver, notification_service));

    (ConfirmationQueue { sender }, handle)
}

async fn run_worker(
    mut receiver: UnboundedReceiver<ReviewConfirmation>,
    notification_service: Arc<dyn NotificationService>,
) -> WorkerStats {
    let mut stats = WorkerStats::default();

    while let Some(confirmation) = receiver.recv().await {
        match notification_service
            .send_review_confirmation(
                confirmation.book_id,
                confirmation.review_count,
                &confirmation.recipient,
            )
            .await
        {
            Ok(()) => stats.delivered += 1,
            Err(e) => {
                // 再送はしない
                tracing::warn!(
                    book_id = %confirmation.book_id,
                    error = %e,
                    "Failed to send review confirmation"
                );
                stats.failed += 1;
            }
        }
    }

    tracing::debug!(?stats, "Confirmation worker stopped");
    stats
}
