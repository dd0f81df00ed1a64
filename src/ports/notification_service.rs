use async_trait::async_trait;

use crate::domain::BookId;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知サービスポート
///
/// レビュー投稿者への確認通知の配信メカニズムを抽象化する。
/// 実装はメール、プッシュ通知などが考えられる。
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// レビュー投稿の確認通知を送信する
    ///
    /// `review_count`は投稿直後のその書籍のレビュー件数。
    async fn send_review_confirmation(
        &self,
        book_id: BookId,
        review_count: usize,
        recipient: &str,
    ) -> Result<()>;
}
