use crate::domain::{BookId, Review};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// レビューリポジトリポート（レビューストア）
///
/// 書籍IDごとに、投稿順のレビュー列を保持する。
/// 書籍の存在確認は呼び出し側の責務。
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// レビューを追記する
    ///
    /// 追記後のその書籍のレビュー件数を返す。
    /// 読み取り側から追記途中の状態が見えてはならない。
    async fn append(&self, book_id: BookId, review: Review) -> Result<usize>;

    /// 書籍のレビューを投稿順で返す
    async fn list_for_book(&self, book_id: BookId) -> Result<Vec<Review>>;

    /// 書籍のレビュー件数
    async fn count_for_book(&self, book_id: BookId) -> Result<usize>;

    /// 書籍のレビューをすべて削除し、削除件数を返す
    ///
    /// 書籍削除時に使用される。
    async fn remove_for_book(&self, book_id: BookId) -> Result<usize>;
}
