use crate::domain::{Book, BookFilter, BookId, NewBook};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍リポジトリポート（カタログストア）
///
/// 書籍レコードを排他的に所有する。
/// 存在しないことはエラーではなく`None`/`false`で表し、
/// `Err`はストレージ障害のみを表す。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 書籍を追加する
    ///
    /// 次のIDを割り当て、保存したレコードを返す。
    async fn add(&self, book: NewBook) -> Result<Book>;

    /// 条件に一致する書籍をID順で返す
    ///
    /// 一致するものがなければ空のVecを返す。
    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>>;

    /// IDで書籍を取得する
    async fn get(&self, book_id: BookId) -> Result<Option<Book>>;

    /// 書籍の内容を置き換える
    ///
    /// 存在しないIDの場合は`None`を返す。
    async fn update(&self, book_id: BookId, book: NewBook) -> Result<Option<Book>>;

    /// 書籍を削除する
    ///
    /// 削除した場合は`true`、存在しない（削除済みを含む）場合は`false`。
    async fn delete(&self, book_id: BookId) -> Result<bool>;
}
