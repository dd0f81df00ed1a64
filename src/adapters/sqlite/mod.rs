mod book_repository;
mod review_repository;

// パブリックに型を再エクスポート
pub use book_repository::BookRepository as SqliteBookRepository;
pub use review_repository::ReviewRepository as SqliteReviewRepository;

use crate::domain::BookId;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 行IDは1始まり、BookIdは0始まり
const ROW_ID_OFFSET: i64 = 1;

/// 行IDに変換できないBookIdは、どの行にも対応しないため`None`を返す
pub(crate) fn to_row_id(book_id: BookId) -> Option<i64> {
    book_id.value().checked_add(ROW_ID_OFFSET)
}

pub(crate) fn from_row_id(row_id: i64) -> Result<BookId> {
    BookId::new(row_id - ROW_ID_OFFSET).ok_or_else(|| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("book row id out of range: {}", row_id),
        )) as Box<dyn std::error::Error + Send + Sync>
    })
}

/// SQLiteに接続し、マイグレーションを実行する
///
/// ファイルが存在しない場合は作成する。
/// `sqlite::memory:`は接続ごとに別のデータベースになるため、接続数を1に制限する。
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("Connected to SQLite database: {}", database_url);
    Ok(pool)
}
