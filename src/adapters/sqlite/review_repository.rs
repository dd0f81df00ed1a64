use crate::domain::{BookId, Rating, Review};
use crate::ports::review_repository::{ReviewRepository as ReviewRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use super::to_row_id;

/// SQLiteの行データをReviewに変換する
///
/// CHECK制約があるが、評価は値オブジェクトで再検証する。
fn map_row_to_review(row: &SqliteRow) -> Result<Review> {
    let rating = Rating::new(row.try_get("rating")?)?;
    Ok(Review::new(row.try_get::<String, _>("text_review")?, rating))
}

/// ReviewRepositoryのSQLite実装
pub struct ReviewRepository {
    pool: SqlitePool,
}

impl ReviewRepository {
    /// SQLiteコネクションプールから新しいReviewRepositoryを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepositoryTrait for ReviewRepository {
    /// 追記と件数取得を同一トランザクションで行う
    async fn append(&self, book_id: BookId, review: Review) -> Result<usize> {
        let row_id = to_row_id(book_id).ok_or_else(|| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("book id has no row: {}", book_id),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO reviews (book_id, text_review, rating)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(row_id)
        .bind(review.text_review.as_str())
        .bind(i64::from(review.rating))
        .execute(&mut *tx)
        .await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE book_id = ?")
            .bind(row_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(usize::try_from(count)?)
    }

    async fn list_for_book(&self, book_id: BookId) -> Result<Vec<Review>> {
        let Some(row_id) = to_row_id(book_id) else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query(
            r#"
            SELECT text_review, rating
            FROM reviews
            WHERE book_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(row_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_review).collect()
    }

    async fn count_for_book(&self, book_id: BookId) -> Result<usize> {
        let Some(row_id) = to_row_id(book_id) else {
            return Ok(0);
        };

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE book_id = ?")
            .bind(row_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(usize::try_from(count)?)
    }

    async fn remove_for_book(&self, book_id: BookId) -> Result<usize> {
        let Some(row_id) = to_row_id(book_id) else {
            return Ok(0);
        };

        let result = sqlx::query("DELETE FROM reviews WHERE book_id = ?")
            .bind(row_id)
            .execute(&self.pool)
            .await?;

        Ok(usize::try_from(result.rows_affected())?)
    }
}
