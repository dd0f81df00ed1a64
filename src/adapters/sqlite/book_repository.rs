use crate::domain::{Book, BookFilter, BookId, NewBook};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use super::{from_row_id, to_row_id};

/// SQLiteの行データをBookに変換する
fn map_row_to_book(row: &SqliteRow) -> Result<Book> {
    Ok(Book {
        id: from_row_id(row.try_get("id")?)?,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        publication_year: row.try_get("publication_year")?,
    })
}

/// BookRepositoryのSQLite実装
///
/// `books`テーブルのAUTOINCREMENTによりIDは再利用されない。
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// SQLiteコネクションプールから新しいBookRepositoryを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn add(&self, book: NewBook) -> Result<Book> {
        let result = sqlx::query(
            r#"
            INSERT INTO books (title, author, publication_year)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(book.title())
        .bind(book.author())
        .bind(book.publication_year())
        .execute(&self.pool)
        .await?;

        let book_id = from_row_id(result.last_insert_rowid())?;
        Ok(book.into_book(book_id))
    }

    /// 未指定の条件はNULLとしてバインドし、SQL側で無視する
    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, author, publication_year
            FROM books
            WHERE (?1 IS NULL OR author = ?1)
              AND (?2 IS NULL OR publication_year = ?2)
            ORDER BY id ASC
            "#,
        )
        .bind(filter.author.as_deref())
        .bind(filter.publication_year)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_book).collect()
    }

    async fn get(&self, book_id: BookId) -> Result<Option<Book>> {
        let Some(row_id) = to_row_id(book_id) else {
            return Ok(None);
        };

        let row = sqlx::query(
            r#"
            SELECT id, title, author, publication_year
            FROM books
            WHERE id = ?
            "#,
        )
        .bind(row_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_book).transpose()
    }

    async fn update(&self, book_id: BookId, book: NewBook) -> Result<Option<Book>> {
        let Some(row_id) = to_row_id(book_id) else {
            return Ok(None);
        };

        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = ?, author = ?, publication_year = ?
            WHERE id = ?
            "#,
        )
        .bind(book.title())
        .bind(book.author())
        .bind(book.publication_year())
        .bind(row_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(book.into_book(book_id)))
    }

    /// レビューは外部キーのON DELETE CASCADEで削除される
    async fn delete(&self, book_id: BookId) -> Result<bool> {
        let Some(row_id) = to_row_id(book_id) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(row_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
