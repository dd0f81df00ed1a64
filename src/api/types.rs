use serde::{Deserialize, Serialize};

use crate::domain::{
    Book, BookFilter, Review,
    commands::{AddBook, SubmitReview, UpdateBook},
};

/// 書籍の作成・更新リクエスト（POST /books/, PUT /books/:id/）
///
/// snake_caseのフィールド名も受け付ける。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub title: String,
    pub author: String,
    #[serde(alias = "publication_year")]
    pub publication_year: i32,
}

impl BookRequest {
    pub fn to_command(self) -> AddBook {
        AddBook {
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
        }
    }

    pub fn to_update_command(self, book_id: i64) -> UpdateBook {
        UpdateBook {
            book_id,
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
        }
    }
}

/// 書籍レスポンス
///
/// IDは含めない（入力と同じ形をそのまま返す）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
            publication_year: book.publication_year,
        }
    }
}

/// レビュー投稿リクエスト（POST /books/:id/reviews/）
///
/// 評価は生の整数で受け取り、範囲の検証はアプリケーション層に任せる。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[serde(alias = "text_review")]
    pub text_review: String,
    pub rating: i64,
}

impl ReviewRequest {
    pub fn to_command(self, book_id: i64) -> SubmitReview {
        SubmitReview {
            book_id,
            text_review: self.text_review,
            rating: self.rating,
        }
    }
}

/// レビューレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub text_review: String,
    pub rating: u8,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            text_review: review.text_review,
            rating: review.rating.value(),
        }
    }
}

/// 書籍一覧取得のクエリパラメータ
///
/// 空文字は「指定なし」として扱う（`?author=&publicationYear=`）。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksQuery {
    /// 著者でフィルタリング
    pub author: Option<String>,
    /// 出版年でフィルタリング
    #[serde(alias = "publication_year")]
    pub publication_year: Option<String>,
}

impl ListBooksQuery {
    /// クエリパラメータのパースとバリデーション
    pub fn to_filter(self) -> Result<BookFilter, String> {
        let author = self.author.filter(|author| !author.is_empty());

        let publication_year = match self.publication_year.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(year) => Some(
                year.parse::<i32>()
                    .map_err(|_| format!("publicationYear must be an integer: {}", year))?,
            ),
        };

        Ok(BookFilter::new(author, publication_year))
    }
}

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
