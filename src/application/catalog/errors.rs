use thiserror::Error;

use crate::domain::DomainError;

/// カタログアプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogApplicationError {
    /// 書籍が見つからない（負のIDを含む）
    #[error("Book not found")]
    BookNotFound,

    /// 入力値が制約を満たさない
    #[error("{0}")]
    Validation(#[from] DomainError),

    /// BookRepositoryのエラー
    #[error("Book repository error")]
    BookRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// ReviewRepositoryのエラー
    #[error("Review repository error")]
    ReviewRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogApplicationError>;
