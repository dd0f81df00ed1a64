mod book_repository;
mod review_repository;

pub use book_repository::BookRepository as InMemoryBookRepository;
pub use review_repository::ReviewRepository as InMemoryReviewRepository;

use thiserror::Error;

/// インメモリストアのエラー
#[derive(Debug, Error)]
pub enum InMemoryStoreError {
    /// 書き込み中にパニックしたスレッドがロックを汚染した
    #[error("in-memory store lock poisoned")]
    LockPoisoned,
}
