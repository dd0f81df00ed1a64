use crate::domain::{BookId, Review};
use crate::ports::review_repository::{ReviewRepository as ReviewRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use super::InMemoryStoreError;

/// ReviewRepositoryのインメモリ実装
///
/// 書籍IDから投稿順のレビュー列への対応を保持する。
/// 追記は書き込みロック内で行われるため、読み取り側からは
/// 追記前か追記後のどちらかの状態しか見えない。
#[derive(Debug, Default)]
pub struct ReviewRepository {
    reviews: RwLock<HashMap<BookId, Vec<Review>>>,
}

impl ReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepositoryTrait for ReviewRepository {
    async fn append(&self, book_id: BookId, review: Review) -> Result<usize> {
        let mut reviews = self
            .reviews
            .write()
            .map_err(|_| InMemoryStoreError::LockPoisoned)?;

        let book_reviews = reviews.entry(book_id).or_default();
        book_reviews.push(review);

        Ok(book_reviews.len())
    }

    async fn list_for_book(&self, book_id: BookId) -> Result<Vec<Review>> {
        let reviews = self
            .reviews
            .read()
            .map_err(|_| InMemoryStoreError::LockPoisoned)?;

        Ok(reviews.get(&book_id).cloned().unwrap_or_default())
    }

    async fn count_for_book(&self, book_id: BookId) -> Result<usize> {
        let reviews = self
            .reviews
            .read()
            .map_err(|_| InMemoryStoreError::LockPoisoned)?;

        Ok(reviews.get(&book_id).map_or(0, Vec::len))
    }

    async fn remove_for_book(&self, book_id: BookId) -> Result<usize> {
        let mut reviews = self
            .reviews
            .write()
            .map_err(|_| InMemoryStoreError::LockPoisoned)?;

        Ok(reviews.remove(&book_id).map_or(0, |removed| removed.len()))
    }
}
