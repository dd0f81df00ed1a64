use crate::domain::{Book, BookFilter, BookId, NewBook};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use std::sync::RwLock;

use super::InMemoryStoreError;

#[derive(Debug)]
struct Catalog {
    books: Vec<Book>,
    next_id: BookId,
}

/// BookRepositoryのインメモリ実装
///
/// 書籍は挿入順に保持される。IDは位置ではなく作成時に割り当てる連番なので、
/// 削除後も既存のIDは変わらない。
/// 更新系の操作はすべて1回の書き込みロック内で完結する。
#[derive(Debug)]
pub struct BookRepository {
    catalog: RwLock<Catalog>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Catalog {
                books: Vec::new(),
                next_id: BookId::first(),
            }),
        }
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn add(&self, book: NewBook) -> Result<Book> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|_| InMemoryStoreError::LockPoisoned)?;

        let book = book.into_book(catalog.next_id);
        catalog.next_id = catalog.next_id.next();
        catalog.books.push(book.clone());

        Ok(book)
    }

    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| InMemoryStoreError::LockPoisoned)?;

        Ok(catalog
            .books
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect())
    }

    async fn get(&self, book_id: BookId) -> Result<Option<Book>> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| InMemoryStoreError::LockPoisoned)?;

        // IDは昇順に並んでいる
        Ok(catalog
            .books
            .binary_search_by_key(&book_id, |book| book.id)
            .ok()
            .map(|index| catalog.books[index].clone()))
    }

    async fn update(&self, book_id: BookId, book: NewBook) -> Result<Option<Book>> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|_| InMemoryStoreError::LockPoisoned)?;

        let Ok(index) = catalog.books.binary_search_by_key(&book_id, |book| book.id) else {
            return Ok(None);
        };

        let updated = book.into_book(book_id);
        catalog.books[index] = updated.clone();

        Ok(Some(updated))
    }

    async fn delete(&self, book_id: BookId) -> Result<bool> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|_| InMemoryStoreError::LockPoisoned)?;

        match catalog.books.binary_search_by_key(&book_id, |book| book.id) {
            Ok(index) => {
                catalog.books.remove(index);
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str, author: &str, year: i32) -> NewBook {
        NewBook::new(title, author, year).unwrap()
    }

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let repo = BookRepository::new();

        let first = repo.add(new_book("A", "X", 2000)).await.unwrap();
        let second = repo.add(new_book("B", "Y", 2001)).await.unwrap();

        assert_eq!(first.id.value(), 0);
        assert_eq!(second.id.value(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_none() {
        let repo = BookRepository::new();
        repo.add(new_book("A", "X", 2000)).await.unwrap();

        let missing = repo.get(BookId::new(1).unwrap()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_ids_survive_delete() {
        let repo = BookRepository::new();
        let a = repo.add(new_book("A", "X", 2000)).await.unwrap();
        let b = repo.add(new_book("B", "Y", 2001)).await.unwrap();

        assert!(repo.delete(a.id).await.unwrap());
        assert!(!repo.delete(a.id).await.unwrap());

        let found = repo.get(b.id).await.unwrap();
        assert_eq!(found, Some(b));

        // 削除されたIDは再利用されない
        let c = repo.add(new_book("C", "Z", 2002)).await.unwrap();
        assert_eq!(c.id.value(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = BookRepository::new();
        let book = repo.add(new_book("A", "X", 2000)).await.unwrap();

        let updated = repo
            .update(book.id, new_book("A (2nd ed.)", "X", 2010))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, book.id);
        assert_eq!(updated.title, "A (2nd ed.)");
        assert_eq!(updated.publication_year, 2010);
        assert_eq!(repo.get(book.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let repo = BookRepository::new();
        let result = repo
            .update(BookId::first(), new_book("A", "X", 2000))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_applies_filter_in_insertion_order() {
        let repo = BookRepository::new();
        repo.add(new_book("A", "X", 2000)).await.unwrap();
        repo.add(new_book("B", "Y", 2000)).await.unwrap();
        repo.add(new_book("C", "X", 2001)).await.unwrap();

        let by_author = repo
            .list(&BookFilter::new(Some("X".to_string()), None))
            .await
            .unwrap();
        let titles: Vec<_> = by_author.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);

        let none = repo
            .list(&BookFilter::new(Some("Y".to_string()), Some(2001)))
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
