use super::{BookId, DomainError};

/// 書籍の入力値
///
/// 不変条件：タイトルと著者は空白のみであってはならない。
/// 作成・更新の両方でこの型を経由する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    title: String,
    author: String,
    publication_year: i32,
}

impl NewBook {
    /// # エラー
    /// - `DomainError::EmptyTitle`: タイトルが空
    /// - `DomainError::EmptyAuthor`: 著者が空
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let author = author.into();

        if title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        if author.trim().is_empty() {
            return Err(DomainError::EmptyAuthor);
        }

        Ok(Self {
            title,
            author,
            publication_year,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    /// IDを割り当てて保存済みの書籍にする
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
        }
    }
}

/// カタログに登録された書籍
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

/// 書籍一覧の絞り込み条件
///
/// 指定された条件はすべてAND結合される。
/// 著者は大文字小文字を区別した完全一致。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub author: Option<String>,
    pub publication_year: Option<i32>,
}

impl BookFilter {
    pub fn new(author: Option<String>, publication_year: Option<i32>) -> Self {
        Self {
            author,
            publication_year,
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        let author_matches = self
            .author
            .as_deref()
            .is_none_or(|author| book.author == author);
        let year_matches = self
            .publication_year
            .is_none_or(|year| book.publication_year == year);

        author_matches && year_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, author: &str, year: i32) -> Book {
        NewBook::new(title, author, year)
            .unwrap()
            .into_book(BookId::new(id).unwrap())
    }

    #[test]
    fn test_new_book_rejects_empty_title() {
        assert_eq!(
            NewBook::new("  ", "Kalam", 1999),
            Err(DomainError::EmptyTitle)
        );
    }

    #[test]
    fn test_new_book_rejects_empty_author() {
        assert_eq!(
            NewBook::new("Wings of Fire", "", 1999),
            Err(DomainError::EmptyAuthor)
        );
    }

    #[test]
    fn test_into_book_keeps_fields() {
        let stored = book(3, "Wings of Fire", "A.P.J. Abdul Kalam", 1999);
        assert_eq!(stored.id.value(), 3);
        assert_eq!(stored.title, "Wings of Fire");
        assert_eq!(stored.author, "A.P.J. Abdul Kalam");
        assert_eq!(stored.publication_year, 1999);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = BookFilter::default();
        assert!(filter.matches(&book(0, "A", "X", 2000)));
    }

    #[test]
    fn test_author_filter_is_case_sensitive() {
        let filter = BookFilter::new(Some("Tolkien".to_string()), None);
        assert!(filter.matches(&book(0, "The Hobbit", "Tolkien", 1937)));
        assert!(!filter.matches(&book(1, "The Hobbit", "tolkien", 1937)));
    }

    #[test]
    fn test_filters_are_combined_with_and() {
        let filter = BookFilter::new(Some("Tolkien".to_string()), Some(1954));
        assert!(filter.matches(&book(0, "The Fellowship of the Ring", "Tolkien", 1954)));
        assert!(!filter.matches(&book(1, "The Hobbit", "Tolkien", 1937)));
        assert!(!filter.matches(&book(2, "Lord of the Flies", "Golding", 1954)));
    }
}
