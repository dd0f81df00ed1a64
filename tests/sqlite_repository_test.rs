use book_review_catalog::adapters::sqlite::{SqliteBookRepository, SqliteReviewRepository};
use book_review_catalog::domain::*;
use book_review_catalog::ports::*;

mod common;

fn new_book(title: &str, author: &str, year: i32) -> NewBook {
    NewBook::new(title, author, year).unwrap()
}

fn review(text: &str, rating: i64) -> Review {
    Review::try_new(text, rating).unwrap()
}

// ============================================================================
// SqliteBookRepository
// ============================================================================

#[tokio::test]
async fn test_add_assigns_zero_based_ids() {
    let pool = common::create_test_pool().await;
    let repo = SqliteBookRepository::new(pool);

    let first = repo.add(new_book("Emma", "Austen", 1815)).await.unwrap();
    let second = repo.add(new_book("Ivanhoe", "Scott", 1819)).await.unwrap();

    assert_eq!(first.id.value(), 0);
    assert_eq!(second.id.value(), 1);
    assert_eq!(repo.get(first.id).await.unwrap(), Some(first));
}

#[tokio::test]
async fn test_row_layout_matches_schema() {
    let pool = common::create_test_pool().await;
    let repo = SqliteBookRepository::new(pool.clone());

    repo.add(new_book("Emma", "Austen", 1815)).await.unwrap();

    let (id, title, author, year): (i64, String, String, i64) =
        sqlx::query_as("SELECT id, title, author, publication_year FROM books")
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(id, 1);
    assert_eq!(title, "Emma");
    assert_eq!(author, "Austen");
    assert_eq!(year, 1815);
}

#[tokio::test]
async fn test_list_with_filters() {
    let pool = common::create_test_pool().await;
    let repo = SqliteBookRepository::new(pool);
    repo.add(new_book("Emma", "Austen", 1815)).await.unwrap();
    repo.add(new_book("Persuasion", "Austen", 1817)).await.unwrap();
    repo.add(new_book("Rob Roy", "Scott", 1817)).await.unwrap();

    let all = repo.list(&BookFilter::default()).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Emma", "Persuasion", "Rob Roy"]);

    let austen = repo
        .list(&BookFilter::new(Some("Austen".to_string()), None))
        .await
        .unwrap();
    assert_eq!(austen.len(), 2);

    let year_1817 = repo
        .list(&BookFilter::new(None, Some(1817)))
        .await
        .unwrap();
    assert_eq!(year_1817.len(), 2);

    let both = repo
        .list(&BookFilter::new(Some("Scott".to_string()), Some(1817)))
        .await
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].title, "Rob Roy");

    let case_sensitive = repo
        .list(&BookFilter::new(Some("austen".to_string()), None))
        .await
        .unwrap();
    assert!(case_sensitive.is_empty());
}

#[tokio::test]
async fn test_update_and_delete() {
    let pool = common::create_test_pool().await;
    let repo = SqliteBookRepository::new(pool);
    let book = repo.add(new_book("Emma", "Austen", 1815)).await.unwrap();

    let updated = repo
        .update(book.id, new_book("Emma", "Jane Austen", 1816))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.author, "Jane Austen");
    assert_eq!(repo.get(book.id).await.unwrap(), Some(updated));

    assert!(repo.delete(book.id).await.unwrap());
    assert!(!repo.delete(book.id).await.unwrap());
    assert!(repo.get(book.id).await.unwrap().is_none());

    let missing = repo
        .update(book.id, new_book("Emma", "Austen", 1815))
        .await
        .unwrap();
    assert!(missing.is_none());

    // AUTOINCREMENTのため削除されたIDは再利用されない
    let next = repo.add(new_book("Sanditon", "Austen", 1817)).await.unwrap();
    assert_eq!(next.id.value(), 1);
}

// ============================================================================
// SqliteReviewRepository
// ============================================================================

#[tokio::test]
async fn test_append_and_list_reviews() {
    let pool = common::create_test_pool().await;
    let books = SqliteBookRepository::new(pool.clone());
    let reviews = SqliteReviewRepository::new(pool);

    let emma = books.add(new_book("Emma", "Austen", 1815)).await.unwrap();
    let rob_roy = books.add(new_book("Rob Roy", "Scott", 1817)).await.unwrap();

    assert_eq!(reviews.append(emma.id, review("Witty", 4)).await.unwrap(), 1);
    assert_eq!(reviews.append(emma.id, review("Charming", 5)).await.unwrap(), 2);
    assert_eq!(reviews.append(rob_roy.id, review("Long", 2)).await.unwrap(), 1);

    assert_eq!(
        reviews.list_for_book(emma.id).await.unwrap(),
        vec![review("Witty", 4), review("Charming", 5)]
    );
    assert_eq!(reviews.count_for_book(rob_roy.id).await.unwrap(), 1);
    assert!(
        reviews
            .list_for_book(BookId::new(99).unwrap())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_reviews_require_existing_book() {
    let pool = common::create_test_pool().await;
    let reviews = SqliteReviewRepository::new(pool);

    // 外部キー制約違反はエラーとして返り、空の結果にはならない
    let result = reviews.append(BookId::first(), review("Orphan", 3)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_deleting_book_cascades_to_reviews() {
    let pool = common::create_test_pool().await;
    let books = SqliteBookRepository::new(pool.clone());
    let reviews = SqliteReviewRepository::new(pool);

    let emma = books.add(new_book("Emma", "Austen", 1815)).await.unwrap();
    reviews.append(emma.id, review("Witty", 4)).await.unwrap();

    assert!(books.delete(emma.id).await.unwrap());
    assert_eq!(reviews.count_for_book(emma.id).await.unwrap(), 0);
    assert_eq!(reviews.remove_for_book(emma.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_rating_check_constraint() {
    let pool = common::create_test_pool().await;
    let books = SqliteBookRepository::new(pool.clone());
    let emma = books.add(new_book("Emma", "Austen", 1815)).await.unwrap();

    let result = sqlx::query("INSERT INTO reviews (book_id, text_review, rating) VALUES (?, ?, ?)")
        .bind(emma.id.value() + 1)
        .bind("Off the scale")
        .bind(6_i64)
        .execute(&pool)
        .await;

    assert!(result.is_err());
}
