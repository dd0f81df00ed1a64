use crate::domain::{Book, BookFilter, BookId, NewBook, commands::*};
use crate::ports::*;
use std::sync::Arc;

use super::confirmation::ConfirmationQueue;
use super::errors::{CatalogApplicationError, Result};

/// サービスの依存関係
///
/// ストアはプロセス全体のグローバル状態ではなく、
/// 明示的に構築されてハンドラーに渡される。
/// テストごとに独立したストアを注入できる。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
    pub review_repository: Arc<dyn ReviewRepository>,
    pub confirmation_queue: ConfirmationQueue,
    /// 確認通知の宛先（プレースホルダー）
    pub confirmation_recipient: String,
}

/// 生のIDから存在する書籍を解決するヘルパー関数
///
/// submit_review, list_reviews, get_book などで共通利用される。
///
/// # エラー
/// - BookNotFound: IDが負、または書籍が存在しない
/// - BookRepositoryError: 読み込み失敗
pub(super) async fn find_book(deps: &ServiceDependencies, book_id: i64) -> Result<Book> {
    let book_id = BookId::new(book_id).ok_or(CatalogApplicationError::BookNotFound)?;

    deps.book_repository
        .get(book_id)
        .await
        .map_err(CatalogApplicationError::BookRepositoryError)?
        .ok_or(CatalogApplicationError::BookNotFound)
}

/// 書籍を追加する
///
/// タイトルと著者が空でないことを検証し、カタログに追記する。
pub async fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Result<Book> {
    let new_book = NewBook::new(cmd.title, cmd.author, cmd.publication_year)?;

    let book = deps
        .book_repository
        .add(new_book)
        .await
        .map_err(CatalogApplicationError::BookRepositoryError)?;

    tracing::debug!(book_id = %book.id, "Book added");
    Ok(book)
}

/// 条件に一致する書籍を取得する
///
/// 一致するものがない場合も失敗せず空のVecを返す。
pub async fn list_books(deps: &ServiceDependencies, filter: BookFilter) -> Result<Vec<Book>> {
    deps.book_repository
        .list(&filter)
        .await
        .map_err(CatalogApplicationError::BookRepositoryError)
}

/// IDで書籍を取得する
pub async fn get_book(deps: &ServiceDependencies, book_id: i64) -> Result<Book> {
    find_book(deps, book_id).await
}

/// 書籍の内容を置き換える
///
/// 入力の検証は書籍の存在確認より先に行う。
pub async fn update_book(deps: &ServiceDependencies, cmd: UpdateBook) -> Result<Book> {
    let new_book = NewBook::new(cmd.title, cmd.author, cmd.publication_year)?;
    let book_id = BookId::new(cmd.book_id).ok_or(CatalogApplicationError::BookNotFound)?;

    let book = deps
        .book_repository
        .update(book_id, new_book)
        .await
        .map_err(CatalogApplicationError::BookRepositoryError)?
        .ok_or(CatalogApplicationError::BookNotFound)?;

    tracing::debug!(book_id = %book.id, "Book updated");
    Ok(book)
}

/// 書籍とそのレビューを削除する
///
/// 削除済みのIDに対する再実行はBookNotFoundになる。
pub async fn delete_book(deps: &ServiceDependencies, book_id: i64) -> Result<()> {
    let book_id = BookId::new(book_id).ok_or(CatalogApplicationError::BookNotFound)?;

    let deleted = deps
        .book_repository
        .delete(book_id)
        .await
        .map_err(CatalogApplicationError::BookRepositoryError)?;

    if !deleted {
        return Err(CatalogApplicationError::BookNotFound);
    }

    let removed_reviews = deps
        .review_repository
        .remove_for_book(book_id)
        .await
        .map_err(CatalogApplicationError::ReviewRepositoryError)?;

    tracing::debug!(%book_id, removed_reviews, "Book deleted");
    Ok(())
}
