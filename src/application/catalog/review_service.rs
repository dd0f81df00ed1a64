use crate::domain::{BookId, Review, commands::SubmitReview};

use super::catalog_service::{ServiceDependencies, find_book};
use super::confirmation::ReviewConfirmation;
use super::errors::{CatalogApplicationError, Result};

/// レビューを投稿する
///
/// ビジネスルール：
/// - 書籍が存在すること（404が422より優先される）
/// - 評価が1〜5であること
/// - 追記後も書籍が存在すること（並行する削除と競合した場合は404）
///
/// HTTP境界での検証の有無に関係なく同じ結果になる。
/// 保存後、確認通知をキューに積む。通知の成否はこの関数の結果に影響しない。
///
/// # 戻り値
/// 保存されたレビュー
pub async fn submit_review(deps: &ServiceDependencies, cmd: SubmitReview) -> Result<Review> {
    // 1. 書籍の存在確認
    let book = find_book(deps, cmd.book_id).await?;

    // 2. 評価の範囲確認
    let review = Review::try_new(cmd.text_review, cmd.rating)?;

    // 3. レビューストアに追記
    let appended = deps.review_repository.append(book.id, review.clone()).await;

    // 追記の間に書籍が削除された場合は、レビューを残さずNotFoundとする
    // （SQLiteでは外部キー制約により追記自体が失敗する）
    if !book_exists(deps, book.id).await? {
        deps.review_repository
            .remove_for_book(book.id)
            .await
            .map_err(CatalogApplicationError::ReviewRepositoryError)?;
        return Err(CatalogApplicationError::BookNotFound);
    }

    let review_count = appended.map_err(CatalogApplicationError::ReviewRepositoryError)?;

    // 4. 確認通知をキューに積む（fire-and-forget）
    deps.confirmation_queue.enqueue(ReviewConfirmation {
        book_id: book.id,
        review_count,
        recipient: deps.confirmation_recipient.clone(),
    });

    tracing::debug!(book_id = %book.id, review_count, "Review submitted");
    Ok(review)
}

async fn book_exists(deps: &ServiceDependencies, book_id: BookId) -> Result<bool> {
    let book = deps
        .book_repository
        .get(book_id)
        .await
        .map_err(CatalogApplicationError::BookRepositoryError)?;
    Ok(book.is_some())
}

/// 書籍のレビュー一覧を取得する
///
/// レビューがない場合は空のVecを返す。
pub async fn list_reviews(deps: &ServiceDependencies, book_id: i64) -> Result<Vec<Review>> {
    let book = find_book(deps, book_id).await?;

    deps.review_repository
        .list_for_book(book.id)
        .await
        .map_err(CatalogApplicationError::ReviewRepositoryError)
}
