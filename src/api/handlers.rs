use crate::application::catalog::{
    ServiceDependencies, add_book as execute_add_book, delete_book as execute_delete_book,
    get_book as execute_get_book, list_books as execute_list_books,
    list_reviews as execute_list_reviews, submit_review as execute_submit_review,
    update_book as execute_update_book,
};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{
    error::ApiError,
    extract::{ApiJson, ApiPath, ApiQuery},
    types::{BookRequest, BookResponse, ListBooksQuery, ReviewRequest, ReviewResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Book handlers
// ============================================================================

/// POST /books/ - 書籍を追加
///
/// 保存した書籍をそのまま返す。
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<BookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = execute_add_book(&state.service_deps, req.to_command()).await?;
    Ok(Json(BookResponse::from(book)))
}

/// GET /books/ - オプションフィルタ付き書籍一覧取得
///
/// クエリパラメータ:
/// - author: 著者でフィルタリング（完全一致、オプション）
/// - publicationYear: 出版年でフィルタリング（オプション）
///
/// 一致する書籍がなくても200で空配列を返す。
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ListBooksQuery>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let filter = query.to_filter().map_err(ApiError::unprocessable)?;

    let books = execute_list_books(&state.service_deps, filter).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /books/:id/ - 書籍をIDで取得
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<i64>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = execute_get_book(&state.service_deps, book_id).await?;
    Ok(Json(BookResponse::from(book)))
}

/// PUT /books/:id/ - 書籍の内容を置き換え
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<i64>,
    ApiJson(req): ApiJson<BookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = execute_update_book(&state.service_deps, req.to_update_command(book_id)).await?;
    Ok(Json(BookResponse::from(book)))
}

/// DELETE /books/:id/ - 書籍とそのレビューを削除
///
/// 削除済みの書籍に対しては404を返す。
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    execute_delete_book(&state.service_deps, book_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Review handlers
// ============================================================================

/// POST /books/:id/reviews/ - レビューを投稿
///
/// 強制されるビジネスルール:
/// - 書籍が存在すること（404）
/// - 評価が1〜5であること（422）
///
/// 確認通知はバックグラウンドで送信され、レスポンスを待たせない。
pub async fn submit_review(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<i64>,
    ApiJson(req): ApiJson<ReviewRequest>,
) -> Result<Json<ReviewResponse>, ApiError> {
    let review = execute_submit_review(&state.service_deps, req.to_command(book_id)).await?;
    Ok(Json(ReviewResponse::from(review)))
}

/// GET /books/:id/reviews/ - 書籍のレビュー一覧取得
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<i64>,
) -> Result<Json<Vec<ReviewResponse>>, ApiError> {
    let reviews = execute_list_reviews(&state.service_deps, book_id).await?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}
