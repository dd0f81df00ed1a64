use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::handlers::{
    AppState, add_book, delete_book, get_book, list_books, list_reviews, submit_review,
    update_book,
};

/// Creates the API router with all catalog endpoints
///
/// Book endpoints:
/// - POST /books/ - Add a book
/// - GET /books/?author=&publicationYear= - List books with optional filters
/// - GET /books/:id/ - Get a book
/// - PUT /books/:id/ - Replace a book
/// - DELETE /books/:id/ - Delete a book and its reviews
///
/// Review endpoints:
/// - POST /books/:id/reviews/ - Submit a review
/// - GET /books/:id/reviews/ - List reviews for a book
///
/// Every path is served with and without the trailing slash.
pub fn create_router(state: Arc<AppState>) -> Router {
    let books = post(add_book).get(list_books);
    let book = get(get_book).put(update_book).delete(delete_book);
    let reviews = post(submit_review).get(list_reviews);

    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/books", books.clone())
        .route("/books/", books)
        .route("/books/:book_id", book.clone())
        .route("/books/:book_id/", book)
        .route("/books/:book_id/reviews", reviews.clone())
        .route("/books/:book_id/reviews/", reviews)
        .fallback(not_found)
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::Rejected {
        status: StatusCode::NOT_FOUND,
        message: "Not found".to_string(),
    }
}
