use crate::application::catalog::CatalogApplicationError;
use axum::{
    Json,
    extract::path::ErrorKind,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーと、リクエストの抽出失敗をまとめる。
/// すべての失敗はここで`{"message": ...}`形式のレスポンスに変換される。
#[derive(Debug)]
pub enum ApiError {
    /// アプリケーション層のエラー
    Application(CatalogApplicationError),
    /// リクエストの形式が不正（JSON、パス、クエリ）
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    /// 422 Unprocessable Entity
    pub fn unprocessable(message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }
}

impl From<CatalogApplicationError> for ApiError {
    fn from(err: CatalogApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // 型・必須項目・構文・Content-Typeの誤りはすべて入力検証エラー
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                ApiError::unprocessable(rejection.body_text())
            }
            other => ApiError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

/// 符号付きの整数表記か（範囲は問わない）
fn is_integer_literal(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(ref inner) => {
                let value = match inner.kind() {
                    ErrorKind::ParseErrorAtKey { value, .. }
                    | ErrorKind::ParseErrorAtIndex { value, .. }
                    | ErrorKind::ParseError { value, .. } => Some(value.as_str()),
                    _ => None,
                };

                // i64に収まらない整数のIDは、どの書籍にも対応しない
                if value.is_some_and(is_integer_literal) {
                    return ApiError::Application(CatalogApplicationError::BookNotFound);
                }

                ApiError::unprocessable(rejection.body_text())
            }
            other => ApiError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // 404 Not Found - リクエストされた書籍が存在しない
            ApiError::Application(CatalogApplicationError::BookNotFound) => {
                (StatusCode::NOT_FOUND, "Book not found".to_string())
            }

            // 422 Unprocessable Entity - 入力値の制約違反
            ApiError::Application(CatalogApplicationError::Validation(e)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }

            // 500 Internal Server Error - ストレージ障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(
                CatalogApplicationError::BookRepositoryError(ref e)
                | CatalogApplicationError::ReviewRepositoryError(ref e),
            ) => {
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }

            ApiError::Rejected { status, message } => (status, message),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
