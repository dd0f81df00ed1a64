use thiserror::Error;

/// ドメイン層のバリデーションエラー
///
/// メッセージはそのままクライアントに返される。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// タイトルが空
    #[error("title must not be empty")]
    EmptyTitle,
    /// 著者が空
    #[error("author must not be empty")]
    EmptyAuthor,
    /// 評価が1〜5の範囲外
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange(i64),
}
