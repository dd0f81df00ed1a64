use super::{DomainError, Rating};

/// 書籍に対するレビュー
///
/// 作成後は不変。書籍レコードには埋め込まれず、
/// 書籍IDをキーとした別のコレクションに保存される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub text_review: String,
    pub rating: Rating,
}

impl Review {
    pub fn new(text_review: impl Into<String>, rating: Rating) -> Self {
        Self {
            text_review: text_review.into(),
            rating,
        }
    }

    /// 生の評価値からレビューを作成する
    ///
    /// # エラー
    /// 評価が1〜5の範囲外の場合は`DomainError::RatingOutOfRange`
    pub fn try_new(text_review: impl Into<String>, rating: i64) -> Result<Self, DomainError> {
        Ok(Self::new(text_review, Rating::new(rating)?))
    }
}
