use serde::{Deserialize, Serialize};

use super::DomainError;

/// 書籍ID - カタログ内で書籍を識別する
///
/// ストアが作成時に割り当てる0始まりの連番。削除後も再利用されない。
/// 負の値は作成できない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookId(i64);

impl BookId {
    /// 負の値の場合は`None`を返す
    pub fn new(value: i64) -> Option<Self> {
        (value >= 0).then_some(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// 次に割り当てるID
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// 最初に割り当てるID
    pub fn first() -> Self {
        Self(0)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 評価の下限
pub const MIN_RATING: i64 = 1;
/// 評価の上限
pub const MAX_RATING: i64 = 5;

/// 星評価（1〜5）
///
/// 不変条件：範囲外の値は作成できない。
/// デシリアライズ時も同じ検証を通る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    /// # エラー
    /// 1〜5の範囲外の場合は`DomainError::RatingOutOfRange`を返す
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(DomainError::RatingOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}
