/// コマンド：書籍を追加する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

/// コマンド：書籍の内容を置き換える
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBook {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

/// コマンド：レビューを投稿する
///
/// 書籍IDと評価は未検証の生の値。検証はアプリケーション層で行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReview {
    pub book_id: i64,
    pub text_review: String,
    pub rating: i64,
}
