#![allow(dead_code)]

use book_review_catalog::adapters::in_memory::{InMemoryBookRepository, InMemoryReviewRepository};
use book_review_catalog::adapters::mock::NotificationService;
use book_review_catalog::adapters::mock::notification_service::SentConfirmation;
use book_review_catalog::adapters::sqlite::{self, SqliteBookRepository, SqliteReviewRepository};
use book_review_catalog::application::catalog::{ServiceDependencies, spawn_confirmation_worker};
use book_review_catalog::ports::{BookRepository, ReviewRepository};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_RECIPIENT: &str = "user@example.com";

/// テスト用のSQLiteプールを作成し、マイグレーションを実行
///
/// `sqlite::memory:`を使うため、テストごとに独立したデータベースになる。
/// 本番と同じマイグレーションファイルを使用する。
pub async fn create_test_pool() -> SqlitePool {
    sqlite::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

/// 任意のリポジトリからサービスの依存関係を組み立てる
///
/// 確認通知ワーカーも起動する。Tokioランタイム内で呼ぶこと。
pub fn build_deps(
    book_repository: Arc<dyn BookRepository>,
    review_repository: Arc<dyn ReviewRepository>,
    notification_service: Arc<NotificationService>,
) -> ServiceDependencies {
    let (confirmation_queue, _worker) = spawn_confirmation_worker(notification_service);

    ServiceDependencies {
        book_repository,
        review_repository,
        confirmation_queue,
        confirmation_recipient: TEST_RECIPIENT.to_string(),
    }
}

/// インメモリストアの依存関係
pub fn in_memory_deps(notification_service: Arc<NotificationService>) -> ServiceDependencies {
    build_deps(
        Arc::new(InMemoryBookRepository::new()),
        Arc::new(InMemoryReviewRepository::new()),
        notification_service,
    )
}

/// SQLiteストアの依存関係
pub async fn sqlite_deps(notification_service: Arc<NotificationService>) -> ServiceDependencies {
    let pool = create_test_pool().await;
    build_deps(
        Arc::new(SqliteBookRepository::new(pool.clone())),
        Arc::new(SqliteReviewRepository::new(pool)),
        notification_service,
    )
}

/// 確認通知が指定件数に達するまで待つ
///
/// 通知はバックグラウンドで配信されるため、ポーリングで待機する。
pub async fn wait_for_confirmations(
    notification_service: &NotificationService,
    expected: usize,
) -> Vec<SentConfirmation> {
    for _ in 0..200 {
        let sent = notification_service.sent();
        if sent.len() >= expected {
            return sent;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!(
        "Expected {} confirmations, got {:?}",
        expected,
        notification_service.sent()
    );
}
