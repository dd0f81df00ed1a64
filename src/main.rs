use book_review_catalog::{
    adapters::{
        in_memory::{InMemoryBookRepository, InMemoryReviewRepository},
        mock::NotificationService as MockNotificationService,
        sqlite::{self, SqliteBookRepository, SqliteReviewRepository},
    },
    api::{handlers::AppState, router::create_router},
    application::catalog::{ServiceDependencies, spawn_confirmation_worker},
    config::{Config, StorageBackend},
    ports::{BookRepository, ReviewRepository},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "book_review_catalog=debug,tower_http=debug,axum=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Initialize adapters
    let (book_repository, review_repository) = match &config.storage {
        StorageBackend::InMemory => {
            tracing::info!("Using in-memory storage");
            (
                Arc::new(InMemoryBookRepository::new()) as Arc<dyn BookRepository>,
                Arc::new(InMemoryReviewRepository::new()) as Arc<dyn ReviewRepository>,
            )
        }
        StorageBackend::Sqlite { database_url } => {
            let pool = sqlite::connect(database_url).await?;
            (
                Arc::new(SqliteBookRepository::new(pool.clone())) as Arc<dyn BookRepository>,
                Arc::new(SqliteReviewRepository::new(pool)) as Arc<dyn ReviewRepository>,
            )
        }
    };

    // 確認通知ワーカーを起動
    let notification_service = Arc::new(MockNotificationService::new());
    let (confirmation_queue, confirmation_worker) = spawn_confirmation_worker(notification_service);

    // Create service dependencies
    let service_deps = ServiceDependencies {
        book_repository,
        review_repository,
        confirmation_queue,
        confirmation_recipient: config.confirmation_recipient.clone(),
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // ルーターが破棄されるとキューが閉じ、ワーカーは残りを配信して終了する
    let stats = confirmation_worker.await?;
    tracing::info!(
        delivered = stats.delivered,
        failed = stats.failed,
        "Server stopped"
    );

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
