pub mod book_repository;
pub mod notification_service;
pub mod review_repository;

pub use book_repository::BookRepository;
pub use notification_service::NotificationService;
pub use review_repository::ReviewRepository;
