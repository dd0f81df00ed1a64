mod catalog_service;
mod confirmation;
mod errors;
mod review_service;

pub use catalog_service::{
    ServiceDependencies, add_book, delete_book, get_book, list_books, update_book,
};
pub use confirmation::{
    ConfirmationQueue, ReviewConfirmation, WorkerStats, spawn_confirmation_worker,
};
pub use errors::{CatalogApplicationError, Result};
pub use review_service::{list_reviews, submit_review};
