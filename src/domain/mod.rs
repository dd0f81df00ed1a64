pub mod book;
pub mod commands;
pub mod errors;
pub mod review;
pub mod value_objects;

pub use book::*;
pub use errors::*;
pub use review::*;
pub use value_objects::*;
