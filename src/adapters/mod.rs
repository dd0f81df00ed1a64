pub mod in_memory;
pub mod mock;
pub mod sqlite;
