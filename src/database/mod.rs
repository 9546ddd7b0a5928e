pub mod app_state;
pub mod storage;

pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage};
