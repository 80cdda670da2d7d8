pub mod initialize;
pub mod log;
pub mod models;
pub mod pool;
pub mod queries;
pub mod stats;

pub use models::{RecordFields, StringerCount, StringingRecord};
pub use pool::DbPool;
