pub mod add;
pub mod backup;
pub mod del;
pub mod edit;
pub mod editor;
pub mod list;
pub mod log;
pub mod report;
pub mod scheduler;

pub use editor::RecordInput;
