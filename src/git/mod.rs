//! Git operations using git2-rs.

pub mod logs;
pub mod repo;

pub use logs::{collect_logs, CommitInfo, LogEntry, DEFAULT_LIMIT};
pub use repo::{has_repository, open_repository};
