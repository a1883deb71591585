//! standup - turns your recent git history into a daily standup report.
//!
//! # Overview
//!
//! standup walks commit history from HEAD back to a target commit, collects
//! each commit's message, author, and first-parent diff, then feeds the
//! aggregated text through a chunking and LLM summarization pipeline to
//! print a grouped-by-author markdown report.

pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use error::{ClaudeError, ConfigError, GitError, LlmError, OllamaError};
pub use git::{collect_logs, open_repository, CommitInfo, LogEntry};
pub use llm::{Provider, Summarizer};
