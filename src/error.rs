//! Error types for standup modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("No git repository found at '{}' or any parent directory", path.display())]
    RepositoryNotFound { path: PathBuf },

    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Target commit '{0}' not found in this repository: {1}")]
    TargetNotFound(String, #[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to compute diff: {0}")]
    DiffFailed(#[source] git2::Error),

    #[error("Commit {hash} has a diff that is not valid UTF-8")]
    DiffDecode { hash: String },
}

/// Errors from configuration loading and saving.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine the platform configuration directory")]
    NoConfigDir,

    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write config file: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseFailed(#[source] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    SerializeFailed(#[source] toml::ser::Error),

    #[error("chunk_overlap ({chunk_overlap}) must be smaller than chunk_size ({chunk_size})")]
    InvalidChunking {
        chunk_size: usize,
        chunk_overlap: usize,
    },
}

/// Errors from Claude CLI operations.
#[derive(Error, Debug)]
pub enum ClaudeError {
    #[error("Claude Code CLI not found. Install with: npm install -g @anthropic-ai/claude-code")]
    NotInstalled,

    #[error("Claude Code CLI failed to execute: {0}")]
    ExecutionFailed(String),

    #[error("Failed to spawn Claude process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("Claude process timed out after {0} seconds")]
    Timeout(u64),

    #[error("Claude CLI exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
}

/// Errors from the Ollama HTTP backend.
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to Ollama failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("Ollama returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Ollama returned an empty response")]
    EmptyResponse,
}

/// Errors from the summarization pipeline, regardless of backend.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error(transparent)]
    Claude(#[from] ClaudeError),

    #[error(transparent)]
    Ollama(#[from] OllamaError),

    #[error("All retry attempts failed: {0}")]
    RetriesExhausted(#[source] Box<LlmError>),
}
