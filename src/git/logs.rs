//! Commit-history traversal and first-parent diff aggregation.

use chrono::{DateTime, TimeZone, Utc};
use git2::{Commit, Oid, Patch, Repository};
use tracing::warn;

use crate::error::GitError;

/// Default safety cap on the number of commits visited per walk.
pub const DEFAULT_LIMIT: usize = 1000;

/// Owned snapshot of a commit's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub hash: String,
    pub author: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl CommitInfo {
    fn from_commit(commit: &Commit) -> Self {
        let time = commit.time();
        let timestamp = Utc
            .timestamp_opt(time.seconds(), 0)
            .single()
            .unwrap_or_else(Utc::now);

        Self {
            hash: commit.id().to_string(),
            author: commit.author().name().unwrap_or("unknown").to_string(),
            message: commit.message().unwrap_or("").to_string(),
            timestamp,
        }
    }
}

/// One reported commit: metadata plus the patch against its first parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub commit: CommitInfo,
    pub diff_text: String,
}

/// Collect log entries from HEAD back to `target`, newest first.
///
/// Merge commits are skipped entirely (their first-parent diff would
/// double-count changes already reported on mainline) but traversal
/// continues past them. The walk stops after processing the target commit,
/// inclusive. `target` may be a full or abbreviated hash.
///
/// `limit` caps the number of visited commits; hitting the cap before the
/// target emits a warning instead of failing, since a truncated report is
/// still useful. `None` walks to the end of reachable history.
pub fn collect_logs(
    repo: &Repository,
    target: &str,
    limit: Option<usize>,
) -> Result<Vec<LogEntry>, GitError> {
    let target_oid = resolve_target(repo, target)?;

    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push_head().map_err(GitError::RevwalkError)?;
    // Topological order keeps parents after children even when commit
    // timestamps tie, so the stop-at-target check stays inclusive.
    revwalk
        .set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)
        .map_err(GitError::RevwalkError)?;

    let mut entries = Vec::new();
    let mut visited = 0usize;
    let mut reached_target = false;

    for oid_result in revwalk {
        if let Some(cap) = limit {
            if visited >= cap {
                break;
            }
        }
        visited += 1;

        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;

        // Merge commits produce no entry, not an empty-diff entry.
        if commit.parent_count() <= 1 {
            let diff_text = first_parent_patch(repo, &commit)?;
            entries.push(LogEntry {
                commit: CommitInfo::from_commit(&commit),
                diff_text,
            });
        }

        if oid == target_oid {
            reached_target = true;
            break;
        }
    }

    if !reached_target {
        warn!(
            target_commit = %target_oid,
            visited,
            "walk ended before reaching the target commit; the report may be truncated"
        );
    }

    Ok(entries)
}

/// Resolve a full or abbreviated commit hash to the commit it names.
///
/// Lookup failures propagate before any traversal happens, so a typoed
/// hash never degenerates into a full-history walk.
fn resolve_target(repo: &Repository, target: &str) -> Result<Oid, GitError> {
    let obj = repo
        .revparse_single(target)
        .map_err(|e| GitError::TargetNotFound(target.to_string(), e))?;

    let commit = obj
        .peel_to_commit()
        .map_err(|e| GitError::TargetNotFound(target.to_string(), e))?;

    Ok(commit.id())
}

/// Patch text for a commit against its first parent.
///
/// Per-file patch bodies are concatenated in the order git reports them,
/// joined by a single newline. A root commit yields empty text. A patch
/// body that is not valid UTF-8 aborts the whole walk with no partial
/// result, since downstream summarization assumes well-formed text.
fn first_parent_patch(repo: &Repository, commit: &Commit) -> Result<String, GitError> {
    if commit.parent_count() == 0 {
        return Ok(String::new());
    }

    let parent = commit.parent(0).map_err(GitError::ParseCommit)?;
    let parent_tree = parent.tree().map_err(GitError::DiffFailed)?;
    let commit_tree = commit.tree().map_err(GitError::DiffFailed)?;

    let diff = repo
        .diff_tree_to_tree(Some(&parent_tree), Some(&commit_tree), None)
        .map_err(GitError::DiffFailed)?;

    let mut bodies = Vec::new();
    for idx in 0..diff.deltas().len() {
        // Binary deltas carry no patch and are skipped.
        if let Some(mut patch) = Patch::from_diff(&diff, idx).map_err(GitError::DiffFailed)? {
            let buf = patch.to_buf().map_err(GitError::DiffFailed)?;
            let text = buf.as_str().ok_or_else(|| GitError::DiffDecode {
                hash: commit.id().to_string(),
            })?;
            bodies.push(text.to_string());
        }
    }

    Ok(bodies.join("\n"))
}
