//! Repository discovery.

use std::path::Path;

use git2::{ErrorCode, Repository};

use crate::error::GitError;

/// Open the repository enclosing `path`, searching upward through parent
/// directories. Defaults to the current directory.
///
/// The check is eager: a missing repository is reported here, before any
/// traversal starts. A bare repository is rejected the same way since it
/// has no working tree to report on.
pub fn open_repository(path: Option<&Path>) -> Result<Repository, GitError> {
    let start = path.unwrap_or(Path::new("."));

    let repo = Repository::discover(start).map_err(|e| {
        if e.code() == ErrorCode::NotFound {
            GitError::RepositoryNotFound {
                path: start.to_path_buf(),
            }
        } else {
            GitError::OpenRepository(e)
        }
    })?;

    if !has_repository(&repo) {
        return Err(GitError::RepositoryNotFound {
            path: start.to_path_buf(),
        });
    }

    Ok(repo)
}

/// Whether the handle points at a repository with a working tree.
pub fn has_repository(repo: &Repository) -> bool {
    !repo.is_bare()
}
