//! Shared test utilities for integration tests.
//!
//! Not all helpers are used by every test file.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Create a commit touching test.txt with unique content. Returns the
    /// commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let content = format!(
            "{}\n{}",
            message,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );
        self.commit_file("test.txt", &content, message)
    }

    /// Create a commit writing `content` to `file`. Returns the commit OID.
    pub fn commit_file(&self, file: &str, content: &str, message: &str) -> Oid {
        self.commit_file_bytes(file, content.as_bytes(), message)
    }

    /// Create a commit writing raw bytes to `file`. Returns the commit OID.
    pub fn commit_file_bytes(&self, file: &str, content: &[u8], message: &str) -> Oid {
        let sig = self.signature();

        std::fs::write(self.dir.path().join(file), content).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(file)).expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a commit with an explicit parent, without moving HEAD.
    /// Simulates work on a side branch. Returns the commit OID.
    pub fn commit_detached(&self, message: &str, parent: Oid, file: &str, content: &str) -> Oid {
        let sig = self.signature();

        std::fs::write(self.dir.path().join(file), content).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(file)).expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent_commit = self.repo.find_commit(parent).expect("Failed to find parent");

        self.repo
            .commit(None, &sig, &sig, message, &tree, &[&parent_commit])
            .expect("Failed to create detached commit")
    }

    /// Create a merge commit with two parents and move HEAD to it.
    /// Returns the merge OID.
    pub fn merge_commit(&self, message: &str, first: Oid, second: Oid) -> Oid {
        let sig = self.signature();

        let first_commit = self.repo.find_commit(first).expect("Failed to find first parent");
        let second_commit = self
            .repo
            .find_commit(second)
            .expect("Failed to find second parent");
        let tree = first_commit.tree().expect("Failed to read tree");

        self.repo
            .commit(
                Some("HEAD"),
                &sig,
                &sig,
                message,
                &tree,
                &[&first_commit, &second_commit],
            )
            .expect("Failed to create merge commit")
    }
}
