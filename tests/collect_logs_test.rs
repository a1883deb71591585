//! Integration tests for collect_logs using temporary git repositories.

mod common;

use std::collections::HashSet;

use common::TestRepo;
use standup::error::GitError;
use standup::git::collect_logs;

// =============================================================================
// LINEAR HISTORY
// =============================================================================

#[test]
fn test_linear_history_returns_inclusive_range() {
    let test_repo = TestRepo::new();

    let _d = test_repo.commit("chore: scaffolding");
    let c = test_repo.commit("feat: add parser");
    let b = test_repo.commit("fix: handle empty input");
    let a = test_repo.commit("feat: add reporting");

    let entries = collect_logs(&test_repo.repo, &c.to_string(), None).expect("collect_logs failed");

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].commit.hash, a.to_string());
    assert_eq!(entries[1].commit.hash, b.to_string());
    assert_eq!(entries[2].commit.hash, c.to_string());
}

#[test]
fn test_entries_carry_commit_metadata() {
    let test_repo = TestRepo::new();

    let c1 = test_repo.commit("feat: first");
    let entries = collect_logs(&test_repo.repo, &c1.to_string(), None).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].commit.author, "Test User");
    assert!(entries[0].commit.message.contains("feat: first"));
}

#[test]
fn test_diff_text_matches_each_commits_change() {
    let test_repo = TestRepo::new();

    let c1 = test_repo.commit_file("notes.txt", "alpha change\n", "feat: alpha");
    let c2 = test_repo.commit_file("notes.txt", "beta change\n", "feat: beta");

    let entries = collect_logs(&test_repo.repo, &c1.to_string(), None).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].commit.hash, c2.to_string());

    // Newest entry: alpha replaced by beta.
    assert!(entries[0].diff_text.contains("+beta change"));
    assert!(entries[0].diff_text.contains("-alpha change"));

    // Root entry has no parent, so no diff text at all.
    assert_eq!(entries[1].diff_text, "");
}

#[test]
fn test_root_commit_has_empty_diff() {
    let test_repo = TestRepo::new();

    let root = test_repo.commit("feat: initial commit");
    let entries = collect_logs(&test_repo.repo, &root.to_string(), None).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].diff_text, "");
}

#[test]
fn test_non_root_diffs_contain_patch_headers() {
    let test_repo = TestRepo::new();

    let c1 = test_repo.commit_file("lib.rs", "fn a() {}\n", "feat: a");
    let _c2 = test_repo.commit_file("lib.rs", "fn a() {}\nfn b() {}\n", "feat: b");

    let entries = collect_logs(&test_repo.repo, &c1.to_string(), None).unwrap();

    assert!(entries[0].diff_text.contains("lib.rs"));
    assert!(entries[0].diff_text.contains("+fn b() {}"));
}

// =============================================================================
// MERGE COMMITS
// =============================================================================

#[test]
fn test_merge_commits_are_skipped_but_walk_continues() {
    let test_repo = TestRepo::new();

    let base = test_repo.commit("feat: base");
    let main = test_repo.commit("feat: main work");
    let side = test_repo.commit_detached("feat: side work", base, "side.txt", "side content\n");
    let merge = test_repo.merge_commit("Merge side into main", main, side);
    let after = test_repo.commit("feat: after merge");

    let entries = collect_logs(&test_repo.repo, &base.to_string(), None).unwrap();

    let hashes: Vec<&str> = entries.iter().map(|e| e.commit.hash.as_str()).collect();

    // The merge produced no entry at all, not an empty-diff entry.
    assert!(!hashes.contains(&merge.to_string().as_str()));

    // Both sides of the merge and the commits around it are present.
    assert!(hashes.contains(&after.to_string().as_str()));
    assert!(hashes.contains(&main.to_string().as_str()));
    assert!(hashes.contains(&side.to_string().as_str()));
    assert_eq!(entries.first().unwrap().commit.hash, after.to_string());
    assert_eq!(entries.last().unwrap().commit.hash, base.to_string());
    assert_eq!(entries.len(), 4);
}

#[test]
fn test_no_commit_appears_twice() {
    let test_repo = TestRepo::new();

    let base = test_repo.commit("feat: base");
    let main = test_repo.commit("feat: main work");
    let side = test_repo.commit_detached("feat: side work", base, "side.txt", "side content\n");
    test_repo.merge_commit("Merge side into main", main, side);

    let entries = collect_logs(&test_repo.repo, &base.to_string(), None).unwrap();

    let unique: HashSet<&str> = entries.iter().map(|e| e.commit.hash.as_str()).collect();
    assert_eq!(unique.len(), entries.len());
}

// =============================================================================
// TARGET RESOLUTION AND THE SAFETY CAP
// =============================================================================

#[test]
fn test_abbreviated_target_hash_resolves() {
    let test_repo = TestRepo::new();

    let c1 = test_repo.commit("feat: first");
    let _c2 = test_repo.commit("feat: second");

    let full = c1.to_string();
    let entries = collect_logs(&test_repo.repo, &full[..7], None).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries.last().unwrap().commit.hash, full);
}

#[test]
fn test_unknown_target_is_an_error_before_walking() {
    let test_repo = TestRepo::new();
    test_repo.commit("feat: only commit");

    let result = collect_logs(&test_repo.repo, "deadbeefdeadbeefdeadbeefdeadbeefdeadbeef", None);
    assert!(matches!(result, Err(GitError::TargetNotFound(_, _))));
}

#[test]
fn test_cap_stops_walk_before_target() {
    let test_repo = TestRepo::new();

    let oldest = test_repo.commit("feat: oldest");
    for n in 0..5 {
        test_repo.commit(&format!("feat: change {n}"));
    }

    let entries = collect_logs(&test_repo.repo, &oldest.to_string(), Some(3)).unwrap();

    assert_eq!(entries.len(), 3);
    assert!(entries
        .iter()
        .all(|e| e.commit.hash != oldest.to_string()));
}

#[test]
fn test_unbounded_walk_reaches_old_target() {
    let test_repo = TestRepo::new();

    let oldest = test_repo.commit("feat: oldest");
    for n in 0..5 {
        test_repo.commit(&format!("feat: change {n}"));
    }

    let entries = collect_logs(&test_repo.repo, &oldest.to_string(), None).unwrap();

    assert_eq!(entries.len(), 6);
    assert_eq!(entries.last().unwrap().commit.hash, oldest.to_string());
}

#[test]
fn test_cap_larger_than_history_is_harmless() {
    let test_repo = TestRepo::new();

    let c1 = test_repo.commit("feat: first");
    test_repo.commit("feat: second");

    let entries = collect_logs(&test_repo.repo, &c1.to_string(), Some(1000)).unwrap();
    assert_eq!(entries.len(), 2);
}

// =============================================================================
// IDEMPOTENCE AND ATOMICITY
// =============================================================================

#[test]
fn test_idempotent_against_unchanged_repository() {
    let test_repo = TestRepo::new();

    let c1 = test_repo.commit_file("a.txt", "one\n", "feat: one");
    test_repo.commit_file("a.txt", "two\n", "feat: two");
    test_repo.commit_file("b.txt", "three\n", "feat: three");

    let first = collect_logs(&test_repo.repo, &c1.to_string(), None).unwrap();
    let second = collect_logs(&test_repo.repo, &c1.to_string(), None).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_non_utf8_diff_aborts_with_no_partial_result() {
    let test_repo = TestRepo::new();

    let good = test_repo.commit_file("a.txt", "fine\n", "feat: fine");
    // Latin-1 bytes without a NUL: git treats the file as text, but the
    // patch body is not valid UTF-8.
    test_repo.commit_file_bytes("menu.txt", b"caf\xe9 latte\n", "feat: menu");
    test_repo.commit_file("a.txt", "still fine\n", "feat: still fine");

    let result = collect_logs(&test_repo.repo, &good.to_string(), None);

    assert!(matches!(result, Err(GitError::DiffDecode { .. })));
}
