use crate::common::command::run_objstore_exec;
use crate::common::fixture::{repository, repository_with_history};
use objstore::{Repository, StoreError};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("deadbeef")]
#[case("3998a59")]
#[case("")]
fn unknown_hash_leaves_history_unchanged(
    mut repository_with_history: Repository<String>,
    #[case] hash: &str,
) {
    let repository = &mut repository_with_history;
    let before = repository.branch_manager().current_branch().clone();

    let outcome = repository.checkout(hash);

    assert_eq!(
        outcome.error(),
        Some(&StoreError::CommitNotFound(hash.to_string()))
    );
    assert_eq!(outcome.message(), format!("Commit {hash} does not exist."));
    assert_eq!(repository.branch_manager().current_branch(), &before);
}

#[rstest]
fn checkout_on_empty_branch_fails(mut repository: Repository<String>) {
    let outcome = repository.checkout("deadbeef");

    assert!(outcome.is_error());
    assert!(repository.branch_manager().current_branch().is_empty());
}

#[test]
fn checkout_unknown_hash_command_fails() {
    run_objstore_exec(&["add f1 A", "commit first", "checkout deadbeef", "get f1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("A\n").not())
        .stderr(predicate::str::contains("Commit deadbeef does not exist."));
}
