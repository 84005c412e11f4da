use crate::common::command::run_objstore_exec;
use crate::common::fixture::repository;
use objstore::{Repository, StoreError};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case("master")]
#[case("feature-branch")]
fn creating_existing_branch_fails(mut repository: Repository<String>, #[case] branch_name: &str) {
    if branch_name != "master" {
        assert!(repository.branch().create(branch_name).is_success());
    }

    let outcome = repository.branch().create(branch_name);

    assert_eq!(
        outcome.error(),
        Some(&StoreError::BranchExists(branch_name.to_string()))
    );
    assert_eq!(
        outcome.message(),
        format!("Branch {branch_name} already exists.")
    );
}

#[rstest]
fn branch_names_are_case_sensitive(mut repository: Repository<String>) {
    assert!(repository.branch().create("Master").is_success());
    assert_eq!(repository.branch_manager().branch_names().len(), 2);
}

#[test]
fn create_duplicate_branch_command_fails() {
    run_objstore_exec(&["branch create feature-branch", "branch create feature-branch"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Created branch feature-branch."))
        .stderr(predicate::str::contains("already exists"));
}
