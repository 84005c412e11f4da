use crate::common::command::run_objstore_exec;
use crate::common::fixture::repository;
use objstore::Repository;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_marks_current_branch_among_sorted_names(mut repository: Repository<String>) {
    repository.branch().create("dev");
    repository.branch().checkout("dev");

    let outcome = repository.branch_manager().list();

    assert!(outcome.is_success());
    assert_eq!(outcome.message(), "* dev\n  master");
}

#[rstest]
fn list_sorts_alphabetically(mut repository: Repository<String>) {
    for name in ["zebra", "alpha", "beta"] {
        repository.branch().create(name);
    }
    repository.branch().checkout("beta");

    let outcome = repository.branch_manager().list();

    assert_eq!(outcome.message(), "  alpha\n* beta\n  master\n  zebra");
}

#[test]
fn list_branches_command() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_objstore_exec(&[
        "branch create feature/login",
        "branch create bugfix/auth",
        "branch checkout feature/login",
        "branch list",
    ])
    .assert()
    .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let listing = stdout.lines().skip(3).collect::<Vec<_>>();
    assert_eq!(listing, vec!["  bugfix/auth", "* feature/login", "  master"]);

    Ok(())
}
