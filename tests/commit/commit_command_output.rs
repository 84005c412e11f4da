use crate::common::command::run_objstore_exec;
use predicates::prelude::*;

#[test]
fn commit_prints_branch_short_id_and_summary() {
    run_objstore_exec(&["add f1 A", "commit first"])
        .assert()
        .success()
        .stdout("Added f1 to stage.\n[master 3998a59] first\n\t1 objects changed\n");
}

#[test]
fn commit_on_new_branch_names_that_branch() {
    run_objstore_exec(&[
        "branch create dev",
        "branch checkout dev",
        "add f1 A",
        "commit first",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("[dev 3998a59] first"));
}

#[test]
fn commit_with_nothing_staged_fails() {
    run_objstore_exec(&["commit empty"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "Nothing to commit, working directory clean.",
        ));
}
