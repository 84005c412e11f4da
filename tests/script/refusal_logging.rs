use crate::common::command::run_objstore_exec;
use predicates::prelude::*;

#[test]
fn refused_operations_are_logged_at_debug_level() {
    run_objstore_exec(&[
        "-k",
        "rm ghost",
        "branch create master",
        "branch checkout nowhere",
        "branch rm master",
        "branch rm nowhere",
        "checkout deadbeef",
    ])
    .env("RUST_LOG", "objstore=debug")
    .assert()
    .failure()
    .stderr(predicate::str::contains("object not committed, removal refused"))
    .stderr(predicate::str::contains("branch exists, create refused"))
    .stderr(predicate::str::contains("unknown branch, switch refused"))
    .stderr(predicate::str::contains("current branch, removal refused"))
    .stderr(predicate::str::contains("unknown branch, removal refused"))
    .stderr(predicate::str::contains("unknown commit, checkout refused"))
    .stderr(predicate::str::contains("6 operation(s) refused"));
}

#[test]
fn refusals_are_not_logged_by_default() {
    run_objstore_exec(&["-k", "branch create master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("create refused").not());
}
