use crate::common::command::run_objstore_exec;
use predicates::prelude::*;

#[test]
fn keep_going_reports_every_refusal() {
    run_objstore_exec(&["-k", "get f1", "add f1 A", "branch rm master", "commit first"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[master 3998a59] first"))
        .stderr(predicate::str::contains("Object f1 is not committed."))
        .stderr(predicate::str::contains("Cannot remove current branch."))
        .stderr(predicate::str::contains("2 operation(s) refused"));
}

#[test]
fn without_keep_going_first_refusal_stops_the_run() {
    run_objstore_exec(&["get f1", "add f1 A"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("line 1: get f1"));
}
