use crate::common::fixture::{commit_message, object_name, repository};
use objstore::Repository;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeSet;

#[rstest]
fn committed_object_can_be_read_back(mut repository: Repository<String>) {
    repository.add("f1", "A".to_string());
    repository.commit("first");

    let outcome = repository.get("f1");

    assert!(outcome.is_success());
    assert_eq!(outcome.message(), "Found object f1.");
    assert_eq!(outcome.into_payload(), Some("A".to_string()));
}

#[rstest]
fn staged_object_is_not_readable_before_commit(mut repository: Repository<String>) {
    repository.add("f1", "A".to_string());

    let outcome = repository.get("f1");

    assert!(outcome.is_error());
    assert_eq!(outcome.message(), "Object f1 is not committed.");
}

#[rstest]
fn commit_snapshot_is_previous_snapshot_plus_new_names(mut repository: Repository<String>) {
    let first_names = (0..3).map(|_| object_name()).collect::<BTreeSet<_>>();
    for name in &first_names {
        repository.add(name, format!("{name}-v1"));
    }
    repository.commit(&commit_message());

    let second_names = (0..4).map(|_| object_name()).collect::<Vec<_>>();
    for name in &second_names {
        repository.add(name, format!("{name}-v2"));
    }
    let distinct_second = second_names.iter().collect::<BTreeSet<_>>();
    let message = commit_message();

    let outcome = repository.commit(&message);

    assert_eq!(
        outcome.message(),
        format!("{message}\n\t{} objects changed", distinct_second.len())
    );
    let commit = outcome.into_payload().unwrap();
    let tracked = commit.snapshot().keys().collect::<BTreeSet<_>>();
    let expected = first_names
        .iter()
        .chain(second_names.iter())
        .collect::<BTreeSet<_>>();
    assert_eq!(tracked, expected);
}

#[rstest]
fn restaging_an_object_replaces_its_value(mut repository: Repository<String>) {
    repository.add("f1", "draft".to_string());
    repository.add("f1", "final".to_string());

    let outcome = repository.commit("first");

    assert_eq!(outcome.message(), "first\n\t1 objects changed");
    assert_eq!(repository.get("f1").into_payload(), Some("final".to_string()));
}
