use crate::common::COMMIT_DATE;
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use objstore::{Clock, Repository};
use rstest::fixture;

/// Empty repository with a pinned commit clock
#[fixture]
pub fn repository() -> Repository<String> {
    Repository::init(Some(|repository: &mut Repository<String>| {
        repository.set_clock(Clock::parse_fixed(COMMIT_DATE).expect("valid commit date"));
    }))
}

/// Repository with three commits on master: first (f1), second (f2), third (f3)
#[fixture]
pub fn repository_with_history(mut repository: Repository<String>) -> Repository<String> {
    for (message, name) in [("first", "f1"), ("second", "f2"), ("third", "f3")] {
        repository.add(name, format!("{name}-content"));
        assert!(repository.commit(message).is_success());
    }

    repository
}

/// Random object name
pub fn object_name() -> String {
    format!("{}.txt", Word().fake::<String>())
}

/// Random multi-word commit message
pub fn commit_message() -> String {
    Words(3..6).fake::<Vec<String>>().join(" ")
}
