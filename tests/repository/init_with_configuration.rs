use crate::common::FIRST_ID;
use objstore::{Clock, Repository};
use pretty_assertions::assert_eq;

#[test]
fn init_without_configuration_starts_on_master() {
    let repository = Repository::<String>::init(None::<fn(&mut Repository<String>)>);

    let list = repository.branch_manager().list();

    assert_eq!(list.message(), "* master");
    assert!(repository.log().is_error());
}

#[test]
fn init_applies_configuration_before_returning() {
    let repository = Repository::<&str>::init(Some(|repository: &mut Repository<&str>| {
        repository.set_clock(Clock::parse_fixed("Thu, 01 Jan 2026 00:00:00 +0000").unwrap());
        repository.add("f1", "A");
        repository.commit("first");
    }));

    let head = repository.head().into_payload().unwrap();

    assert_eq!(head.id().as_ref(), FIRST_ID);
    assert_eq!(head.message(), "first");
    assert_eq!(repository.get("f1").into_payload(), Some("A"));
}
