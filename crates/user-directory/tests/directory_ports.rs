//! Integration tests exercising the directory through its public ports.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use rstest::{fixture, rstest};
use user_directory::{
    DirectoryError, SharedUserDirectory, User, UserDirectory, UserId, UsersCommand, UsersQuery,
};

/// Consumer that only sees the read port.
fn emails(query: &dyn UsersQuery) -> Result<Vec<String>, DirectoryError> {
    Ok(query
        .find_all()?
        .iter()
        .map(|user| user.email().to_owned())
        .collect())
}

#[fixture]
fn shared() -> SharedUserDirectory {
    SharedUserDirectory::from(UserDirectory::new())
}

#[rstest]
fn scenario_listing_has_two_seed_users(shared: SharedUserDirectory) {
    assert_eq!(shared.find_all().expect("listing").len(), 2);
}

#[rstest]
fn scenario_first_seed_user_is_found(shared: SharedUserDirectory) {
    let user = shared
        .find_by_id(UserId::new(1))
        .expect("lookup")
        .expect("seed user present");

    assert_eq!(user.id(), UserId::new(1));
    assert_eq!(user.email(), "john.doe@example.com");
}

#[rstest]
fn scenario_missing_user_is_absent(shared: SharedUserDirectory) {
    assert_eq!(shared.find_by_id(UserId::new(999)).expect("lookup"), None);
}

#[rstest]
fn scenario_created_user_is_listed(shared: SharedUserDirectory) {
    let created = shared
        .create_user("test@example.com", "Test User")
        .expect("create");

    assert_eq!(created.email(), "test@example.com");
    assert_eq!(shared.find_all().expect("listing").len(), 3);
}

#[rstest]
fn read_port_consumers_see_insertion_order(shared: SharedUserDirectory) {
    shared
        .create_user("later@example.com", "Later")
        .expect("create");

    assert_eq!(
        emails(&shared).expect("emails"),
        vec![
            "john.doe@example.com".to_owned(),
            "jane.smith@example.com".to_owned(),
            "later@example.com".to_owned(),
        ]
    );
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(40)]
fn each_creation_adds_exactly_one_record(shared: SharedUserDirectory, #[case] creations: usize) {
    for index in 0..creations {
        let before = shared.find_all().expect("listing").len();
        shared
            .create_user(&format!("u{index}@example.com"), "Someone")
            .expect("create");
        assert_eq!(shared.find_all().expect("listing").len(), before + 1);
    }

    let all = shared.find_all().expect("listing");
    let ids: HashSet<UserId> = all.iter().map(User::id).collect();
    assert_eq!(ids.len(), all.len());
}

#[rstest]
fn snapshot_is_detached_from_later_writes(shared: SharedUserDirectory) {
    let snapshot = shared.snapshot().expect("snapshot");
    shared
        .create_user("after@example.com", "After")
        .expect("create");

    assert_eq!(snapshot.len(), 2);
    assert_eq!(shared.snapshot().expect("snapshot").len(), 3);
}
