//! Contract tests for the in-memory task list repository.

use super::fixtures::{persisted_list, user};
use crate::task_list::{
    adapters::memory::InMemoryTaskListRepository,
    domain::{TaskListId, TaskListName, TaskListVersion},
    ports::{Page, TaskListRepository, TaskListRepositoryError},
};
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTaskListRepository {
    InMemoryTaskListRepository::new()
}

fn ids(task_lists: &[crate::task_list::domain::TaskList]) -> Vec<&str> {
    task_lists.iter().map(|list| list.id().as_str()).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_then_find_by_id_round_trips(repository: InMemoryTaskListRepository) {
    let task_list = persisted_list("list-1", "u1", &["u2"], 0);
    repository.store(&task_list).await.expect("store should succeed");

    let found = repository
        .find_by_id(task_list.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(found, Some(task_list));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_duplicate_identifier(repository: InMemoryTaskListRepository) {
    let task_list = persisted_list("list-1", "u1", &[], 0);
    repository.store(&task_list).await.expect("store should succeed");

    let result = repository.store(&task_list).await;
    assert!(matches!(
        result,
        Err(TaskListRepositoryError::DuplicateTaskList(ref id)) if id.as_str() == "list-1"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_when_missing(repository: InMemoryTaskListRepository) {
    let missing = TaskListId::parse("nope").expect("valid id");
    let found = repository.find_by_id(&missing).await.expect("lookup should succeed");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_member_matches_owner_or_relation_and_pages(
    repository: InMemoryTaskListRepository,
) {
    for task_list in [
        persisted_list("a", "u1", &[], 0),
        persisted_list("b", "u2", &["u1"], 1),
        persisted_list("c", "u2", &["u3"], 2),
        persisted_list("d", "u1", &["u2"], 3),
    ] {
        repository.store(&task_list).await.expect("store should succeed");
    }

    let everything = repository
        .find_by_member(&user("u1"), Page::new(0, 10))
        .await
        .expect("query should succeed");
    assert_eq!(ids(&everything), vec!["a", "b", "d"]);

    let second_page = repository
        .find_by_member(&user("u1"), Page::new(1, 1))
        .await
        .expect("query should succeed");
    assert_eq!(ids(&second_page), vec!["b"]);

    let past_end = repository
        .find_by_member(&user("u1"), Page::new(5, 10))
        .await
        .expect("query should succeed");
    assert!(past_end.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_document_and_bumps_version(repository: InMemoryTaskListRepository) {
    let mut task_list = persisted_list("list-1", "u1", &[], 0);
    repository.store(&task_list).await.expect("store should succeed");

    task_list.rename(TaskListName::new("Renamed").expect("valid name"));
    let version = repository.update(&task_list).await.expect("update should succeed");
    assert_eq!(version, TaskListVersion::new(2));

    let stored = repository
        .find_by_id(task_list.id())
        .await
        .expect("lookup should succeed")
        .expect("list should exist");
    assert_eq!(stored.name().as_str(), "Renamed");
    assert_eq!(stored.version(), TaskListVersion::new(2));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_stale_version_is_rejected(repository: InMemoryTaskListRepository) {
    let original = persisted_list("list-1", "u1", &[], 0);
    repository.store(&original).await.expect("store should succeed");

    let mut first_writer = original.clone();
    first_writer.rename(TaskListName::new("First").expect("valid name"));
    repository.update(&first_writer).await.expect("first update should succeed");

    let mut second_writer = original;
    second_writer.rename(TaskListName::new("Second").expect("valid name"));
    let result = repository.update(&second_writer).await;
    assert!(matches!(
        result,
        Err(TaskListRepositoryError::VersionConflict { expected, .. })
            if expected == TaskListVersion::INITIAL
    ));

    let stored = repository
        .find_by_id(second_writer.id())
        .await
        .expect("lookup should succeed")
        .expect("list should exist");
    assert_eq!(stored.name().as_str(), "First");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_report_missing_lists(repository: InMemoryTaskListRepository) {
    let task_list = persisted_list("ghost", "u1", &[], 0);

    assert!(matches!(
        repository.update(&task_list).await,
        Err(TaskListRepositoryError::NotFound(_))
    ));
    assert!(matches!(
        repository.delete(task_list.id()).await,
        Err(TaskListRepositoryError::NotFound(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_list(repository: InMemoryTaskListRepository) {
    let task_list = persisted_list("list-1", "u1", &[], 0);
    repository.store(&task_list).await.expect("store should succeed");

    repository.delete(task_list.id()).await.expect("delete should succeed");

    let found = repository
        .find_by_id(task_list.id())
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}
