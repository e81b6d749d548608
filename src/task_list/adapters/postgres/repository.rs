//! `PostgreSQL` repository implementation for task list storage.

use super::{
    models::{NewTaskListRow, RelationDocument, TaskListRow},
    schema::task_lists,
};
use crate::task_list::{
    domain::{
        PersistedTaskListData, TaskList, TaskListId, TaskListName, TaskListVersion, UserId,
        UserTaskListRelation,
    },
    ports::{Page, TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task list adapters.
pub type TaskListPgPool = Pool<ConnectionManager<PgConnection>>;

/// Idempotent DDL creating the `task_lists` table and its indexes.
pub const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_task_lists/up.sql");

/// `PostgreSQL`-backed task list repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskListRepository {
    pool: TaskListPgPool,
}

impl PostgresTaskListRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskListPgPool) -> Self {
        Self { pool }
    }

    /// Applies [`SCHEMA_SQL`] to the pooled database.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::Persistence`] when a connection
    /// cannot be obtained or the DDL fails.
    pub async fn apply_schema(&self) -> TaskListRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(SCHEMA_SQL)
                .map_err(TaskListRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskListRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskListRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskListRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskListRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskListRepository for PostgresTaskListRepository {
    async fn store(&self, task_list: &TaskList) -> TaskListRepositoryResult<()> {
        let task_list_id = task_list.id().clone();
        let new_row = to_new_row(task_list)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(task_lists::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskListRepositoryError::DuplicateTaskList(task_list_id)
                    }
                    _ => TaskListRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: &TaskListId) -> TaskListRepositoryResult<Option<TaskList>> {
        let lookup_id = id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = task_lists::table
                .filter(task_lists::id.eq(lookup_id))
                .select(TaskListRow::as_select())
                .first::<TaskListRow>(connection)
                .optional()
                .map_err(TaskListRepositoryError::persistence)?;
            row.map(row_to_task_list).transpose()
        })
        .await
    }

    async fn find_by_member(
        &self,
        user_id: &UserId,
        page: Page,
    ) -> TaskListRepositoryResult<Vec<TaskList>> {
        let member = user_id.as_str().to_owned();
        let offset = i64::try_from(page.skip()).map_err(TaskListRepositoryError::persistence)?;
        let limit = i64::try_from(page.take()).map_err(TaskListRepositoryError::persistence)?;

        self.run_blocking(move |connection| {
            let query = diesel::sql_query(concat!(
                "SELECT id, name, owner_id, user_relations, version, created_at ",
                "FROM task_lists ",
                "WHERE owner_id = $1 ",
                "OR user_relations @> jsonb_build_array(jsonb_build_object('userId', $1::text)) ",
                "ORDER BY created_at ASC, id ASC ",
                "OFFSET $2 LIMIT $3",
            ))
            .bind::<diesel::sql_types::Text, _>(member)
            .bind::<diesel::sql_types::BigInt, _>(offset)
            .bind::<diesel::sql_types::BigInt, _>(limit);

            let rows = query
                .load::<TaskListRow>(connection)
                .map_err(TaskListRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task_list).collect()
        })
        .await
    }

    async fn update(&self, task_list: &TaskList) -> TaskListRepositoryResult<TaskListVersion> {
        let task_list_id = task_list.id().clone();
        let expected = task_list.version();
        let next = expected.next();
        let expected_value = version_to_column(expected)?;
        let next_value = version_to_column(next)?;
        let name = task_list.name().as_str().to_owned();
        let relations = relations_to_document(task_list.user_relations())?;

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                task_lists::table
                    .filter(task_lists::id.eq(task_list_id.as_str()))
                    .filter(task_lists::version.eq(expected_value)),
            )
            .set((
                task_lists::name.eq(name),
                task_lists::user_relations.eq(relations),
                task_lists::version.eq(next_value),
            ))
            .execute(connection)
            .map_err(TaskListRepositoryError::persistence)?;

            if affected > 0 {
                return Ok(next);
            }

            let exists = diesel::select(diesel::dsl::exists(
                task_lists::table.filter(task_lists::id.eq(task_list_id.as_str())),
            ))
            .get_result::<bool>(connection)
            .map_err(TaskListRepositoryError::persistence)?;

            if exists {
                Err(TaskListRepositoryError::VersionConflict {
                    id: task_list_id,
                    expected,
                })
            } else {
                Err(TaskListRepositoryError::NotFound(task_list_id))
            }
        })
        .await
    }

    async fn delete(&self, id: &TaskListId) -> TaskListRepositoryResult<()> {
        let task_list_id = id.clone();
        self.run_blocking(move |connection| {
            let affected = diesel::delete(
                task_lists::table.filter(task_lists::id.eq(task_list_id.as_str())),
            )
            .execute(connection)
            .map_err(TaskListRepositoryError::persistence)?;

            if affected == 0 {
                return Err(TaskListRepositoryError::NotFound(task_list_id));
            }
            Ok(())
        })
        .await
    }
}

fn version_to_column(version: TaskListVersion) -> TaskListRepositoryResult<i64> {
    i64::try_from(version.value()).map_err(TaskListRepositoryError::persistence)
}

fn relations_to_document(
    relations: &[UserTaskListRelation],
) -> TaskListRepositoryResult<serde_json::Value> {
    let documents: Vec<RelationDocument> = relations
        .iter()
        .map(|relation| RelationDocument {
            user_id: relation.user_id().as_str().to_owned(),
            date_added: relation.date_added(),
        })
        .collect();
    serde_json::to_value(documents).map_err(TaskListRepositoryError::persistence)
}

pub(crate) fn to_new_row(task_list: &TaskList) -> TaskListRepositoryResult<NewTaskListRow> {
    Ok(NewTaskListRow {
        id: task_list.id().as_str().to_owned(),
        name: task_list.name().as_str().to_owned(),
        owner_id: task_list.owner_id().as_str().to_owned(),
        user_relations: relations_to_document(task_list.user_relations())?,
        version: version_to_column(task_list.version())?,
        created_at: task_list.created_at(),
    })
}

pub(crate) fn row_to_task_list(row: TaskListRow) -> TaskListRepositoryResult<TaskList> {
    let TaskListRow {
        id,
        name,
        owner_id,
        user_relations,
        version,
        created_at,
    } = row;

    let documents = serde_json::from_value::<Vec<RelationDocument>>(user_relations)
        .map_err(TaskListRepositoryError::persistence)?;
    let relations = documents
        .into_iter()
        .map(|document| {
            UserId::new(document.user_id)
                .map(|user_id| UserTaskListRelation::new(user_id, document.date_added))
                .map_err(TaskListRepositoryError::persistence)
        })
        .collect::<TaskListRepositoryResult<Vec<_>>>()?;

    let data = PersistedTaskListData {
        id: TaskListId::parse(id).map_err(TaskListRepositoryError::persistence)?,
        name: TaskListName::new(name).map_err(TaskListRepositoryError::persistence)?,
        owner_id: UserId::new(owner_id).map_err(TaskListRepositoryError::persistence)?,
        user_relations: relations,
        created_at,
        version: TaskListVersion::new(
            u64::try_from(version).map_err(TaskListRepositoryError::persistence)?,
        ),
    };
    Ok(TaskList::from_persisted(data))
}
