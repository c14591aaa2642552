//! PostgreSQL-backed `AnswerRepository` implementation using Diesel ORM.
//!
//! The parent-existence check and the dependent statement never run as two
//! independent round trips. Inserts use a single `INSERT ... SELECT` guarded
//! by the parent row; reads and bulk deletes lock the parent with
//! `FOR SHARE` inside a transaction so a concurrent question delete cannot
//! interleave.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{Int4, Text};
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use tracing::debug;

use crate::domain::ports::{AnswerRepository, AnswerRepositoryError};
use crate::domain::{Answer, AnswerContent, QuestionId};

use super::diesel_basic_error_mapping::{
    is_foreign_key_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::AnswerRow;
use super::pool::{DbPool, PoolError};
use super::schema::{answers, questions};

const INSERT_ANSWER_SQL: &str = "INSERT INTO answers (question_id, content) \
     SELECT id, $2 FROM questions WHERE id = $1 FOR SHARE \
     RETURNING id, question_id, content";

/// Diesel-backed implementation of the `AnswerRepository` port.
#[derive(Clone)]
pub struct DieselAnswerRepository {
    pool: DbPool,
}

impl DieselAnswerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AnswerRepositoryError {
    map_basic_pool_error(error, AnswerRepositoryError::connection)
}

fn diesel_error_mapper(
    operation: &'static str,
) -> impl Fn(diesel::result::Error) -> AnswerRepositoryError {
    move |error| {
        map_basic_diesel_error(
            error,
            operation,
            AnswerRepositoryError::query,
            AnswerRepositoryError::connection,
        )
    }
}

/// Lock the parent question for the rest of the transaction.
///
/// Returns `false` when it does not exist.
async fn lock_question(
    conn: &mut diesel_async::AsyncPgConnection,
    question_id: i32,
) -> QueryResult<bool> {
    let found: Option<i32> = questions::table
        .find(question_id)
        .select(questions::id)
        .for_share()
        .first(conn)
        .await
        .optional()?;
    Ok(found.is_some())
}

#[async_trait]
impl AnswerRepository for DieselAnswerRepository {
    async fn create(
        &self,
        question_id: QuestionId,
        content: &AnswerContent,
    ) -> Result<Answer, AnswerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted: Option<AnswerRow> = sql_query(INSERT_ANSWER_SQL)
            .bind::<Int4, _>(question_id.get())
            .bind::<Text, _>(content.as_str())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|error| {
                if is_foreign_key_violation(&error) {
                    debug!(%question_id, "answer insert raced a question delete");
                    AnswerRepositoryError::question_not_found(question_id.get())
                } else {
                    diesel_error_mapper("create answer")(error)
                }
            })?;

        inserted
            .map(Answer::from)
            .ok_or_else(|| AnswerRepositoryError::question_not_found(question_id.get()))
    }

    async fn list_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Answer>, AnswerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = question_id.get();

        let rows = conn
            .transaction(|conn| {
                async move {
                    if !lock_question(conn, id).await? {
                        return Ok(None);
                    }
                    answers::table
                        .filter(answers::question_id.eq(id))
                        .select(AnswerRow::as_select())
                        .order(answers::id.desc())
                        .load::<AnswerRow>(conn)
                        .await
                        .map(Some)
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error_mapper("list answers"))?
            .ok_or_else(|| AnswerRepositoryError::question_not_found(id))?;

        Ok(rows.into_iter().map(Answer::from).collect())
    }

    async fn delete_all_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<usize, AnswerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = question_id.get();

        conn.transaction(|conn| {
            async move {
                if !lock_question(conn, id).await? {
                    return Ok(None);
                }
                diesel::delete(answers::table.filter(answers::question_id.eq(id)))
                    .execute(conn)
                    .await
                    .map(Some)
            }
            .scope_boxed()
        })
        .await
        .map_err(diesel_error_mapper("delete answers"))?
        .ok_or_else(|| AnswerRepositoryError::question_not_found(id))
    }
}
