//! PostgreSQL-backed `QuestionRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;

use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{Question, QuestionDraft, QuestionId, QuestionPatch, QuestionSearch};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewQuestionRow, QuestionRow, QuestionUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::{answers, questions};

/// Diesel-backed implementation of the `QuestionRepository` port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> QuestionRepositoryError {
    map_basic_pool_error(error, QuestionRepositoryError::connection)
}

fn diesel_error_mapper(
    operation: &'static str,
) -> impl Fn(diesel::result::Error) -> QuestionRepositoryError {
    move |error| {
        map_basic_diesel_error(
            error,
            operation,
            QuestionRepositoryError::query,
            QuestionRepositoryError::connection,
        )
    }
}

/// Build an `ILIKE` pattern matching `term` anywhere, with wildcards in the
/// term itself matched literally.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn create(&self, draft: &QuestionDraft) -> Result<Question, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewQuestionRow {
            title: draft.title(),
            description: draft.description(),
            category: draft.category(),
        };

        diesel::insert_into(questions::table)
            .values(&row)
            .returning(QuestionRow::as_returning())
            .get_result::<QuestionRow>(&mut conn)
            .await
            .map(Question::from)
            .map_err(diesel_error_mapper("create question"))
    }

    async fn list(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<QuestionRow> = questions::table
            .select(QuestionRow::as_select())
            .order(questions::id.desc())
            .load(&mut conn)
            .await
            .map_err(diesel_error_mapper("list questions"))?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn search(
        &self,
        search: &QuestionSearch,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = questions::table
            .select(QuestionRow::as_select())
            .order(questions::id.desc())
            .into_boxed();
        if let Some(title) = search.title() {
            query = query.filter(questions::title.ilike(contains_pattern(title)));
        }
        if let Some(category) = search.category() {
            query = query.filter(questions::category.ilike(contains_pattern(category)));
        }

        let rows: Vec<QuestionRow> = query
            .load(&mut conn)
            .await
            .map_err(diesel_error_mapper("search questions"))?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_by_id(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<QuestionRow> = questions::table
            .find(id.get())
            .select(QuestionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error_mapper("find question"))?;

        Ok(row.map(Question::from))
    }

    async fn update(
        &self,
        id: QuestionId,
        patch: &QuestionPatch,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = QuestionUpdate {
            title: patch.title(),
            description: patch.description(),
        };

        let row: Option<QuestionRow> = diesel::update(questions::table.find(id.get()))
            .set(&changes)
            .returning(QuestionRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error_mapper("update question"))?;

        Ok(row.map(Question::from))
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = id.get();

        // Answers first so schemas without ON DELETE CASCADE behave the same.
        let deleted = conn
            .transaction(|conn| {
                async move {
                    diesel::delete(answers::table.filter(answers::question_id.eq(id)))
                        .execute(conn)
                        .await?;
                    diesel::delete(questions::table.find(id))
                        .execute(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error_mapper("delete question"))?;

        Ok(deleted > 0)
    }
}
