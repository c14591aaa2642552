//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use diesel::sql_types::{Int4, Text};

use crate::domain::{Answer, AnswerId, Question, QuestionId};

use super::schema::{answers, questions};

/// Row struct for reading from the questions table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct QuestionRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: QuestionId::new(row.id),
            title: row.title,
            description: row.description,
            category: row.category,
        }
    }
}

/// Insertable struct for creating question records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub(crate) struct NewQuestionRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
}

/// Changeset for partial question updates; `None` fields are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = questions)]
pub(crate) struct QuestionUpdate<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// Row struct for reading from the answers table.
///
/// Also derives `QueryableByName` so raw `INSERT ... RETURNING` statements
/// can load it.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = answers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AnswerRow {
    #[diesel(sql_type = Int4)]
    pub id: i32,
    #[diesel(sql_type = Int4)]
    pub question_id: i32,
    #[diesel(sql_type = Text)]
    pub content: String,
}

impl From<AnswerRow> for Answer {
    fn from(row: AnswerRow) -> Self {
        Self {
            id: AnswerId::new(row.id),
            question_id: QuestionId::new(row.question_id),
            content: row.content,
        }
    }
}
