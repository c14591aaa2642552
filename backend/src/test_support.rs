//! Test utilities for the backend crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`; compiled
//! for tests and behind the `test-support` feature.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{
    AnswerRepository, AnswerRepositoryError, ConnectivityProbe, ConnectivityProbeError,
    QuestionRepository, QuestionRepositoryError,
};
use crate::domain::{
    Answer, AnswerContent, AnswerId, Question, QuestionDraft, QuestionId, QuestionPatch,
    QuestionSearch,
};

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<i32, Question>,
    answers: BTreeMap<i32, Answer>,
    last_question_id: i32,
    last_answer_id: i32,
}

/// In-memory store implementing every persistence port.
///
/// Identifiers are assigned sequentially from 1, mirroring `SERIAL` columns.
/// Listing order and cascade rules match the PostgreSQL adapters.
///
/// # Examples
/// ```
/// use backend::test_support::InMemoryQnaStore;
///
/// let store = InMemoryQnaStore::default();
/// let question = store.insert_question("Title", "Body", "rust");
/// assert_eq!(question.id.get(), 1);
/// assert!(store.answers_for(question.id).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryQnaStore {
    tables: Mutex<Tables>,
}

impl InMemoryQnaStore {
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed a question directly.
    pub fn insert_question(&self, title: &str, description: &str, category: &str) -> Question {
        let mut tables = self.lock();
        tables.last_question_id += 1;
        let question = Question {
            id: QuestionId::new(tables.last_question_id),
            title: title.to_owned(),
            description: description.to_owned(),
            category: category.to_owned(),
        };
        tables
            .questions
            .insert(question.id.get(), question.clone());
        question
    }

    /// Seed an answer directly, without checking the parent.
    pub fn insert_answer(&self, question_id: QuestionId, content: &str) -> Answer {
        let mut tables = self.lock();
        tables.last_answer_id += 1;
        let answer = Answer {
            id: AnswerId::new(tables.last_answer_id),
            question_id,
            content: content.to_owned(),
        };
        tables.answers.insert(answer.id.get(), answer.clone());
        answer
    }

    /// Stored question, if any.
    pub fn question(&self, id: QuestionId) -> Option<Question> {
        self.lock().questions.get(&id.get()).cloned()
    }

    /// Number of stored questions.
    pub fn question_count(&self) -> usize {
        self.lock().questions.len()
    }

    /// Answers of `question_id` in insertion order.
    pub fn answers_for(&self, question_id: QuestionId) -> Vec<Answer> {
        self.lock()
            .answers
            .values()
            .filter(|answer| answer.question_id == question_id)
            .cloned()
            .collect()
    }
}

fn newest_first<T>(mut items: Vec<T>) -> Vec<T> {
    items.reverse();
    items
}

#[async_trait]
impl QuestionRepository for InMemoryQnaStore {
    async fn create(&self, draft: &QuestionDraft) -> Result<Question, QuestionRepositoryError> {
        Ok(self.insert_question(draft.title(), draft.description(), draft.category()))
    }

    async fn list(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(newest_first(self.lock().questions.values().cloned().collect()))
    }

    async fn search(
        &self,
        search: &QuestionSearch,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(newest_first(
            self.lock()
                .questions
                .values()
                .filter(|question| search.matches(question))
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_id(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        Ok(self.question(id))
    }

    async fn update(
        &self,
        id: QuestionId,
        patch: &QuestionPatch,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        let mut tables = self.lock();
        Ok(tables.questions.get_mut(&id.get()).map(|question| {
            patch.apply_to(question);
            question.clone()
        }))
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut tables = self.lock();
        tables.answers.retain(|_, answer| answer.question_id != id);
        Ok(tables.questions.remove(&id.get()).is_some())
    }
}

#[async_trait]
impl AnswerRepository for InMemoryQnaStore {
    async fn create(
        &self,
        question_id: QuestionId,
        content: &AnswerContent,
    ) -> Result<Answer, AnswerRepositoryError> {
        if self.question(question_id).is_none() {
            return Err(AnswerRepositoryError::question_not_found(question_id.get()));
        }
        Ok(self.insert_answer(question_id, content.as_str()))
    }

    async fn list_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Answer>, AnswerRepositoryError> {
        if self.question(question_id).is_none() {
            return Err(AnswerRepositoryError::question_not_found(question_id.get()));
        }
        Ok(newest_first(self.answers_for(question_id)))
    }

    async fn delete_all_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<usize, AnswerRepositoryError> {
        let mut tables = self.lock();
        if !tables.questions.contains_key(&question_id.get()) {
            return Err(AnswerRepositoryError::question_not_found(question_id.get()));
        }
        let before = tables.answers.len();
        tables
            .answers
            .retain(|_, answer| answer.question_id != question_id);
        Ok(before - tables.answers.len())
    }
}

#[async_trait]
impl ConnectivityProbe for InMemoryQnaStore {
    async fn server_time(&self) -> Result<DateTime<Utc>, ConnectivityProbeError> {
        Ok(Utc::now())
    }
}
