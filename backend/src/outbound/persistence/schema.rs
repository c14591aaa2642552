//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Questions posted by users.
    questions (id) {
        /// Primary key, assigned by a sequence.
        id -> Int4,
        title -> Text,
        description -> Text,
        /// Free-form label; never updated after insert.
        category -> Text,
    }
}

diesel::table! {
    /// Answers belonging to a question.
    answers (id) {
        /// Primary key, assigned by a sequence.
        id -> Int4,
        /// Parent question; deleting the question removes its answers.
        question_id -> Int4,
        /// At most 300 characters, enforced by a check constraint.
        content -> Text,
    }
}

diesel::joinable!(answers -> questions (question_id));
diesel::allow_tables_to_appear_in_same_query!(answers, questions);
