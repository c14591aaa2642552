//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AnswerRepository, ConnectivityProbe, QuestionRepository};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub questions: Arc<dyn QuestionRepository>,
    pub answers: Arc<dyn AnswerRepository>,
    pub connectivity: Arc<dyn ConnectivityProbe>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub questions: Arc<dyn QuestionRepository>,
    pub answers: Arc<dyn AnswerRepository>,
    pub connectivity: Arc<dyn ConnectivityProbe>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use backend::test_support::InMemoryQnaStore;
    ///
    /// let store = Arc::new(InMemoryQnaStore::default());
    /// let state = HttpState::new(HttpStatePorts {
    ///     questions: store.clone(),
    ///     answers: store.clone(),
    ///     connectivity: store,
    /// });
    /// let _questions = state.questions.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            questions,
            answers,
            connectivity,
        } = ports;
        Self {
            questions,
            answers,
            connectivity,
        }
    }
}
