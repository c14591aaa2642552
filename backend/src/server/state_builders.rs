//! Builders wiring Diesel adapters into HTTP state.

use std::sync::Arc;

use actix_web::web;

use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::outbound::persistence::{
    DbPool, DieselAnswerRepository, DieselConnectivityProbe, DieselQuestionRepository,
};

/// Build handler state with every port backed by `pool`.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(HttpStatePorts {
        questions: Arc::new(DieselQuestionRepository::new(pool.clone())),
        answers: Arc::new(DieselAnswerRepository::new(pool.clone())),
        connectivity: Arc::new(DieselConnectivityProbe::new(pool.clone())),
    }))
}
