//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain ports backed by PostgreSQL through
//! `diesel-async` and a `bb8` pool.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Scoped connections**: every repository call checks out its own
//!   connection and releases it when the guard drops.
//!
//! # Example
//!
//! ```no_run
//! use backend::outbound::persistence::{DbPool, DieselQuestionRepository, PoolConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/qna"))?;
//! let questions = DieselQuestionRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_answer_repository;
mod diesel_basic_error_mapping;
mod diesel_connectivity_probe;
mod diesel_question_repository;
mod models;
mod pool;
mod schema;
mod tls;

pub use diesel_answer_repository::DieselAnswerRepository;
pub use diesel_connectivity_probe::DieselConnectivityProbe;
pub use diesel_question_repository::DieselQuestionRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use tls::{DbTlsMode, ParseDbTlsModeError};
