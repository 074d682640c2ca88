//! PostgreSQL adapters for the repository ports

mod employee_repository;
mod reset_repository;
mod sale_repository;
mod session_repository;
mod stats_repository;

pub use employee_repository::PgEmployeeRepository;
pub use reset_repository::PgResetRepository;
pub use sale_repository::PgSaleRepository;
pub use session_repository::PgSessionRepository;
pub use stats_repository::PgStatsRepository;

use shiftpet::DomainError;

/// Map any sqlx failure into the domain's store error kind
pub(crate) fn store_err(err: sqlx::Error) -> DomainError {
    DomainError::Repository(err.to_string())
}
