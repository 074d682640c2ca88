//! Infrastructure Adapters
//!
//! Implementations of domain ports for the durable store.

pub mod postgres;

// Re-exports
pub use postgres::{
    PgEmployeeRepository, PgResetRepository, PgSaleRepository, PgSessionRepository,
    PgStatsRepository,
};
