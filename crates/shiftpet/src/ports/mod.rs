//! Ports - Abstract Interfaces
//!
//! Traits that define the contract the core needs from the durable store.
//! Implementations live in the server crate's adapters.

pub mod repositories;

pub use repositories::{
    EmployeeRepository, ResetRepository, SaleApplied, SaleRepository, SessionRepository,
    StatsRepository,
};
