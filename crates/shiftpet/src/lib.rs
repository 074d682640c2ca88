//! Shiftpet Domain Library
//!
//! Core domain types and interfaces for the Shiftpet employee-incentive
//! tracker: employees log sales against a daily shift goal and a virtual
//! pet's health and happiness respond to their performance.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Employee, AnimalStats, WorkSession, Sale)
//!   - `value_objects/`: Immutable value types (AnimalChoice)
//!   - `services/`: Pure stat computations (decay, goals, sale scoring)
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces backed by the durable store

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AnimalChoice, AnimalStats, DailyResetMarker, DomainError, Employee, PetOverviewRow, Sale,
    SaleEvent, SessionGoals, WorkSession,
};
pub use ports::{
    EmployeeRepository, ResetRepository, SaleApplied, SaleRepository, SessionRepository,
    StatsRepository,
};
