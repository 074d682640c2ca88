//! Domain Layer
//!
//! Pure business entities, value objects, and the stat-computation rules.
//! No infrastructure dependencies.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use entities::{
    AnimalStats, DailyResetMarker, Employee, PetOverviewRow, Sale, SaleEvent, WorkSession,
};
pub use errors::DomainError;
pub use services::SessionGoals;
pub use value_objects::AnimalChoice;
