//! Domain Entities
//!
//! - Employee: provisioned staff member with a chosen pet
//! - AnimalStats: the pet's health/happiness state, one per employee
//! - WorkSession: one employee's declared shift and goals for one day
//! - Sale: append-only ledger entry for a recorded sale
//! - DailyResetMarker: single global row stamping the last automatic reset

mod animal_stats;
mod employee;
mod overview;
mod reset_marker;
mod sale;
mod work_session;

pub use animal_stats::AnimalStats;
pub use employee::Employee;
pub use overview::PetOverviewRow;
pub use reset_marker::DailyResetMarker;
pub use sale::{Sale, SaleEvent};
pub use work_session::WorkSession;
