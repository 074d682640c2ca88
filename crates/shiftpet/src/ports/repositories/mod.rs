//! Repository Ports
//!
//! Data access interfaces, one per aggregate plus the compound sale and
//! reset operations that must run transactionally.

mod employee_repository;
mod reset_repository;
mod sale_repository;
mod session_repository;
mod stats_repository;

pub use employee_repository::EmployeeRepository;
pub use reset_repository::ResetRepository;
pub use sale_repository::{SaleApplied, SaleRepository};
pub use session_repository::SessionRepository;
pub use stats_repository::StatsRepository;
