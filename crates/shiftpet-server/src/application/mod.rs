//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between the pure stat
//! rules and the repositories.

mod admin_service;
mod employee_service;
mod shift_service;

pub use admin_service::{AdminService, FleetSummary};
pub use employee_service::EmployeeService;
pub use shift_service::ShiftService;
