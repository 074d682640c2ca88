//! Employee Repository Port
//!
//! Abstract interface for employee lookup and pet selection.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{errors::DomainError, AnimalChoice, Employee, PetOverviewRow};

/// Repository interface for Employee entities
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by username
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, DomainError>;

    /// Find an employee by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DomainError>;

    /// Change the employee's pet species
    async fn update_animal_choice(
        &self,
        id: Uuid,
        choice: AnimalChoice,
    ) -> Result<bool, DomainError>;

    /// All employees left-joined with their stats and the session-existence
    /// flag for `today`, ordered by display name
    async fn fleet_overview(&self, today: NaiveDate) -> Result<Vec<PetOverviewRow>, DomainError>;
}
