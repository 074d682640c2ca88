//! Shift Application Service (Use Case)
//!
//! Shift start, session lookup, and sale recording for the current
//! business day.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use shiftpet::domain::services::{goals, scoring};
use shiftpet::{
    DomainError, EmployeeRepository, SaleApplied, SaleEvent, SaleRepository, SessionRepository,
    WorkSession,
};

/// Sanity bound on a declared shift length
const MAX_WORK_HOURS: f64 = 24.0;

/// Application service for shift and sale operations
pub struct ShiftService<E, W, L>
where
    E: EmployeeRepository,
    W: SessionRepository,
    L: SaleRepository,
{
    employees: Arc<E>,
    sessions: Arc<W>,
    sales: Arc<L>,
}

impl<E, W, L> ShiftService<E, W, L>
where
    E: EmployeeRepository,
    W: SessionRepository,
    L: SaleRepository,
{
    pub fn new(employees: Arc<E>, sessions: Arc<W>, sales: Arc<L>) -> Self {
        Self {
            employees,
            sessions,
            sales,
        }
    }

    /// Start (or re-declare) today's shift. Goals are recomputed from the
    /// hours and overwrite any existing ones; progress counters survive.
    pub async fn start_session(
        &self,
        user_id: Uuid,
        work_hours: f64,
    ) -> Result<WorkSession, DomainError> {
        if !(work_hours > 0.0 && work_hours <= MAX_WORK_HOURS) {
            return Err(DomainError::Validation(format!(
                "Work hours must be between 0 and {}",
                MAX_WORK_HOURS
            )));
        }

        if self.employees.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::not_found("Employee", user_id));
        }

        let today = Utc::now().date_naive();
        let targets = goals::compute_goals(work_hours);
        let session = self
            .sessions
            .upsert_goals(user_id, today, work_hours, &targets)
            .await?;

        tracing::info!(
            "Shift started for {}: {}h, goals ${} / {} PM / {} CC",
            user_id,
            work_hours,
            targets.goal_amount,
            targets.goal_paid_memberships,
            targets.goal_credit_cards
        );

        Ok(session)
    }

    /// Today's session, if the shift has started
    pub async fn today_session(&self, user_id: Uuid) -> Result<WorkSession, DomainError> {
        let today = Utc::now().date_naive();
        self.sessions
            .find_for_date(user_id, today)
            .await?
            .ok_or_else(|| DomainError::not_found("WorkSession", user_id))
    }

    /// Record a sale against today's session and feed the pet. The store
    /// mutation is atomic; the narrative message reports the triggered
    /// bonuses.
    pub async fn record_sale(
        &self,
        user_id: Uuid,
        sale: SaleEvent,
    ) -> Result<(SaleApplied, String), DomainError> {
        if sale.revenue <= 0.0 {
            return Err(DomainError::Validation(
                "Revenue must be greater than zero".to_string(),
            ));
        }

        let now = Utc::now();
        let today = now.date_naive();
        let applied = self.sales.apply_sale(user_id, today, &sale, now).await?;
        let message = scoring::sale_message(&sale);

        tracing::info!(
            "Sale {} recorded for {}: ${}, +{} health, goal_met={}",
            applied.sale.id,
            user_id,
            sale.revenue,
            scoring::health_bonus(&sale),
            applied.session.goal_met
        );

        Ok((applied, message))
    }
}
