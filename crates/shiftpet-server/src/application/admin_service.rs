//! Admin Application Service (Use Case)
//!
//! Fleet overview, the manual workday reset, and direct counter
//! corrections. Every operation verifies the caller's admin flag first.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use shiftpet::{
    DailyResetMarker, DomainError, Employee, EmployeeRepository, PetOverviewRow, ResetRepository,
    SessionRepository, WorkSession,
};

/// Fleet-wide rollup over all employees
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetSummary {
    pub total_employees: usize,
    pub active_today: usize,
    pub avg_health: f64,
    pub avg_happiness: f64,
}

impl FleetSummary {
    /// Arithmetic means over all employees; zero across the board when
    /// there are none.
    fn from_rows(rows: &[PetOverviewRow]) -> Self {
        let total_employees = rows.len();
        if total_employees == 0 {
            return Self {
                total_employees: 0,
                active_today: 0,
                avg_health: 0.0,
                avg_happiness: 0.0,
            };
        }

        let active_today = rows.iter().filter(|r| r.has_session_today).count();
        let health_sum: i64 = rows.iter().map(|r| r.health as i64).sum();
        let happiness_sum: i64 = rows.iter().map(|r| r.happiness as i64).sum();

        Self {
            total_employees,
            active_today,
            avg_health: health_sum as f64 / total_employees as f64,
            avg_happiness: happiness_sum as f64 / total_employees as f64,
        }
    }
}

/// Application service for admin operations
pub struct AdminService<E, W, R>
where
    E: EmployeeRepository,
    W: SessionRepository,
    R: ResetRepository,
{
    employees: Arc<E>,
    sessions: Arc<W>,
    resets: Arc<R>,
}

impl<E, W, R> AdminService<E, W, R>
where
    E: EmployeeRepository,
    W: SessionRepository,
    R: ResetRepository,
{
    pub fn new(employees: Arc<E>, sessions: Arc<W>, resets: Arc<R>) -> Self {
        Self {
            employees,
            sessions,
            resets,
        }
    }

    async fn require_admin(&self, admin_user_id: Uuid) -> Result<Employee, DomainError> {
        let employee = self
            .employees
            .find_by_id(admin_user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee", admin_user_id))?;

        if !employee.is_admin {
            return Err(DomainError::admin_required());
        }
        Ok(employee)
    }

    /// Every employee's pet with today's activity flag, plus the rollup
    pub async fn overview(
        &self,
        admin_user_id: Uuid,
    ) -> Result<(Vec<PetOverviewRow>, FleetSummary), DomainError> {
        self.require_admin(admin_user_id).await?;

        let today = Utc::now().date_naive();
        let rows = self.employees.fleet_overview(today).await?;
        let summary = FleetSummary::from_rows(&rows);

        Ok((rows, summary))
    }

    /// Manual workday reset, independent of the marker/hour check
    pub async fn force_reset(&self, admin_user_id: Uuid) -> Result<DailyResetMarker, DomainError> {
        let admin = self.require_admin(admin_user_id).await?;

        let now = Utc::now();
        let marker = self.resets.perform_reset(now.date_naive(), now).await?;

        tracing::info!(
            "Manual workday reset by {} for {}",
            admin.username,
            marker.reset_date
        );
        Ok(marker)
    }

    /// Correct today's counters for an employee. The store applies the
    /// overwrite and the happiness recompute as one mutation. Health is
    /// deliberately untouched. Input checks run before any store access.
    pub async fn update_counts(
        &self,
        admin_user_id: Uuid,
        target_user_id: Uuid,
        credit_cards: Option<i32>,
        paid_memberships: Option<i32>,
    ) -> Result<(WorkSession, i32), DomainError> {
        if credit_cards.is_none() && paid_memberships.is_none() {
            return Err(DomainError::Validation(
                "No counts provided to update".to_string(),
            ));
        }
        if credit_cards.map_or(false, |c| c < 0) || paid_memberships.map_or(false, |c| c < 0) {
            return Err(DomainError::Validation(
                "Counts cannot be negative".to_string(),
            ));
        }

        self.require_admin(admin_user_id).await?;

        let today = Utc::now().date_naive();
        let (session, happiness) = self
            .sessions
            .correct_counts(target_user_id, today, credit_cards, paid_memberships)
            .await?;

        tracing::info!(
            "Counts corrected for {}: {} CC / {} PM, happiness {}",
            target_user_id,
            session.current_credit_cards,
            session.current_paid_memberships,
            happiness
        );

        Ok((session, happiness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{DateTime, NaiveDate, Utc};
    use shiftpet::{AnimalChoice, SessionGoals};

    struct FakeEmployees {
        employees: Vec<Employee>,
    }

    #[async_trait]
    impl EmployeeRepository for FakeEmployees {
        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<Employee>, DomainError> {
            Ok(self
                .employees
                .iter()
                .find(|e| e.username == username)
                .cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DomainError> {
            Ok(self.employees.iter().find(|e| e.id == id).cloned())
        }

        async fn update_animal_choice(
            &self,
            _id: Uuid,
            _choice: AnimalChoice,
        ) -> Result<bool, DomainError> {
            Ok(false)
        }

        async fn fleet_overview(
            &self,
            _today: NaiveDate,
        ) -> Result<Vec<PetOverviewRow>, DomainError> {
            Ok(Vec::new())
        }
    }

    struct FakeSessions {
        session: Option<WorkSession>,
        happiness: i32,
        corrections: AtomicUsize,
    }

    #[async_trait]
    impl SessionRepository for FakeSessions {
        async fn find_for_date(
            &self,
            _user_id: Uuid,
            _date: NaiveDate,
        ) -> Result<Option<WorkSession>, DomainError> {
            Ok(self.session.clone())
        }

        async fn upsert_goals(
            &self,
            _user_id: Uuid,
            _date: NaiveDate,
            _work_hours: f64,
            _goals: &SessionGoals,
        ) -> Result<WorkSession, DomainError> {
            Err(DomainError::Repository("not wired".to_string()))
        }

        async fn correct_counts(
            &self,
            user_id: Uuid,
            _date: NaiveDate,
            credit_cards: Option<i32>,
            paid_memberships: Option<i32>,
        ) -> Result<(WorkSession, i32), DomainError> {
            self.corrections.fetch_add(1, Ordering::SeqCst);
            let mut session = self
                .session
                .clone()
                .ok_or_else(|| DomainError::not_found("WorkSession", user_id))?;
            if let Some(cc) = credit_cards {
                session.current_credit_cards = cc;
            }
            if let Some(pm) = paid_memberships {
                session.current_paid_memberships = pm;
            }
            Ok((session, self.happiness))
        }
    }

    struct FakeResets;

    #[async_trait]
    impl ResetRepository for FakeResets {
        async fn last_reset(&self) -> Result<Option<DailyResetMarker>, DomainError> {
            Ok(None)
        }

        async fn perform_reset(
            &self,
            today: NaiveDate,
            now: DateTime<Utc>,
        ) -> Result<DailyResetMarker, DomainError> {
            Ok(DailyResetMarker {
                reset_date: today,
                reset_at: now,
            })
        }
    }

    fn staff(is_admin: bool) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            username: "boss".to_string(),
            name: "Boss".to_string(),
            animal_choice: AnimalChoice::Cat,
            is_admin,
            created_at: Utc::now(),
        }
    }

    fn open_session(user_id: Uuid) -> WorkSession {
        WorkSession {
            id: Uuid::new_v4(),
            user_id,
            session_date: Utc::now().date_naive(),
            work_hours: 8.0,
            goal_amount: 8000.0,
            goal_paid_memberships: 2,
            goal_credit_cards: 2,
            current_paid_memberships: 0,
            current_credit_cards: 0,
            revenue: 0.0,
            goal_met: false,
        }
    }

    fn service(
        employees: Vec<Employee>,
        sessions: Arc<FakeSessions>,
    ) -> AdminService<FakeEmployees, FakeSessions, FakeResets> {
        AdminService::new(
            Arc::new(FakeEmployees { employees }),
            sessions,
            Arc::new(FakeResets),
        )
    }

    fn empty_sessions() -> Arc<FakeSessions> {
        Arc::new(FakeSessions {
            session: None,
            happiness: 0,
            corrections: AtomicUsize::new(0),
        })
    }

    fn row(health: i32, happiness: i32, active: bool) -> PetOverviewRow {
        PetOverviewRow {
            id: Uuid::new_v4(),
            username: "emp".to_string(),
            name: "Employee".to_string(),
            animal_choice: AnimalChoice::Cat,
            health,
            happiness,
            total_revenue: 0.0,
            last_fed: Utc::now(),
            last_health_reset: None,
            has_session_today: active,
        }
    }

    #[test]
    fn test_empty_fleet_averages_zero() {
        let summary = FleetSummary::from_rows(&[]);
        assert_eq!(summary.total_employees, 0);
        assert_eq!(summary.active_today, 0);
        assert_eq!(summary.avg_health, 0.0);
        assert_eq!(summary.avg_happiness, 0.0);
    }

    #[test]
    fn test_summary_averages_and_active_count() {
        let rows = vec![row(100, 0, true), row(50, 100, false), row(0, 50, true)];
        let summary = FleetSummary::from_rows(&rows);
        assert_eq!(summary.total_employees, 3);
        assert_eq!(summary.active_today, 2);
        assert_eq!(summary.avg_health, 50.0);
        assert_eq!(summary.avg_happiness, 50.0);
    }

    #[tokio::test]
    async fn test_update_counts_rejects_empty_input_before_any_lookup() {
        // No employees exist: a lookup-first implementation would answer
        // NotFound here instead of Validation.
        let service = service(Vec::new(), empty_sessions());
        let err = service
            .update_counts(Uuid::new_v4(), Uuid::new_v4(), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_counts_rejects_negative_counts_before_any_lookup() {
        let service = service(Vec::new(), empty_sessions());
        let err = service
            .update_counts(Uuid::new_v4(), Uuid::new_v4(), Some(-1), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_counts_requires_admin() {
        let clerk = staff(false);
        let service = service(vec![clerk.clone()], empty_sessions());
        let err = service
            .update_counts(clerk.id, Uuid::new_v4(), Some(1), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_update_counts_is_a_single_store_mutation() {
        let admin = staff(true);
        let target = Uuid::new_v4();
        let sessions = Arc::new(FakeSessions {
            session: Some(open_session(target)),
            happiness: 73,
            corrections: AtomicUsize::new(0),
        });
        let service = service(vec![admin.clone()], sessions.clone());

        let (session, happiness) = service
            .update_counts(admin.id, target, Some(2), None)
            .await
            .unwrap();

        assert_eq!(session.current_credit_cards, 2);
        assert_eq!(happiness, 73);
        // counters and happiness came back from one compound store call
        assert_eq!(sessions.corrections.load(Ordering::SeqCst), 1);
    }
}
