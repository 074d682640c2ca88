//! Employee Application Service (Use Case)
//!
//! Login is where the lifecycle rules meet: the automatic workday reset
//! check runs first, then health decay is applied (or stats are created
//! lazily for a first login).

use std::str::FromStr;
use std::sync::Arc;

use chrono::{Timelike, Utc};
use uuid::Uuid;

use shiftpet::domain::services::decay;
use shiftpet::{
    AnimalChoice, AnimalStats, DomainError, Employee, EmployeeRepository, ResetRepository,
    SessionRepository, StatsRepository,
};

/// First login at or after this hour on a new day triggers the automatic
/// workday reset
const AUTO_RESET_HOUR: u32 = 8;

/// Application service for employee-facing operations
pub struct EmployeeService<E, S, W, R>
where
    E: EmployeeRepository,
    S: StatsRepository,
    W: SessionRepository,
    R: ResetRepository,
{
    employees: Arc<E>,
    stats: Arc<S>,
    sessions: Arc<W>,
    resets: Arc<R>,
}

impl<E, S, W, R> EmployeeService<E, S, W, R>
where
    E: EmployeeRepository,
    S: StatsRepository,
    W: SessionRepository,
    R: ResetRepository,
{
    pub fn new(employees: Arc<E>, stats: Arc<S>, sessions: Arc<W>, resets: Arc<R>) -> Self {
        Self {
            employees,
            stats,
            sessions,
            resets,
        }
    }

    /// Log an employee in: run the automatic reset check, then apply health
    /// decay against the stored last-fed time, creating stats lazily on a
    /// first login.
    pub async fn login(&self, username: &str) -> Result<(Employee, AnimalStats), DomainError> {
        let employee = self
            .employees
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::not_found_str("Employee", username))?;

        let now = Utc::now();
        let today = now.date_naive();

        self.maybe_auto_reset(now, today).await;

        let stats = match self.stats.find_by_user(employee.id).await? {
            Some(stats) => {
                let has_session_today = self
                    .sessions
                    .find_for_date(employee.id, today)
                    .await?
                    .is_some();
                let health = decay::decayed_health(
                    stats.last_fed,
                    now,
                    stats.last_health_reset,
                    has_session_today,
                    stats.health,
                );
                self.stats.record_decay(employee.id, health, today).await?;
                AnimalStats {
                    health,
                    last_health_reset: Some(today),
                    ..stats
                }
            }
            None => {
                tracing::info!("Adopting a pet for first-time login: {}", employee.username);
                self.stats
                    .insert(&AnimalStats::new_for_user(employee.id))
                    .await?
            }
        };

        Ok((employee, stats))
    }

    /// Automatic reset path: best-effort. A store failure here is logged
    /// and login continues on pre-reset data.
    async fn maybe_auto_reset(&self, now: chrono::DateTime<Utc>, today: chrono::NaiveDate) {
        if now.hour() < AUTO_RESET_HOUR {
            return;
        }

        match self.resets.last_reset().await {
            Ok(marker) if marker.map_or(true, |m| m.reset_date < today) => {
                match self.resets.perform_reset(today, now).await {
                    Ok(marker) => {
                        tracing::info!("Automatic workday reset completed for {}", marker.reset_date)
                    }
                    Err(e) => tracing::warn!("Automatic workday reset failed: {}", e),
                }
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Could not read the reset marker: {}", e),
        }
    }

    /// Current pet stats for an employee
    pub async fn get_stats(&self, user_id: Uuid) -> Result<AnimalStats, DomainError> {
        self.stats
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("AnimalStats", user_id))
    }

    /// Change the employee's pet species
    pub async fn change_pet(
        &self,
        user_id: Uuid,
        animal_choice: &str,
    ) -> Result<AnimalChoice, DomainError> {
        let choice = AnimalChoice::from_str(animal_choice).map_err(DomainError::Validation)?;

        let updated = self.employees.update_animal_choice(user_id, choice).await?;
        if !updated {
            return Err(DomainError::not_found("Employee", user_id));
        }

        tracing::info!("Employee {} adopted a {}", user_id, choice);
        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{DateTime, NaiveDate, TimeZone};
    use shiftpet::{
        DailyResetMarker, PetOverviewRow, SessionGoals, WorkSession,
    };

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

    struct FakeStats {
        stats: Mutex<Option<AnimalStats>>,
    }

    #[async_trait]
    impl StatsRepository for FakeStats {
        async fn find_by_user(&self, _user_id: Uuid) -> Result<Option<AnimalStats>, DomainError> {
            Ok(self.stats.lock().unwrap().clone())
        }

        async fn insert(&self, stats: &AnimalStats) -> Result<AnimalStats, DomainError> {
            *self.stats.lock().unwrap() = Some(stats.clone());
            Ok(stats.clone())
        }

        async fn record_decay(
            &self,
            _user_id: Uuid,
            health: i32,
            reset_date: NaiveDate,
        ) -> Result<(), DomainError> {
            if let Some(stats) = self.stats.lock().unwrap().as_mut() {
                stats.health = health;
                stats.last_health_reset = Some(reset_date);
            }
            Ok(())
        }
    }

    struct FakeSessions;

    #[async_trait]
    impl SessionRepository for FakeSessions {
        async fn find_for_date(
            &self,
            _user_id: Uuid,
            _date: NaiveDate,
        ) -> Result<Option<WorkSession>, DomainError> {
            Ok(None)
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
            _user_id: Uuid,
            _date: NaiveDate,
            _credit_cards: Option<i32>,
            _paid_memberships: Option<i32>,
        ) -> Result<(WorkSession, i32), DomainError> {
            Err(DomainError::Repository("not wired".to_string()))
        }
    }

    struct FakeResets {
        marker: Mutex<Option<DailyResetMarker>>,
        fail: bool,
        attempts: AtomicUsize,
    }

    impl FakeResets {
        fn with_marker(reset_date: Option<NaiveDate>) -> Self {
            Self {
                marker: Mutex::new(reset_date.map(|d| DailyResetMarker {
                    reset_date: d,
                    reset_at: Utc::now(),
                })),
                fail: false,
                attempts: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                marker: Mutex::new(None),
                fail: true,
                attempts: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ResetRepository for FakeResets {
        async fn last_reset(&self) -> Result<Option<DailyResetMarker>, DomainError> {
            Ok(*self.marker.lock().unwrap())
        }

        async fn perform_reset(
            &self,
            today: NaiveDate,
            now: DateTime<Utc>,
        ) -> Result<DailyResetMarker, DomainError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DomainError::Repository("store offline".to_string()));
            }
            let marker = DailyResetMarker {
                reset_date: today,
                reset_at: now,
            };
            *self.marker.lock().unwrap() = Some(marker);
            Ok(marker)
        }
    }

    fn service(
        employees: Vec<Employee>,
        stats: Option<AnimalStats>,
        resets: Arc<FakeResets>,
    ) -> EmployeeService<FakeEmployees, FakeStats, FakeSessions, FakeResets> {
        EmployeeService::new(
            Arc::new(FakeEmployees { employees }),
            Arc::new(FakeStats {
                stats: Mutex::new(stats),
            }),
            Arc::new(FakeSessions),
            resets,
        )
    }

    fn at_hour(hour: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, hour, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn test_no_auto_reset_before_cutoff_hour() {
        let resets = Arc::new(FakeResets::with_marker(None));
        let service = service(Vec::new(), None, resets.clone());

        let now = at_hour(7);
        service.maybe_auto_reset(now, now.date_naive()).await;

        assert_eq!(resets.attempts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_auto_reset_runs_when_marker_is_stale() {
        let yesterday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        let resets = Arc::new(FakeResets::with_marker(Some(yesterday)));
        let service = service(Vec::new(), None, resets.clone());

        let now = at_hour(8);
        service.maybe_auto_reset(now, now.date_naive()).await;

        assert_eq!(resets.attempts.load(Ordering::SeqCst), 1);
        let marker = resets.marker.lock().unwrap().unwrap();
        assert_eq!(marker.reset_date, now.date_naive());
    }

    #[tokio::test]
    async fn test_auto_reset_runs_on_missing_marker() {
        let resets = Arc::new(FakeResets::with_marker(None));
        let service = service(Vec::new(), None, resets.clone());

        let now = at_hour(9);
        service.maybe_auto_reset(now, now.date_naive()).await;

        assert_eq!(resets.attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_auto_reset_skipped_when_marker_is_current() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let resets = Arc::new(FakeResets::with_marker(Some(today)));
        let service = service(Vec::new(), None, resets.clone());

        let now = at_hour(9);
        service.maybe_auto_reset(now, now.date_naive()).await;

        // same-window repeat is a no-op
        assert_eq!(resets.attempts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_auto_reset_failure_is_swallowed() {
        let resets = Arc::new(FakeResets::failing());
        let service = service(Vec::new(), None, resets.clone());

        let now = at_hour(9);
        service.maybe_auto_reset(now, now.date_naive()).await;

        assert_eq!(resets.attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_reset_failure_does_not_block_login() {
        let user_id = Uuid::new_v4();
        let employee = Employee {
            id: user_id,
            username: "dana".to_string(),
            name: "Dana".to_string(),
            animal_choice: AnimalChoice::Dog,
            is_admin: false,
            created_at: Utc::now(),
        };
        let now = Utc::now();
        let stats = AnimalStats {
            id: Uuid::new_v4(),
            user_id,
            health: 80,
            happiness: 40,
            total_revenue: 0.0,
            last_fed: now,
            last_health_reset: Some(now.date_naive()),
            updated_at: now,
        };

        let resets = Arc::new(FakeResets::failing());
        let service = service(vec![employee], Some(stats), resets);

        let (employee, stats) = service.login("dana").await.unwrap();
        assert_eq!(employee.username, "dana");
        // just fed, so no decay regardless of the failed reset attempt
        assert_eq!(stats.health, 80);
    }
}
