//! PostgreSQL implementation of EmployeeRepository

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use shiftpet::{AnimalChoice, DomainError, Employee, EmployeeRepository, PetOverviewRow};

use super::store_err;

/// PostgreSQL implementation of EmployeeRepository
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    username: String,
    name: String,
    animal_choice: String,
    is_admin: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = DomainError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let animal_choice = AnimalChoice::from_str(&row.animal_choice)
            .map_err(DomainError::Repository)?;
        Ok(Self {
            id: row.id,
            username: row.username,
            name: row.name,
            animal_choice,
            is_admin: row.is_admin,
            created_at: row.created_at,
        })
    }
}

/// Overview row straight off the left-join query
#[derive(sqlx::FromRow)]
struct OverviewRow {
    id: Uuid,
    username: String,
    name: String,
    animal_choice: String,
    health: i32,
    happiness: i32,
    total_revenue: f64,
    last_fed: chrono::DateTime<chrono::Utc>,
    last_health_reset: Option<NaiveDate>,
    has_session_today: bool,
}

impl TryFrom<OverviewRow> for PetOverviewRow {
    type Error = DomainError;

    fn try_from(row: OverviewRow) -> Result<Self, Self::Error> {
        let animal_choice = AnimalChoice::from_str(&row.animal_choice)
            .map_err(DomainError::Repository)?;
        Ok(Self {
            id: row.id,
            username: row.username,
            name: row.name,
            animal_choice,
            health: row.health,
            happiness: row.happiness,
            total_revenue: row.total_revenue,
            last_fed: row.last_fed,
            last_health_reset: row.last_health_reset,
            has_session_today: row.has_session_today,
        })
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, DomainError> {
        let row =
            sqlx::query_as::<_, EmployeeRow>("SELECT * FROM users WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(store_err)?;

        row.map(Employee::try_from).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DomainError> {
        let row = sqlx::query_as::<_, EmployeeRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_err)?;

        row.map(Employee::try_from).transpose()
    }

    async fn update_animal_choice(
        &self,
        id: Uuid,
        choice: AnimalChoice,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE users SET animal_choice = $2 WHERE id = $1")
            .bind(id)
            .bind(choice.to_string())
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn fleet_overview(&self, today: NaiveDate) -> Result<Vec<PetOverviewRow>, DomainError> {
        // Missing stats rows read as a fresh pet; session presence doubles
        // as the active-today flag.
        let rows = sqlx::query_as::<_, OverviewRow>(
            r#"
            SELECT u.id, u.username, u.name, u.animal_choice,
                   COALESCE(a.health, 100) AS health,
                   COALESCE(a.happiness, 100) AS happiness,
                   COALESCE(a.total_revenue, 0) AS total_revenue,
                   COALESCE(a.last_fed, NOW()) AS last_fed,
                   a.last_health_reset,
                   (ws.id IS NOT NULL) AS has_session_today
            FROM users u
            LEFT JOIN animal_stats a ON u.id = a.user_id
            LEFT JOIN work_sessions ws ON u.id = ws.user_id AND ws.session_date = $1
            ORDER BY u.name ASC
            "#,
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        rows.into_iter().map(PetOverviewRow::try_from).collect()
    }
}
