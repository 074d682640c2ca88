//! PostgreSQL implementation of SessionRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use shiftpet::domain::services::scoring;
use shiftpet::{DomainError, SessionGoals, SessionRepository, WorkSession};

use super::store_err;

/// PostgreSQL implementation of SessionRepository
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
pub(crate) struct SessionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub session_date: NaiveDate,
    pub work_hours: f64,
    pub goal_amount: f64,
    pub goal_paid_memberships: i32,
    pub goal_credit_cards: i32,
    pub current_paid_memberships: i32,
    pub current_credit_cards: i32,
    pub revenue: f64,
    pub goal_met: bool,
}

impl From<SessionRow> for WorkSession {
    fn from(row: SessionRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            session_date: row.session_date,
            work_hours: row.work_hours,
            goal_amount: row.goal_amount,
            goal_paid_memberships: row.goal_paid_memberships,
            goal_credit_cards: row.goal_credit_cards,
            current_paid_memberships: row.current_paid_memberships,
            current_credit_cards: row.current_credit_cards,
            revenue: row.revenue,
            goal_met: row.goal_met,
        }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn find_for_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<WorkSession>, DomainError> {
        let row = sqlx::query_as::<_, SessionRow>(
            "SELECT * FROM work_sessions WHERE user_id = $1 AND session_date = $2",
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.map(Into::into))
    }

    async fn upsert_goals(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        work_hours: f64,
        goals: &SessionGoals,
    ) -> Result<WorkSession, DomainError> {
        // Re-declaring hours replaces the goals in place; the conflict arm
        // deliberately leaves counters and revenue alone.
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO work_sessions
                (user_id, session_date, work_hours, goal_amount, goal_paid_memberships, goal_credit_cards)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, session_date) DO UPDATE
            SET work_hours = EXCLUDED.work_hours,
                goal_amount = EXCLUDED.goal_amount,
                goal_paid_memberships = EXCLUDED.goal_paid_memberships,
                goal_credit_cards = EXCLUDED.goal_credit_cards
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(work_hours)
        .bind(goals.goal_amount)
        .bind(goals.goal_paid_memberships)
        .bind(goals.goal_credit_cards)
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.into())
    }

    async fn correct_counts(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        credit_cards: Option<i32>,
        paid_memberships: Option<i32>,
    ) -> Result<(WorkSession, i32), DomainError> {
        // Counter overwrite, goal recheck, and the happiness write share one
        // transaction; a failure at any step rolls the correction back whole.
        let mut tx = self.pool.begin().await.map_err(store_err)?;

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            UPDATE work_sessions
            SET current_credit_cards = COALESCE($3, current_credit_cards),
                current_paid_memberships = COALESCE($4, current_paid_memberships)
            WHERE user_id = $1 AND session_date = $2
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(credit_cards)
        .bind(paid_memberships)
        .fetch_optional(&mut *tx)
        .await
        .map_err(store_err)?
        .ok_or_else(|| DomainError::not_found("WorkSession", user_id))?;

        let goal_met = scoring::goal_met(
            row.current_paid_memberships,
            row.goal_paid_memberships,
            row.current_credit_cards,
            row.goal_credit_cards,
        );

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            UPDATE work_sessions SET goal_met = $3
            WHERE user_id = $1 AND session_date = $2
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(goal_met)
        .fetch_one(&mut *tx)
        .await
        .map_err(store_err)?;

        let happiness = scoring::happiness(
            row.current_paid_memberships,
            row.goal_paid_memberships,
            row.current_credit_cards,
            row.goal_credit_cards,
        );

        let updated = sqlx::query(
            "UPDATE animal_stats SET happiness = $2, updated_at = NOW() WHERE user_id = $1",
        )
        .bind(user_id)
        .bind(happiness)
        .execute(&mut *tx)
        .await
        .map_err(store_err)?;

        if updated.rows_affected() == 0 {
            return Err(DomainError::not_found("AnimalStats", user_id));
        }

        tx.commit().await.map_err(store_err)?;

        Ok((row.into(), happiness))
    }
}
