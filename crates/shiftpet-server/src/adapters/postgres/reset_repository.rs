//! PostgreSQL implementation of ResetRepository
//!
//! The reset writes fixed constants and deletes by date key, so a
//! concurrent duplicate run converges on the same state. No lock needed
//! beyond the transaction itself.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use shiftpet::{DailyResetMarker, DomainError, ResetRepository};

use super::store_err;

/// PostgreSQL implementation of ResetRepository
pub struct PgResetRepository {
    pool: PgPool,
}

impl PgResetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MarkerRow {
    reset_date: NaiveDate,
    reset_at: DateTime<Utc>,
}

impl From<MarkerRow> for DailyResetMarker {
    fn from(row: MarkerRow) -> Self {
        Self {
            reset_date: row.reset_date,
            reset_at: row.reset_at,
        }
    }
}

#[async_trait]
impl ResetRepository for PgResetRepository {
    async fn last_reset(&self) -> Result<Option<DailyResetMarker>, DomainError> {
        let row = sqlx::query_as::<_, MarkerRow>(
            "SELECT reset_date, reset_at FROM daily_reset WHERE id = TRUE",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.map(Into::into))
    }

    async fn perform_reset(
        &self,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<DailyResetMarker, DomainError> {
        let mut tx = self.pool.begin().await.map_err(store_err)?;

        sqlx::query(
            r#"
            UPDATE animal_stats
            SET health = 100, happiness = 0, last_fed = $2,
                last_health_reset = $1, updated_at = NOW()
            "#,
        )
        .bind(today)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(store_err)?;

        sqlx::query("DELETE FROM work_sessions WHERE session_date = $1")
            .bind(today)
            .execute(&mut *tx)
            .await
            .map_err(store_err)?;

        sqlx::query("DELETE FROM sales WHERE session_date = $1")
            .bind(today)
            .execute(&mut *tx)
            .await
            .map_err(store_err)?;

        sqlx::query(
            r#"
            INSERT INTO daily_reset (id, reset_date, reset_at)
            VALUES (TRUE, $1, $2)
            ON CONFLICT (id) DO UPDATE
            SET reset_date = EXCLUDED.reset_date, reset_at = EXCLUDED.reset_at
            "#,
        )
        .bind(today)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(store_err)?;

        tx.commit().await.map_err(store_err)?;

        Ok(DailyResetMarker {
            reset_date: today,
            reset_at: now,
        })
    }
}
