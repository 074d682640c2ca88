//! PostgreSQL implementation of StatsRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use shiftpet::{AnimalStats, DomainError, StatsRepository};

use super::store_err;

/// PostgreSQL implementation of StatsRepository
pub struct PgStatsRepository {
    pool: PgPool,
}

impl PgStatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
pub(crate) struct StatsRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub health: i32,
    pub happiness: i32,
    pub total_revenue: f64,
    pub last_fed: chrono::DateTime<chrono::Utc>,
    pub last_health_reset: Option<NaiveDate>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<StatsRow> for AnimalStats {
    fn from(row: StatsRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            health: row.health,
            happiness: row.happiness,
            total_revenue: row.total_revenue,
            last_fed: row.last_fed,
            last_health_reset: row.last_health_reset,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<AnimalStats>, DomainError> {
        let row =
            sqlx::query_as::<_, StatsRow>("SELECT * FROM animal_stats WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(store_err)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, stats: &AnimalStats) -> Result<AnimalStats, DomainError> {
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            INSERT INTO animal_stats (id, user_id, health, happiness, total_revenue, last_fed, last_health_reset)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(stats.id)
        .bind(stats.user_id)
        .bind(stats.health)
        .bind(stats.happiness)
        .bind(stats.total_revenue)
        .bind(stats.last_fed)
        .bind(stats.last_health_reset)
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.into())
    }

    async fn record_decay(
        &self,
        user_id: Uuid,
        health: i32,
        reset_date: NaiveDate,
    ) -> Result<(), DomainError> {
        // last_fed stays untouched: decay is always recomputed against the
        // stored feed time, so repeated logins cannot double-decay.
        sqlx::query(
            r#"
            UPDATE animal_stats
            SET health = $2, last_health_reset = $3, updated_at = NOW()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(health)
        .bind(reset_date)
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(())
    }
}
