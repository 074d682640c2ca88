//! PostgreSQL implementation of SaleRepository
//!
//! The whole sale is one transaction: ledger insert, session fold-in,
//! goal recheck, stats update. Counter bumps happen in SQL
//! (`current = current + 1`) so concurrent sales for the same employee
//! cannot lose updates.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use shiftpet::domain::services::scoring;
use shiftpet::{
    AnimalStats, DomainError, Sale, SaleApplied, SaleEvent, SaleRepository, WorkSession,
};

use super::session_repository::SessionRow;
use super::stats_repository::StatsRow;
use super::store_err;

/// PostgreSQL implementation of SaleRepository
pub struct PgSaleRepository {
    pool: PgPool,
}

impl PgSaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct SaleRow {
    id: Uuid,
    user_id: Uuid,
    session_date: NaiveDate,
    revenue: f64,
    has_credit_card: bool,
    has_paid_membership: bool,
    has_warranty: bool,
    overridden_high_value: bool,
    created_at: DateTime<Utc>,
}

impl From<SaleRow> for Sale {
    fn from(row: SaleRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            session_date: row.session_date,
            revenue: row.revenue,
            has_credit_card: row.has_credit_card,
            has_paid_membership: row.has_paid_membership,
            has_warranty: row.has_warranty,
            overridden_high_value: row.overridden_high_value,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl SaleRepository for PgSaleRepository {
    async fn apply_sale(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        sale: &SaleEvent,
        now: DateTime<Utc>,
    ) -> Result<SaleApplied, DomainError> {
        let mut tx = self.pool.begin().await.map_err(store_err)?;

        // 1. Append to the ledger
        let sale_row = sqlx::query_as::<_, SaleRow>(
            r#"
            INSERT INTO sales
                (user_id, session_date, revenue, has_credit_card, has_paid_membership, has_warranty, overridden_high_value)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(sale.revenue)
        .bind(sale.has_credit_card)
        .bind(sale.has_paid_membership)
        .bind(sale.has_warranty)
        .bind(sale.overridden_high_value)
        .fetch_one(&mut *tx)
        .await
        .map_err(store_err)?;

        // 2. Fold into today's session with in-place increments
        let cc_bump: i32 = sale.has_credit_card.into();
        let pm_bump: i32 = sale.has_paid_membership.into();

        let session_row = sqlx::query_as::<_, SessionRow>(
            r#"
            UPDATE work_sessions
            SET revenue = revenue + $3,
                current_credit_cards = current_credit_cards + $4,
                current_paid_memberships = current_paid_memberships + $5
            WHERE user_id = $1 AND session_date = $2
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(sale.revenue)
        .bind(cc_bump)
        .bind(pm_bump)
        .fetch_optional(&mut *tx)
        .await
        .map_err(store_err)?
        .ok_or_else(|| DomainError::not_found("WorkSession", user_id))?;

        // 3. Recheck the goal against the post-increment counters
        let goal_met = scoring::goal_met(
            session_row.current_paid_memberships,
            session_row.goal_paid_memberships,
            session_row.current_credit_cards,
            session_row.goal_credit_cards,
        );

        sqlx::query(
            "UPDATE work_sessions SET goal_met = $3 WHERE user_id = $1 AND session_date = $2",
        )
        .bind(user_id)
        .bind(date)
        .bind(goal_met)
        .execute(&mut *tx)
        .await
        .map_err(store_err)?;

        // 4. Feed the pet: additive health bonus, recomputed happiness
        let bonus = scoring::health_bonus(sale);
        let happiness = scoring::happiness(
            session_row.current_paid_memberships,
            session_row.goal_paid_memberships,
            session_row.current_credit_cards,
            session_row.goal_credit_cards,
        );

        let stats_row = sqlx::query_as::<_, StatsRow>(
            r#"
            UPDATE animal_stats
            SET health = LEAST(100, health + $2),
                happiness = $3,
                last_fed = $4,
                total_revenue = total_revenue + $5,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(bonus)
        .bind(happiness)
        .bind(now)
        .bind(sale.revenue)
        .fetch_optional(&mut *tx)
        .await
        .map_err(store_err)?
        .ok_or_else(|| DomainError::not_found("AnimalStats", user_id))?;

        tx.commit().await.map_err(store_err)?;

        let session = WorkSession {
            goal_met,
            ..WorkSession::from(session_row)
        };
        let stats: AnimalStats = stats_row.into();

        Ok(SaleApplied {
            sale: sale_row.into(),
            stats,
            session,
        })
    }
}
