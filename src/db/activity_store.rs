use crate::db::{queries, DbPool};
use crate::models::line_activity::{LineActivity, NewLineActivity};
use crate::processor::store::ActivityStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Clone)]
pub struct PgActivityStore {
    pool: DbPool,
}

impl PgActivityStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityStore for PgActivityStore {
    async fn find_open_span(
        &self,
        vehicle_id: Uuid,
        line_id: Uuid,
        floor: DateTime<Utc>,
    ) -> anyhow::Result<Option<LineActivity>> {
        let activity = sqlx::query_as::<_, LineActivity>(queries::SELECT_OPEN_LINE_ACTIVITY)
            .bind(vehicle_id)
            .bind(line_id)
            .bind(floor)
            .fetch_optional(&self.pool)
            .await?;
        Ok(activity)
    }

    async fn touch(&self, activity_id: i64, updated_at: DateTime<Utc>) -> anyhow::Result<()> {
        sqlx::query(queries::UPDATE_LINE_ACTIVITY_UPDATED_AT)
            .bind(activity_id)
            .bind(updated_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn create(&self, activity: NewLineActivity) -> anyhow::Result<LineActivity> {
        let created = sqlx::query_as::<_, LineActivity>(queries::INSERT_LINE_ACTIVITY)
            .bind(activity.vehicle_id)
            .bind(activity.line_id)
            .bind(activity.service_date)
            .bind(activity.started_at)
            .bind(activity.updated_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }
}
