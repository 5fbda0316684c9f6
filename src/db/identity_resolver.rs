use crate::db::{queries, DbPool};
use crate::models::journey::JourneyLine;
use crate::processor::identity::IdentityResolver;
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

/// Upserts vehicles and lines keyed on `(network_ref, ref)`.
#[derive(Clone)]
pub struct PgIdentityResolver {
    pool: DbPool,
}

impl PgIdentityResolver {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityResolver for PgIdentityResolver {
    async fn resolve_vehicle(
        &self,
        network_ref: &str,
        vehicle_ref: &str,
        operator_ref: Option<&str>,
    ) -> anyhow::Result<Uuid> {
        let id: Uuid = sqlx::query_scalar(queries::UPSERT_VEHICLE)
            .bind(Uuid::new_v4())
            .bind(network_ref)
            .bind(vehicle_ref)
            .bind(operator_ref)
            .fetch_one(&self.pool)
            .await
            .with_context(|| format!("importing vehicle {network_ref}/{vehicle_ref}"))?;
        Ok(id)
    }

    async fn resolve_line(
        &self,
        network_ref: &str,
        line: &JourneyLine,
        as_of: DateTime<Utc>,
    ) -> anyhow::Result<Uuid> {
        let upserted: Option<Uuid> = sqlx::query_scalar(queries::UPSERT_LINE)
            .bind(Uuid::new_v4())
            .bind(network_ref)
            .bind(&line.line_ref)
            .bind(&line.number)
            .bind(line.line_type.as_str())
            .bind(line.color.as_deref())
            .bind(line.text_color.as_deref())
            .bind(as_of)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("importing line {network_ref}/{}", line.line_ref))?;

        if let Some(id) = upserted {
            return Ok(id);
        }

        debug!(
            network_ref,
            line_ref = %line.line_ref,
            %as_of,
            "Line metadata is newer than observation, keeping stored values"
        );

        let id: Uuid = sqlx::query_scalar(queries::SELECT_LINE_ID)
            .bind(network_ref)
            .bind(&line.line_ref)
            .fetch_one(&self.pool)
            .await
            .with_context(|| format!("looking up line {network_ref}/{}", line.line_ref))?;
        Ok(id)
    }
}
