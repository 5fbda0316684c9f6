use crate::models::journey::JourneyLine;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maps feed references to stable internal identities, creating them on first sight.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve_vehicle(
        &self,
        network_ref: &str,
        vehicle_ref: &str,
        operator_ref: Option<&str>,
    ) -> anyhow::Result<Uuid>;

    /// Line metadata can change over time, so resolution is keyed on the observation instant.
    async fn resolve_line(
        &self,
        network_ref: &str,
        line: &JourneyLine,
        as_of: DateTime<Utc>,
    ) -> anyhow::Result<Uuid>;
}
