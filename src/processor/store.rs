use crate::models::line_activity::{LineActivity, NewLineActivity};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Persistence operations the activity merger relies on.
///
/// No transaction spans a lookup and the write that follows it; callers
/// serialize those pairs themselves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Most recently updated span for the pair whose `updated_at >= floor`, if any.
    async fn find_open_span(
        &self,
        vehicle_id: Uuid,
        line_id: Uuid,
        floor: DateTime<Utc>,
    ) -> anyhow::Result<Option<LineActivity>>;

    /// Moves the span's `updated_at` to the given instant.
    async fn touch(&self, activity_id: i64, updated_at: DateTime<Utc>) -> anyhow::Result<()>;

    async fn create(&self, activity: NewLineActivity) -> anyhow::Result<LineActivity>;
}
