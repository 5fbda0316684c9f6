use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
#[allow(dead_code)]
pub struct LineActivity {
    pub id: i64, // bigserial
    pub vehicle_id: Uuid,
    pub line_id: Uuid,
    pub service_date: NaiveDate,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineActivity {
    pub vehicle_id: Uuid,
    pub line_id: Uuid,
    pub service_date: NaiveDate,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
