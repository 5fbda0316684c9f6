use crate::models::line_activity::NewLineActivity;
use crate::processor::store::ActivityStore;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

/// An observation within this many minutes of a span's last update extends it.
pub const ACTIVITY_THRESHOLD_MINUTES: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Extended { activity_id: i64 },
    Created { activity_id: i64 },
}

/// Folds one observation of `vehicle_id` on `line_id` into the activity history.
///
/// Extends the open span when one was updated within the merge window before
/// `recorded_at`, otherwise opens a new span. The extend path writes
/// `recorded_at` as-is, so a late event inside the window can move `updated_at`
/// backwards.
///
/// The lookup and the write are separate statements; concurrent callers must be
/// serialized upstream.
pub async fn merge_activity(
    store: &dyn ActivityStore,
    vehicle_id: Uuid,
    line_id: Uuid,
    recorded_at: DateTime<FixedOffset>,
    service_date: NaiveDate,
) -> anyhow::Result<MergeOutcome> {
    let recorded_at = recorded_at.with_timezone(&Utc);
    let floor = recorded_at - Duration::minutes(ACTIVITY_THRESHOLD_MINUTES);

    match store.find_open_span(vehicle_id, line_id, floor).await? {
        Some(current) => {
            store.touch(current.id, recorded_at).await?;
            debug!(
                activity_id = current.id,
                %vehicle_id,
                %line_id,
                previous_updated_at = %current.updated_at,
                %recorded_at,
                "Extended line activity"
            );
            Ok(MergeOutcome::Extended {
                activity_id: current.id,
            })
        }
        None => {
            let created = store
                .create(NewLineActivity {
                    vehicle_id,
                    line_id,
                    service_date,
                    started_at: recorded_at,
                    updated_at: recorded_at,
                })
                .await?;
            debug!(
                activity_id = created.id,
                %vehicle_id,
                %line_id,
                %service_date,
                %recorded_at,
                "Opened line activity"
            );
            Ok(MergeOutcome::Created {
                activity_id: created.id,
            })
        }
    }
}
