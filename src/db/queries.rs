pub const SELECT_OPEN_LINE_ACTIVITY: &str = r#"
SELECT id, vehicle_id, line_id, service_date, started_at, updated_at
FROM line_activities
WHERE vehicle_id = $1 AND line_id = $2 AND updated_at >= $3
ORDER BY updated_at DESC
LIMIT 1;
"#;

pub const UPDATE_LINE_ACTIVITY_UPDATED_AT: &str = r#"
UPDATE line_activities
SET updated_at = $2
WHERE id = $1;
"#;

pub const INSERT_LINE_ACTIVITY: &str = r#"
INSERT INTO line_activities (vehicle_id, line_id, service_date, started_at, updated_at)
VALUES ($1, $2, $3, $4, $5)
RETURNING id, vehicle_id, line_id, service_date, started_at, updated_at;
"#;

pub const UPSERT_VEHICLE: &str = r#"
INSERT INTO vehicles (id, network_ref, ref, operator_ref)
VALUES ($1, $2, $3, $4)
ON CONFLICT (network_ref, ref) DO UPDATE
SET operator_ref = COALESCE(EXCLUDED.operator_ref, vehicles.operator_ref)
RETURNING id;
"#;

// Metadata is only overwritten by an observation at least as recent as the stored one;
// when the WHERE clause rejects the update no row is returned.
pub const UPSERT_LINE: &str = r#"
INSERT INTO lines (id, network_ref, ref, number, type, color, text_color, updated_at)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
ON CONFLICT (network_ref, ref) DO UPDATE
SET number = EXCLUDED.number,
    type = EXCLUDED.type,
    color = EXCLUDED.color,
    text_color = EXCLUDED.text_color,
    updated_at = EXCLUDED.updated_at
WHERE lines.updated_at <= EXCLUDED.updated_at
RETURNING id;
"#;

pub const SELECT_LINE_ID: &str = r#"
SELECT id FROM lines WHERE network_ref = $1 AND ref = $2;
"#;
