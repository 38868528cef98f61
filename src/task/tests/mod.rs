//! Unit tests for the todo list module.


use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(pub(super) DateTime<Utc>);

impl FixedClock {
    pub(super) fn at_noon() -> Self {
        Self(
            Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0)
                .single()
                .expect("valid fixed timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds the stored JSON record for tasks given as `(id, description, completed)`.
pub(super) fn stored_record(tasks: &[(&str, &str, bool)]) -> String {
    let records: Vec<serde_json::Value> = tasks
        .iter()
        .map(|(id, description, completed)| {
            serde_json::json!({
                "id": id,
                "description": description,
                "completed": completed,
                "created_at": "2024-05-01T08:30:00Z",
            })
        })
        .collect();
    serde_json::Value::Array(records).to_string()
}
