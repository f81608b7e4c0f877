use chrono::{DateTime, Utc};

use crate::domain::model::{ProjectStatus, Record};

pub const CLOSING_TIME_FIELD: &str = "TimeClosed";

/// Classifies one project against `now`.
///
/// Closing strictly after `now` is active, anything at or before `now` is closed. Projects
/// without a closing time, or with one that cannot be read, are active.
pub fn classify(project: &Record, now: DateTime<Utc>) -> ProjectStatus {
    match project.get(CLOSING_TIME_FIELD) {
        None | Some(serde_json::Value::Null) => ProjectStatus::Active,
        Some(raw) => match project.get_timestamp(CLOSING_TIME_FIELD) {
            Some(closing) if closing > now => ProjectStatus::Active,
            Some(_) => ProjectStatus::Closed,
            None => {
                tracing::warn!(
                    "Unreadable {} value {}, treating as active",
                    CLOSING_TIME_FIELD,
                    raw
                );
                ProjectStatus::Active
            }
        },
    }
}

pub fn filter_by_status(
    projects: &[Record],
    status: ProjectStatus,
    now: DateTime<Utc>,
) -> Vec<Record> {
    projects
        .iter()
        .filter(|project| classify(project, now) == status)
        .cloned()
        .collect()
}

/// 以 `now` 將專案分為 (active, closed)
pub fn partition(projects: &[Record], now: DateTime<Utc>) -> (Vec<Record>, Vec<Record>) {
    projects
        .iter()
        .cloned()
        .partition(|project| classify(project, now) == ProjectStatus::Active)
}
