//! Daily status records with embedded tasks

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{FieldAccess, FieldValue};

/// Lifecycle of a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work owned by a daily status entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub developer_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub dependency: String,
    pub description: String,
    pub remarks: String,
    pub status: TaskStatus,
}

impl FieldAccess for Task {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "developerId" => self.developer_id.as_str().into(),
            "startDate" => self.start_date.to_string().into(),
            "endDate" => self.end_date.to_string().into(),
            "dependency" => self.dependency.as_str().into(),
            "description" => self.description.as_str().into(),
            "remarks" => self.remarks.as_str().into(),
            "status" => self.status.as_str().into(),
            _ => FieldValue::Absent,
        }
    }
}

/// Root aggregate for one team member's day. Tasks are embedded here in the
/// local store; the hosted backend keeps them as a separate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatus {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub leaves_planned: String,
}

impl FieldAccess for DailyStatus {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "userId" => self.user_id.as_str().into(),
            "date" => self.date.to_string().into(),
            "leavesPlanned" => self.leaves_planned.as_str().into(),
            _ => FieldValue::Absent,
        }
    }
}
