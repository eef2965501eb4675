//! Sprint and sprint item records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{FieldAccess, FieldValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SprintStatus {
    Planning,
    Active,
    Completed,
}

impl SprintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for SprintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-length iteration owning sprint items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SprintStatus,
}

impl FieldAccess for Sprint {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "startDate" => self.start_date.to_string().into(),
            "endDate" => self.end_date.to_string().into(),
            "status" => self.status.as_str().into(),
            _ => FieldValue::Absent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    Task,
    SubTask,
    Defect,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::SubTask => "sub-task",
            Self::Defect => "defect",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SprintItemStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl SprintItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for SprintItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A work item scheduled into a sprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub title: String,
    pub assignee_id: String,
    pub status: SprintItemStatus,
    pub sprint_id: String,
}

impl FieldAccess for SprintItem {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "type" => self.item_type.as_str().into(),
            "title" => self.title.as_str().into(),
            "assigneeId" => self.assignee_id.as_str().into(),
            "status" => self.status.as_str().into(),
            "sprintId" => self.sprint_id.as_str().into(),
            _ => FieldValue::Absent,
        }
    }
}
