//! Sonar issue fix records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{FieldAccess, FieldValue};

/// Sonar issue severity, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Blocker,
    Critical,
    Major,
    Minor,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blocker => "blocker",
            Self::Critical => "critical",
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SonarStatus {
    Open,
    InProgress,
    Resolved,
}

impl SonarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for SonarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Sonar issue assigned for fixing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonarFix {
    pub id: String,
    pub severity: Severity,
    pub assignee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remarks: String,
    pub status: SonarStatus,
}

impl FieldAccess for SonarFix {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "severity" => self.severity.as_str().into(),
            "assigneeId" => self.assignee_id.as_str().into(),
            "startDate" => self.start_date.to_string().into(),
            "endDate" => self.end_date.to_string().into(),
            "remarks" => self.remarks.as_str().into(),
            "status" => self.status.as_str().into(),
            _ => FieldValue::Absent,
        }
    }
}
