//! Deployment records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{FieldAccess, FieldValue};

/// Target environment of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    Dev,
    Qa,
    Uat,
    Prod,
    Other,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Qa => "qa",
            Self::Uat => "uat",
            Self::Prod => "prod",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentStatus {
    Scheduled,
    InProgress,
    Completed,
    Failed,
}

impl DeploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled or executed deployment for a squad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub id: String,
    pub squad_number: String,
    pub details: String,
    pub environment: Environment,
    pub date: NaiveDate,
    pub status: DeploymentStatus,
}

impl FieldAccess for Deployment {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "squadNumber" => self.squad_number.as_str().into(),
            "details" => self.details.as_str().into(),
            "environment" => self.environment.as_str().into(),
            "date" => self.date.to_string().into(),
            "status" => self.status.as_str().into(),
            _ => FieldValue::Absent,
        }
    }
}
