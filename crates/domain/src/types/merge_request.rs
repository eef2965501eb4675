//! Merge request records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::{FieldAccess, FieldValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeRequestStatus {
    Open,
    UnderReview,
    ChangesRequested,
    Approved,
    Merged,
}

impl MergeRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::UnderReview => "under-review",
            Self::ChangesRequested => "changes-requested",
            Self::Approved => "approved",
            Self::Merged => "merged",
        }
    }

    /// Pending means still awaiting a terminal review outcome.
    pub fn is_pending(&self) -> bool {
        !matches!(self, Self::Merged | Self::Approved)
    }
}

impl std::fmt::Display for MergeRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A merge request under review. The reviewer is intended to differ from the
/// requestor; nothing enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRequest {
    pub id: String,
    pub mr_id: String,
    pub requestor_id: String,
    pub reviewer_id: String,
    pub description: String,
    pub status: MergeRequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FieldAccess for MergeRequest {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "mrId" => self.mr_id.as_str().into(),
            "requestorId" => self.requestor_id.as_str().into(),
            "reviewerId" => self.reviewer_id.as_str().into(),
            "description" => self.description.as_str().into(),
            "status" => self.status.as_str().into(),
            "createdAt" => self.created_at.to_rfc3339().into(),
            "updatedAt" => self.updated_at.to_rfc3339().into(),
            _ => FieldValue::Absent,
        }
    }
}
