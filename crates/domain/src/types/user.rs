//! Team member identity

use serde::{Deserialize, Serialize};

use crate::fields::{FieldAccess, FieldValue};

/// A team member referenced by the other collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl FieldAccess for User {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            _ => FieldValue::Absent,
        }
    }
}
