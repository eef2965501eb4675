//! Local collection backend over the state store.
//!
//! Answers collection queries from the in-process snapshot: conjunctive
//! equality filters (sentinel values constrain nothing), optional
//! single-column ordering with absent-last semantics, optional column
//! projection. Collection names are accepted in both wire forms
//! (`daily_statuses` and `dailyStatuses`).
//!
//! The hosted backend keeps tasks as their own table while the local blob
//! embeds them in daily statuses; `tasks` queries here are answered by
//! flattening the embedded lists so both backends expose the same
//! collections. Inserting a standalone task is rejected; tasks enter
//! through their daily status.

use async_trait::async_trait;
use serde_json::{Map, Value};
use trackboard_core::query::ports::CollectionStore;
use trackboard_core::table::{compare_values, SortDirection};
use trackboard_core::{CollectionQuery, StatePatch};
use trackboard_domain::types::{
    DailyStatus, Deployment, MergeRequest, SonarFix, Sprint, SprintItem, UnitTestImprovement, User,
};
use trackboard_domain::{AppState, FieldValue, Result, TrackboardError};

use super::SharedStateStore;

/// `CollectionStore` implementation over the shared state store.
pub struct LocalBackend {
    store: SharedStateStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collection {
    Users,
    DailyStatuses,
    Tasks,
    Deployments,
    SonarFixes,
    UnitTestImprovements,
    Sprints,
    SprintItems,
    MergeRequests,
}

impl Collection {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "users" => Some(Self::Users),
            "daily_statuses" | "dailyStatuses" => Some(Self::DailyStatuses),
            "tasks" => Some(Self::Tasks),
            "deployments" => Some(Self::Deployments),
            "sonar_fixes" | "sonarFixes" => Some(Self::SonarFixes),
            "unit_test_improvements" | "unitTestImprovements" => Some(Self::UnitTestImprovements),
            "sprints" => Some(Self::Sprints),
            "sprint_items" | "sprintItems" => Some(Self::SprintItems),
            "merge_requests" | "mergeRequests" => Some(Self::MergeRequests),
            _ => None,
        }
    }
}

impl LocalBackend {
    pub fn new(store: SharedStateStore) -> Self {
        Self { store }
    }

    fn rows(state: &AppState, collection: Collection) -> Result<Vec<Value>> {
        match collection {
            Collection::Users => to_rows(&state.users),
            Collection::DailyStatuses => to_rows(&state.daily_statuses),
            Collection::Tasks => to_rows(&state.all_tasks().cloned().collect::<Vec<_>>()),
            Collection::Deployments => to_rows(&state.deployments),
            Collection::SonarFixes => to_rows(&state.sonar_fixes),
            Collection::UnitTestImprovements => to_rows(&state.unit_test_improvements),
            Collection::Sprints => to_rows(&state.sprints),
            Collection::SprintItems => to_rows(&state.sprint_items),
            Collection::MergeRequests => to_rows(&state.merge_requests),
        }
    }
}

fn to_rows<T: serde::Serialize>(records: &[T]) -> Result<Vec<Value>> {
    records
        .iter()
        .map(|record| {
            serde_json::to_value(record)
                .map_err(|err| TrackboardError::Serialization(err.to_string()))
        })
        .collect()
}

fn field_of(row: &Value, name: &str) -> FieldValue {
    FieldValue::from_json(row.get(name).unwrap_or(&Value::Null))
}

fn matches(row: &Value, field: &str, expected: &str) -> bool {
    match field_of(row, field) {
        FieldValue::Text(value) => value == expected,
        FieldValue::Number(value) => {
            expected.parse::<f64>().is_ok_and(|parsed| (parsed - value).abs() < f64::EPSILON)
        }
        FieldValue::Absent => false,
    }
}

fn apply_order(rows: &mut [Value], column: &str, ascending: bool) {
    let direction = if ascending { SortDirection::Ascending } else { SortDirection::Descending };
    rows.sort_by(|a, b| compare_values(&field_of(a, column), &field_of(b, column), direction));
}

fn project(rows: Vec<Value>, select: &str) -> Vec<Value> {
    let columns: Vec<&str> =
        select.split(',').map(str::trim).filter(|column| !column.is_empty()).collect();
    if columns.is_empty() || columns.contains(&"*") {
        return rows;
    }

    rows.into_iter()
        .map(|row| match row {
            Value::Object(fields) => {
                let mut projected = Map::new();
                for column in &columns {
                    if let Some(value) = fields.get(*column) {
                        projected.insert((*column).to_string(), value.clone());
                    }
                }
                Value::Object(projected)
            }
            other => other,
        })
        .collect()
}

fn parse_record<T: serde::de::DeserializeOwned>(collection: &str, row: Value) -> Result<T> {
    serde_json::from_value(row).map_err(|err| {
        TrackboardError::InvalidInput(format!("invalid {collection} record: {err}"))
    })
}

#[async_trait]
impl CollectionStore for LocalBackend {
    async fn select(&self, collection: &str, query: &CollectionQuery) -> Result<Vec<Value>> {
        let collection = Collection::parse(collection).ok_or_else(|| {
            TrackboardError::NotFound(format!("unknown collection: {collection}"))
        })?;

        let mut rows = {
            let store = self.store.read().await;
            Self::rows(store.state(), collection)?
        };

        for (field, expected) in query.active_filters() {
            rows.retain(|row| matches(row, field, expected));
        }

        if let Some(order) = &query.order_by {
            apply_order(&mut rows, &order.column, order.ascending);
        }

        if let Some(select) = &query.select {
            rows = project(rows, select);
        }

        Ok(rows)
    }

    async fn insert(&self, collection: &str, row: Value) -> Result<Value> {
        let parsed = Collection::parse(collection).ok_or_else(|| {
            TrackboardError::NotFound(format!("unknown collection: {collection}"))
        })?;

        let stored = row.clone();

        let mut store = self.store.write().await;
        let state = store.state();

        let patch = match parsed {
            Collection::Users => {
                let record: User = parse_record("users", row)?;
                let mut users = state.users.clone();
                users.push(record);
                StatePatch::new().users(users)
            }
            Collection::DailyStatuses => {
                let record: DailyStatus = parse_record("daily_statuses", row)?;
                let mut daily_statuses = state.daily_statuses.clone();
                daily_statuses.push(record);
                StatePatch::new().daily_statuses(daily_statuses)
            }
            Collection::Tasks => {
                return Err(TrackboardError::InvalidInput(
                    "tasks are embedded in daily statuses in the local store".to_string(),
                ));
            }
            Collection::Deployments => {
                let record: Deployment = parse_record("deployments", row)?;
                let mut deployments = state.deployments.clone();
                deployments.push(record);
                StatePatch::new().deployments(deployments)
            }
            Collection::SonarFixes => {
                let record: SonarFix = parse_record("sonar_fixes", row)?;
                let mut sonar_fixes = state.sonar_fixes.clone();
                sonar_fixes.push(record);
                StatePatch::new().sonar_fixes(sonar_fixes)
            }
            Collection::UnitTestImprovements => {
                let record: UnitTestImprovement = parse_record("unit_test_improvements", row)?;
                let mut improvements = state.unit_test_improvements.clone();
                improvements.push(record);
                StatePatch::new().unit_test_improvements(improvements)
            }
            Collection::Sprints => {
                let record: Sprint = parse_record("sprints", row)?;
                let mut sprints = state.sprints.clone();
                sprints.push(record);
                StatePatch::new().sprints(sprints)
            }
            Collection::SprintItems => {
                let record: SprintItem = parse_record("sprint_items", row)?;
                let mut sprint_items = state.sprint_items.clone();
                sprint_items.push(record);
                StatePatch::new().sprint_items(sprint_items)
            }
            Collection::MergeRequests => {
                let record: MergeRequest = parse_record("merge_requests", row)?;
                let mut merge_requests = state.merge_requests.clone();
                merge_requests.push(record);
                StatePatch::new().merge_requests(merge_requests)
            }
        };

        store.apply(patch).await?;
        Ok(stored)
    }
}
