//! Collection query and creation routes
//!
//! `GET /api/collections/{name}` maps query parameters onto a
//! [`CollectionQuery`]: `select` and `order` are reserved, every other
//! parameter becomes an equality filter. The sentinel value `all` (and
//! missing values) constrain nothing.
//!
//! `POST /api/collections/{name}` is the form-submission data path: the
//! record is validated, given an id when it lacks one, and inserted through
//! the configured backend.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde_json::Value;
use trackboard_common::validation::{rules, ValidationError};
use trackboard_core::CollectionQuery;
use uuid::Uuid;

use super::{ApiError, SharedState};

pub async fn select_collection(
    State(ctx): State<SharedState>,
    Path(name): Path<String>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let query = build_query(params);
    Ok(Json(ctx.collections.select(&name, &query).await?))
}

pub async fn create_record(
    State(ctx): State<SharedState>,
    Path(name): Path<String>,
    Json(mut row): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let object = row
        .as_object_mut()
        .ok_or_else(|| ApiError::BadRequest("record body must be a JSON object".to_string()))?;

    // Client-generated id, assigned here when the form did not send one.
    let missing_id = object.get("id").and_then(Value::as_str).map_or(true, str::is_empty);
    if missing_id {
        object.insert("id".to_string(), Value::String(Uuid::new_v4().simple().to_string()));
    }

    validate_record(&name, &row)?;

    let stored = ctx.collections.insert(&name, row).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

fn build_query(params: BTreeMap<String, String>) -> CollectionQuery {
    let mut query = CollectionQuery::new();

    for (key, value) in params {
        match key.as_str() {
            "select" => query = query.select(value),
            "order" => {
                let (column, ascending) = parse_order(&value);
                query = query.order_by(column, ascending);
            }
            _ => query = query.filter_opt(key, Some(value)),
        }
    }

    query
}

/// Parse `column.asc` / `column.desc`; a bare column is ascending.
fn parse_order(raw: &str) -> (String, bool) {
    match raw.rsplit_once('.') {
        Some((column, "desc")) => (column.to_string(), false),
        Some((column, "asc")) => (column.to_string(), true),
        _ => (raw.to_string(), true),
    }
}

fn str_field<'a>(row: &'a Value, field: &str) -> &'a str {
    row.get(field).and_then(Value::as_str).unwrap_or("")
}

fn date_field(row: &Value, field: &str) -> Option<NaiveDate> {
    row.get(field).and_then(Value::as_str).and_then(|raw| raw.parse().ok())
}

fn check_date_order(row: &Value, errors: &mut ValidationError) {
    if let (Some(start), Some(end)) = (date_field(row, "startDate"), date_field(row, "endDate")) {
        rules::date_order("startDate", start, end, errors);
    }
}

/// Field-level validation per collection, both wire forms accepted.
fn validate_record(collection: &str, row: &Value) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();

    match collection {
        "users" => {
            rules::required("name", str_field(row, "name"), &mut errors);
        }
        "daily_statuses" | "dailyStatuses" => {
            rules::required("userId", str_field(row, "userId"), &mut errors);
            rules::required("date", str_field(row, "date"), &mut errors);
        }
        "deployments" => {
            rules::required("squadNumber", str_field(row, "squadNumber"), &mut errors);
            rules::required("details", str_field(row, "details"), &mut errors);
            rules::required("date", str_field(row, "date"), &mut errors);
        }
        "sonar_fixes" | "sonarFixes" => {
            rules::required("assigneeId", str_field(row, "assigneeId"), &mut errors);
            check_date_order(row, &mut errors);
        }
        "unit_test_improvements" | "unitTestImprovements" => {
            rules::required("componentName", str_field(row, "componentName"), &mut errors);
            rules::required("assigneeId", str_field(row, "assigneeId"), &mut errors);
            for field in ["currentCoverage", "improvedCoverage"] {
                if let Some(value) = row.get(field).and_then(Value::as_i64) {
                    rules::percentage(field, value, &mut errors);
                }
            }
            check_date_order(row, &mut errors);
        }
        "sprints" => {
            rules::required("name", str_field(row, "name"), &mut errors);
            check_date_order(row, &mut errors);
        }
        "sprint_items" | "sprintItems" => {
            rules::required("title", str_field(row, "title"), &mut errors);
            rules::required("assigneeId", str_field(row, "assigneeId"), &mut errors);
            rules::required("sprintId", str_field(row, "sprintId"), &mut errors);
        }
        "merge_requests" | "mergeRequests" => {
            rules::required("mrId", str_field(row, "mrId"), &mut errors);
            rules::required("requestorId", str_field(row, "requestorId"), &mut errors);
            rules::required("reviewerId", str_field(row, "reviewerId"), &mut errors);
        }
        // Unknown collections fall through to the backend, which answers
        // with its own not-found.
        _ => {}
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn order_param_parses_direction() {
        assert_eq!(parse_order("startDate.desc"), ("startDate".to_string(), false));
        assert_eq!(parse_order("name.asc"), ("name".to_string(), true));
        assert_eq!(parse_order("name"), ("name".to_string(), true));
    }

    #[test]
    fn reserved_params_do_not_become_filters() {
        let params = BTreeMap::from([
            ("select".to_string(), "id,name".to_string()),
            ("order".to_string(), "name.desc".to_string()),
            ("status".to_string(), "open".to_string()),
        ]);

        let query = build_query(params);
        assert_eq!(query.select.as_deref(), Some("id,name"));
        assert_eq!(query.order_by.as_ref().map(|order| order.ascending), Some(false));
        assert_eq!(query.active_filters().collect::<Vec<_>>(), vec![("status", "open")]);
    }

    #[test]
    fn coverage_out_of_range_is_rejected() {
        let row = json!({
            "componentName": "Reporting",
            "assigneeId": "u1",
            "currentCoverage": 120,
            "improvedCoverage": 80
        });

        let result = validate_record("unit_test_improvements", &row);
        assert!(result.is_err());
    }

    #[test]
    fn inverted_dates_are_rejected() {
        let row = json!({
            "assigneeId": "u1",
            "startDate": "2024-05-10",
            "endDate": "2024-05-01"
        });

        assert!(validate_record("sonar_fixes", &row).is_err());
    }

    #[test]
    fn valid_deployment_passes() {
        let row = json!({
            "squadNumber": "Squad 4",
            "details": "Deploy v1.9 with new feature X",
            "date": "2024-05-10"
        });

        assert!(validate_record("deployments", &row).is_ok());
    }
}
