//! Page view routes
//!
//! `GET /api/views/{page}` renders one dashboard table: records are fetched
//! through the configured collection backend, page filters narrow them
//! (sentinel `all` narrows nothing), and the table view sorts and renders.
//! Sort state round-trips through `sort`/`dir` because the server holds no
//! per-client state. A backend failure still renders: the document carries
//! the error alongside the (then empty) rows.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use trackboard_core::{
    CollectionHandle, CollectionQuery, HeaderCell, Row, SortConfig, SortDirection, TableView,
};
use trackboard_domain::constants::FILTER_ALL;
use trackboard_domain::types::{DailyStatus, Deployment, MergeRequest, SonarFix, Sprint, SprintItem, UnitTestImprovement, User};
use trackboard_domain::FieldAccess;

use super::{ApiError, SharedState};
use crate::views::{self, task_rows, UserDirectory};

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub user: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
    pub severity: Option<String>,
    pub assignee: Option<String>,
    pub environment: Option<String>,
    pub sprint: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub requestor: Option<String>,
    pub reviewer: Option<String>,
}

/// A rendered page table.
#[derive(Debug, Serialize)]
pub struct PageDocument {
    pub page: String,
    pub header: Vec<HeaderCell>,
    pub rows: Vec<Row>,
    pub sort: Option<SortConfig>,
    pub error: Option<String>,
}

pub async fn render_page(
    State(ctx): State<SharedState>,
    Path(page): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageDocument>, ApiError> {
    let document = match page.as_str() {
        "daily-status" => daily_status_page(&ctx, &params).await,
        "leaves" => leaves_page(&ctx, &params).await,
        "deployments" => deployments_page(&ctx, &params).await,
        "sonar" => sonar_page(&ctx, &params).await,
        "unit-tests" => unit_tests_page(&ctx, &params).await,
        "sprints" => sprints_page(&ctx, &params).await,
        "sprint-items" => sprint_items_page(&ctx, &params).await,
        "merge-requests" => merge_requests_page(&ctx, &params).await,
        _ => return Err(ApiError::NotFound(format!("unknown page: {page}"))),
    };

    Ok(Json(document))
}

struct Fetched<T> {
    rows: Vec<T>,
    error: Option<String>,
}

/// Run one collection query through a handle, capturing any failure as a
/// renderable error instead of propagating it.
async fn fetch<T: DeserializeOwned + Clone>(
    ctx: &SharedState,
    collection: &str,
    query: CollectionQuery,
) -> Fetched<T> {
    let mut handle: CollectionHandle<T> =
        CollectionHandle::with_query(Arc::clone(&ctx.collections), collection, query);
    handle.fetch().await;

    Fetched {
        error: handle.error().map(|err| err.message.clone()),
        rows: handle.data().map(<[T]>::to_vec).unwrap_or_default(),
    }
}

/// Apply the requested sort and render the document.
fn finish<T: FieldAccess>(
    page: &str,
    mut view: TableView<T>,
    records: &[T],
    params: &PageParams,
    error: Option<String>,
) -> PageDocument {
    if let Some(sort) = &params.sort {
        let direction = match params.dir.as_deref() {
            Some("desc") => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        view.set_sort(sort, direction);
    }

    PageDocument {
        page: page.to_string(),
        header: view.header(),
        rows: view.rows(records),
        sort: view.sort().cloned(),
        error,
    }
}

fn constrained(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| *value != FILTER_ALL)
}

async fn daily_status_page(ctx: &SharedState, params: &PageParams) -> PageDocument {
    let query = CollectionQuery::new()
        .filter_opt("userId", params.user.clone())
        .filter_opt("date", params.date.clone());

    let statuses: Fetched<DailyStatus> = fetch(ctx, "daily_statuses", query).await;
    let users: Fetched<User> = fetch(ctx, "users", CollectionQuery::new()).await;

    let directory = UserDirectory::new(&users.rows);
    let mut rows = task_rows(&statuses.rows, &directory);

    // Status narrows the flattened tasks, not the daily statuses.
    if let Some(status) = constrained(&params.status) {
        rows.retain(|row| row.status.as_str() == status);
    }

    finish("daily-status", views::daily_status_view(), &rows, params, statuses.error.or(users.error))
}

async fn leaves_page(ctx: &SharedState, params: &PageParams) -> PageDocument {
    let query = CollectionQuery::new()
        .filter_opt("userId", params.user.clone())
        .filter_opt("date", params.date.clone());

    let statuses: Fetched<DailyStatus> = fetch(ctx, "daily_statuses", query).await;
    let users: Fetched<User> = fetch(ctx, "users", CollectionQuery::new()).await;

    let directory = UserDirectory::new(&users.rows);
    let with_leaves: Vec<DailyStatus> = statuses
        .rows
        .into_iter()
        .filter(|status| !status.leaves_planned.is_empty())
        .collect();

    finish("leaves", views::leaves_view(directory), &with_leaves, params, statuses.error.or(users.error))
}

async fn deployments_page(ctx: &SharedState, params: &PageParams) -> PageDocument {
    let query = CollectionQuery::new()
        .filter_opt("environment", params.environment.clone())
        .filter_opt("status", params.status.clone());

    let deployments: Fetched<Deployment> = fetch(ctx, "deployments", query).await;

    finish("deployments", views::deployments_view(), &deployments.rows, params, deployments.error)
}

async fn sonar_page(ctx: &SharedState, params: &PageParams) -> PageDocument {
    let query = CollectionQuery::new()
        .filter_opt("severity", params.severity.clone())
        .filter_opt("status", params.status.clone())
        .filter_opt("assigneeId", params.assignee.clone());

    let fixes: Fetched<SonarFix> = fetch(ctx, "sonar_fixes", query).await;
    let users: Fetched<User> = fetch(ctx, "users", CollectionQuery::new()).await;

    let directory = UserDirectory::new(&users.rows);
    finish("sonar", views::sonar_view(directory), &fixes.rows, params, fixes.error.or(users.error))
}

async fn unit_tests_page(ctx: &SharedState, params: &PageParams) -> PageDocument {
    let query = CollectionQuery::new()
        .filter_opt("status", params.status.clone())
        .filter_opt("assigneeId", params.assignee.clone());

    let improvements: Fetched<UnitTestImprovement> =
        fetch(ctx, "unit_test_improvements", query).await;
    let users: Fetched<User> = fetch(ctx, "users", CollectionQuery::new()).await;

    let directory = UserDirectory::new(&users.rows);
    finish(
        "unit-tests",
        views::unit_tests_view(directory),
        &improvements.rows,
        params,
        improvements.error.or(users.error),
    )
}

async fn sprints_page(ctx: &SharedState, params: &PageParams) -> PageDocument {
    let query = CollectionQuery::new().filter_opt("status", params.status.clone());

    let sprints: Fetched<Sprint> = fetch(ctx, "sprints", query).await;
    let items: Fetched<SprintItem> = fetch(ctx, "sprint_items", CollectionQuery::new()).await;

    finish(
        "sprints",
        views::sprints_view(items.rows),
        &sprints.rows,
        params,
        sprints.error.or(items.error),
    )
}

async fn sprint_items_page(ctx: &SharedState, params: &PageParams) -> PageDocument {
    let query = CollectionQuery::new()
        .filter_opt("sprintId", params.sprint.clone())
        .filter_opt("status", params.status.clone())
        .filter_opt("type", params.item_type.clone());

    let items: Fetched<SprintItem> = fetch(ctx, "sprint_items", query).await;
    let sprints: Fetched<Sprint> = fetch(ctx, "sprints", CollectionQuery::new()).await;
    let users: Fetched<User> = fetch(ctx, "users", CollectionQuery::new()).await;

    let directory = UserDirectory::new(&users.rows);
    finish(
        "sprint-items",
        views::sprint_items_view(directory, sprints.rows),
        &items.rows,
        params,
        items.error.or(sprints.error).or(users.error),
    )
}

async fn merge_requests_page(ctx: &SharedState, params: &PageParams) -> PageDocument {
    let query = CollectionQuery::new()
        .filter_opt("status", params.status.clone())
        .filter_opt("requestorId", params.requestor.clone())
        .filter_opt("reviewerId", params.reviewer.clone());

    let merge_requests: Fetched<MergeRequest> = fetch(ctx, "merge_requests", query).await;
    let users: Fetched<User> = fetch(ctx, "users", CollectionQuery::new()).await;

    let directory = UserDirectory::new(&users.rows);
    finish(
        "merge-requests",
        views::merge_requests_view(directory),
        &merge_requests.rows,
        params,
        merge_requests.error.or(users.error),
    )
}
