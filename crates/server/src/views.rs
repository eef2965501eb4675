//! Per-page table view definitions
//!
//! Each page of the dashboard owns its column list; this module holds those
//! lists as [`TableView`] builders. Field-bound columns opt into sorting,
//! derived columns (resolved user names, formatted dates, badge-style
//! status text) render through closures and never sort.

use std::collections::HashMap;
use std::sync::Arc;

use trackboard_common::time::{format_display_date, format_display_datetime};
use trackboard_core::{Column, TableView};
use trackboard_domain::constants::UNKNOWN_USER;
use trackboard_domain::types::{
    DailyStatus, Deployment, MergeRequest, SonarFix, Sprint, SprintItem, SprintItemStatus, Task,
    UnitTestImprovement, User,
};
use trackboard_domain::{FieldAccess, FieldValue};

/// Id → display-name lookup with the "Unknown" fallback for broken
/// references. Cheap to clone into derived-column closures.
#[derive(Clone, Default)]
pub struct UserDirectory {
    names: Arc<HashMap<String, String>>,
}

impl UserDirectory {
    pub fn new(users: &[User]) -> Self {
        let names =
            users.iter().map(|user| (user.id.clone(), user.name.clone())).collect::<HashMap<_, _>>();
        Self { names: Arc::new(names) }
    }

    pub fn name_or_unknown(&self, id: &str) -> String {
        self.names.get(id).cloned().unwrap_or_else(|| UNKNOWN_USER.to_string())
    }
}

/// A task flattened out of its daily status, with the owner's name resolved.
#[derive(Debug, Clone)]
pub struct TaskRow {
    pub id: String,
    pub user: String,
    pub description: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub dependency: String,
    pub status: trackboard_domain::types::TaskStatus,
}

impl FieldAccess for TaskRow {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "user" => self.user.as_str().into(),
            "description" => self.description.as_str().into(),
            "startDate" => self.start_date.to_string().into(),
            "endDate" => self.end_date.to_string().into(),
            "dependency" => self.dependency.as_str().into(),
            "status" => self.status.as_str().into(),
            _ => FieldValue::Absent,
        }
    }
}

/// Flatten embedded tasks, carrying each status's owner name along.
pub fn task_rows(statuses: &[DailyStatus], users: &UserDirectory) -> Vec<TaskRow> {
    statuses
        .iter()
        .flat_map(|status| {
            let user = users.name_or_unknown(&status.user_id);
            status.tasks.iter().map(move |task| to_task_row(task, user.clone()))
        })
        .collect()
}

fn to_task_row(task: &Task, user: String) -> TaskRow {
    TaskRow {
        id: task.id.clone(),
        user,
        description: task.description.clone(),
        start_date: task.start_date,
        end_date: task.end_date,
        dependency: task.dependency.clone(),
        status: task.status,
    }
}

/// Task overview table of the daily status page.
pub fn daily_status_view() -> TableView<TaskRow> {
    TableView::new(
        vec![
            Column::field("Task ID", "id").sortable(),
            Column::field("Developer", "user").sortable(),
            Column::field("Description", "description").sortable(),
            Column::derived("Start Date", |row: &TaskRow| format_display_date(row.start_date)),
            Column::derived("End Date", |row: &TaskRow| format_display_date(row.end_date)),
            Column::derived("Status", |row: &TaskRow| row.status.to_string()),
            Column::field("Dependency", "dependency").sortable(),
        ],
        |row: &TaskRow| row.id.clone(),
    )
}

/// Planned leaves table of the daily status page.
pub fn leaves_view(users: UserDirectory) -> TableView<DailyStatus> {
    TableView::new(
        vec![
            Column::derived("Team Member", move |status: &DailyStatus| {
                users.name_or_unknown(&status.user_id)
            }),
            Column::field("Date", "date").sortable(),
            Column::field("Leaves Planned", "leavesPlanned").sortable(),
            Column::derived("Tasks Count", |status: &DailyStatus| status.tasks.len().to_string()),
        ],
        |status: &DailyStatus| status.id.clone(),
    )
}

pub fn deployments_view() -> TableView<Deployment> {
    TableView::new(
        vec![
            Column::field("Squad", "squadNumber").sortable(),
            Column::field("Details", "details").sortable(),
            Column::derived("Environment", |deployment: &Deployment| {
                deployment.environment.to_string()
            }),
            Column::field("Date", "date").sortable(),
            Column::derived("Status", |deployment: &Deployment| deployment.status.to_string()),
        ],
        |deployment: &Deployment| deployment.id.clone(),
    )
}

pub fn sonar_view(users: UserDirectory) -> TableView<SonarFix> {
    TableView::new(
        vec![
            Column::derived("Severity", |fix: &SonarFix| fix.severity.to_string()),
            Column::derived("Assignee", move |fix: &SonarFix| {
                users.name_or_unknown(&fix.assignee_id)
            }),
            Column::field("Start Date", "startDate").sortable(),
            Column::field("End Date", "endDate").sortable(),
            Column::derived("Status", |fix: &SonarFix| fix.status.to_string()),
            Column::field("Remarks", "remarks"),
        ],
        |fix: &SonarFix| fix.id.clone(),
    )
}

pub fn unit_tests_view(users: UserDirectory) -> TableView<UnitTestImprovement> {
    TableView::new(
        vec![
            Column::field("Component", "componentName").sortable(),
            Column::derived("Developer", move |improvement: &UnitTestImprovement| {
                users.name_or_unknown(&improvement.assignee_id)
            }),
            Column::field("Start Date", "startDate").sortable(),
            Column::field("End Date", "endDate").sortable(),
            Column::derived("Current", |improvement: &UnitTestImprovement| {
                format!("{}%", improvement.current_coverage)
            }),
            Column::derived("Target", |improvement: &UnitTestImprovement| {
                format!("{}%", improvement.improved_coverage)
            }),
            Column::derived("Status", |improvement: &UnitTestImprovement| {
                improvement.status.to_string()
            }),
        ],
        |improvement: &UnitTestImprovement| improvement.id.clone(),
    )
}

/// Sprints table; the items column counts done/total items per sprint.
pub fn sprints_view(items: Vec<SprintItem>) -> TableView<Sprint> {
    TableView::new(
        vec![
            Column::field("Sprint", "name").sortable(),
            Column::field("Start Date", "startDate").sortable(),
            Column::field("End Date", "endDate").sortable(),
            Column::derived("Status", |sprint: &Sprint| sprint.status.to_string()),
            Column::derived("Items", move |sprint: &Sprint| {
                let total = items.iter().filter(|item| item.sprint_id == sprint.id).count();
                let done = items
                    .iter()
                    .filter(|item| {
                        item.sprint_id == sprint.id && item.status == SprintItemStatus::Done
                    })
                    .count();
                format!("{done}/{total}")
            }),
        ],
        |sprint: &Sprint| sprint.id.clone(),
    )
}

pub fn sprint_items_view(users: UserDirectory, sprints: Vec<Sprint>) -> TableView<SprintItem> {
    TableView::new(
        vec![
            Column::derived("Type", |item: &SprintItem| item.item_type.to_string()),
            Column::field("Title", "title").sortable(),
            Column::derived("Sprint", move |item: &SprintItem| {
                sprints
                    .iter()
                    .find(|sprint| sprint.id == item.sprint_id)
                    .map_or_else(|| UNKNOWN_USER.to_string(), |sprint| sprint.name.clone())
            }),
            Column::derived("Assignee", move |item: &SprintItem| {
                users.name_or_unknown(&item.assignee_id)
            }),
            Column::derived("Status", |item: &SprintItem| item.status.to_string()),
        ],
        |item: &SprintItem| item.id.clone(),
    )
}

pub fn merge_requests_view(users: UserDirectory) -> TableView<MergeRequest> {
    let requestors = users.clone();
    TableView::new(
        vec![
            Column::field("MR ID", "mrId").sortable(),
            Column::derived("Requestor", move |mr: &MergeRequest| {
                requestors.name_or_unknown(&mr.requestor_id)
            }),
            Column::derived("Reviewer", move |mr: &MergeRequest| {
                users.name_or_unknown(&mr.reviewer_id)
            }),
            Column::field("Description", "description").sortable(),
            Column::derived("Created", |mr: &MergeRequest| format_display_datetime(mr.created_at)),
            Column::derived("Updated", |mr: &MergeRequest| format_display_datetime(mr.updated_at)),
            Column::derived("Status", |mr: &MergeRequest| mr.status.to_string()),
        ],
        |mr: &MergeRequest| mr.id.clone(),
    )
}

#[cfg(test)]
mod tests {
    use trackboard_domain::fixtures;

    use super::*;

    #[test]
    fn task_rows_resolve_user_names_with_unknown_fallback() {
        let state = fixtures::sample_state_seeded(41);
        let directory = UserDirectory::new(&state.users);

        let rows = task_rows(&state.daily_statuses, &directory);
        assert_eq!(rows.len(), state.all_tasks().count());
        assert!(rows.iter().all(|row| row.user != UNKNOWN_USER));

        let empty_directory = UserDirectory::default();
        let orphaned = task_rows(&state.daily_statuses, &empty_directory);
        assert!(orphaned.iter().all(|row| row.user == UNKNOWN_USER));
    }

    #[test]
    fn sprint_items_column_counts_done_over_total() {
        let state = fixtures::sample_state_seeded(42);
        let sprint = state.sprints[0].clone();
        let view = sprints_view(state.sprint_items.clone());

        let rows = view.rows(&[sprint.clone()]);
        let cells = match &rows[0] {
            trackboard_core::Row::Data { cells, .. } => cells.clone(),
            other => panic!("expected data row, got {other:?}"),
        };

        let total =
            state.sprint_items.iter().filter(|item| item.sprint_id == sprint.id).count();
        assert!(cells[4].ends_with(&format!("/{total}")));
    }

    #[test]
    fn derived_columns_never_sort() {
        let mut view = deployments_view();
        view.toggle_sort("environment");
        assert!(view.sort().is_none(), "environment renders derived and cannot sort");

        view.toggle_sort("squadNumber");
        assert!(view.sort().is_some());
    }
}
