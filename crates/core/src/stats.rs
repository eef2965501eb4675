//! Dashboard summary derivations
//!
//! Pure rollups over the full state snapshot: headline counters plus the
//! "recent activity" slices the overview page shows.

use serde::Serialize;
use trackboard_domain::constants::{RECENT_ITEMS_LIMIT, TOP_COVERAGE_LIMIT};
use trackboard_domain::types::{
    Deployment, MergeRequest, SonarFix, SonarStatus, SprintItemStatus, SprintStatus, TaskStatus,
    UnitTestImprovement,
};
use trackboard_domain::AppState;

/// Headline counters for the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub active_sprints: usize,
    pub done_sprint_items: usize,
    pub pending_merge_requests: usize,
    pub total_merge_requests: usize,
    pub open_sonar_issues: usize,
    pub total_sonar_issues: usize,
}

/// Recent activity slices for the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub deployments: Vec<Deployment>,
    pub sonar_fixes: Vec<SonarFix>,
    pub merge_requests: Vec<MergeRequest>,
    pub top_coverage_improvements: Vec<UnitTestImprovement>,
}

pub fn summarize(state: &AppState) -> DashboardSummary {
    DashboardSummary {
        total_tasks: state.all_tasks().count(),
        completed_tasks: state
            .all_tasks()
            .filter(|task| task.status == TaskStatus::Completed)
            .count(),
        active_sprints: state
            .sprints
            .iter()
            .filter(|sprint| sprint.status == SprintStatus::Active)
            .count(),
        done_sprint_items: state
            .sprint_items
            .iter()
            .filter(|item| item.status == SprintItemStatus::Done)
            .count(),
        pending_merge_requests: state
            .merge_requests
            .iter()
            .filter(|mr| mr.status.is_pending())
            .count(),
        total_merge_requests: state.merge_requests.len(),
        open_sonar_issues: state
            .sonar_fixes
            .iter()
            .filter(|fix| fix.status != SonarStatus::Resolved)
            .count(),
        total_sonar_issues: state.sonar_fixes.len(),
    }
}

pub fn recent_activity(state: &AppState) -> RecentActivity {
    let mut deployments = state.deployments.clone();
    deployments.sort_by(|a, b| b.date.cmp(&a.date));
    deployments.truncate(RECENT_ITEMS_LIMIT);

    let mut sonar_fixes = state.sonar_fixes.clone();
    sonar_fixes.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    sonar_fixes.truncate(RECENT_ITEMS_LIMIT);

    let mut merge_requests = state.merge_requests.clone();
    merge_requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    merge_requests.truncate(RECENT_ITEMS_LIMIT);

    let mut top_coverage_improvements = state.unit_test_improvements.clone();
    top_coverage_improvements.sort_by(|a, b| b.coverage_delta().cmp(&a.coverage_delta()));
    top_coverage_improvements.truncate(TOP_COVERAGE_LIMIT);

    RecentActivity { deployments, sonar_fixes, merge_requests, top_coverage_improvements }
}

#[cfg(test)]
mod tests {
    use trackboard_domain::fixtures;

    use super::*;

    #[test]
    fn counters_agree_with_a_manual_pass() {
        let state = fixtures::sample_state_seeded(21);
        let summary = summarize(&state);

        assert_eq!(summary.total_merge_requests, state.merge_requests.len());
        assert_eq!(summary.total_sonar_issues, state.sonar_fixes.len());
        assert!(summary.completed_tasks <= summary.total_tasks);
        assert!(summary.pending_merge_requests <= summary.total_merge_requests);
        assert_eq!(summary.active_sprints, 1, "fixtures ship exactly one active sprint");
    }

    #[test]
    fn recent_slices_are_bounded_and_ordered() {
        let state = fixtures::sample_state_seeded(22);
        let recent = recent_activity(&state);

        assert!(recent.deployments.len() <= RECENT_ITEMS_LIMIT);
        assert!(recent.sonar_fixes.len() <= RECENT_ITEMS_LIMIT);
        assert!(recent.merge_requests.len() <= RECENT_ITEMS_LIMIT);
        assert!(recent.top_coverage_improvements.len() <= TOP_COVERAGE_LIMIT);

        assert!(recent
            .deployments
            .windows(2)
            .all(|pair| pair[0].date >= pair[1].date));
        assert!(recent
            .top_coverage_improvements
            .windows(2)
            .all(|pair| pair[0].coverage_delta() >= pair[1].coverage_delta()));
    }
}
