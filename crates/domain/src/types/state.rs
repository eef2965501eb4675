//! Process-wide application state shape

use serde::{Deserialize, Serialize};

use super::{
    DailyStatus, Deployment, MergeRequest, SonarFix, Sprint, SprintItem, UnitTestImprovement, User,
};
use crate::constants::UNKNOWN_USER;

/// Complete snapshot of every tracked collection.
///
/// This is the exact shape of the persisted blob: camelCase keys, all eight
/// collections plus users, no extra metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub users: Vec<User>,
    pub daily_statuses: Vec<DailyStatus>,
    pub deployments: Vec<Deployment>,
    pub sonar_fixes: Vec<SonarFix>,
    pub unit_test_improvements: Vec<UnitTestImprovement>,
    pub sprints: Vec<Sprint>,
    pub sprint_items: Vec<SprintItem>,
    pub merge_requests: Vec<MergeRequest>,
}

impl AppState {
    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Resolve a user id to a display name, degrading to the "Unknown"
    /// sentinel when the reference is broken.
    pub fn user_name_or_unknown(&self, id: &str) -> String {
        self.find_user(id).map_or_else(|| UNKNOWN_USER.to_string(), |user| user.name.clone())
    }

    pub fn find_sprint(&self, id: &str) -> Option<&Sprint> {
        self.sprints.iter().find(|sprint| sprint.id == id)
    }

    /// All tasks across every daily status, in entry order.
    pub fn all_tasks(&self) -> impl Iterator<Item = &super::Task> {
        self.daily_statuses.iter().flat_map(|status| status.tasks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_falls_back_to_sentinel() {
        let state = AppState::default();
        assert_eq!(state.user_name_or_unknown("nope"), UNKNOWN_USER);
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = crate::fixtures::sample_state_seeded(7);
        let blob = serde_json::to_string(&state).expect("state serializes");
        let restored: AppState = serde_json::from_str(&blob).expect("state deserializes");
        assert_eq!(state, restored);
    }
}
