//! Fixture data generation
//!
//! Produces a populated [`AppState`] for first runs where no persisted blob
//! exists yet. Shapes and value pools match the sample data the dashboard
//! ships with: eight users, a working week of daily statuses per user, and a
//! realistic spread of deployments, Sonar fixes, coverage work, sprints and
//! merge requests.

use chrono::{Days, NaiveDate, Utc};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{
    AppState, DailyStatus, Deployment, DeploymentStatus, Environment, ItemType, MergeRequest,
    MergeRequestStatus, Severity, SonarFix, SonarStatus, Sprint, SprintItem, SprintItemStatus,
    SprintStatus, Task, TaskStatus, UnitTestImprovement, UnitTestStatus, User,
};

const USER_NAMES: [&str; 8] = [
    "John Smith",
    "Sarah Johnson",
    "Michael Chen",
    "Emma Wilson",
    "David Rodriguez",
    "Lisa Brown",
    "Ahmed Khan",
    "Priya Patel",
];

const COMPONENT_NAMES: [&str; 7] = [
    "Authentication",
    "User Profile",
    "Dashboard",
    "Reporting",
    "API Integration",
    "Payment Processing",
    "Notifications",
];

/// Generate a fully populated sample state.
pub fn sample_state() -> AppState {
    generate(&mut rand::thread_rng())
}

/// Seeded variant for reproducible tests.
pub fn sample_state_seeded(seed: u64) -> AppState {
    generate(&mut StdRng::seed_from_u64(seed))
}

fn generate<R: Rng>(rng: &mut R) -> AppState {
    let users = generate_users(rng);
    let sprints = generate_sprints(rng);

    AppState {
        daily_statuses: generate_daily_statuses(rng, &users),
        deployments: generate_deployments(rng),
        sonar_fixes: generate_sonar_fixes(rng, &users),
        unit_test_improvements: generate_unit_test_improvements(rng, &users),
        sprint_items: generate_sprint_items(rng, &sprints, &users),
        merge_requests: generate_merge_requests(rng, &users),
        sprints,
        users,
    }
}

fn generate_id<R: Rng>(rng: &mut R) -> String {
    (0..8).map(|_| (rng.sample(Alphanumeric) as char).to_ascii_lowercase()).collect()
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(date)
}

fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

fn pick<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

fn generate_users<R: Rng>(rng: &mut R) -> Vec<User> {
    USER_NAMES.iter().map(|name| User { id: generate_id(rng), name: (*name).to_string() }).collect()
}

fn generate_daily_statuses<R: Rng>(rng: &mut R, users: &[User]) -> Vec<DailyStatus> {
    let task_statuses =
        [TaskStatus::NotStarted, TaskStatus::InProgress, TaskStatus::Completed, TaskStatus::Blocked];
    let mut statuses = Vec::new();

    for user in users {
        for offset in 0..5 {
            let date = days_before(today(), offset);
            let task_count = rng.gen_range(1..=3);

            let tasks = (0..task_count)
                .map(|index| Task {
                    id: generate_id(rng),
                    developer_id: user.id.clone(),
                    start_date: days_before(date, rng.gen_range(0..7)),
                    end_date: days_after(date, rng.gen_range(0..7)),
                    dependency: if rng.gen_bool(0.3) {
                        "Depends on API integration".to_string()
                    } else {
                        String::new()
                    },
                    description: format!("Task {} for {}", index + 1, user.name),
                    remarks: if rng.gen_bool(0.3) {
                        "Making good progress".to_string()
                    } else {
                        String::new()
                    },
                    status: *pick(rng, &task_statuses),
                })
                .collect();

            statuses.push(DailyStatus {
                id: generate_id(rng),
                user_id: user.id.clone(),
                date,
                tasks,
                leaves_planned: if rng.gen_bool(0.1) {
                    "2023-05-15 to 2023-05-20".to_string()
                } else {
                    String::new()
                },
            });
        }
    }

    statuses
}

fn generate_deployments<R: Rng>(rng: &mut R) -> Vec<Deployment> {
    let environments =
        [Environment::Dev, Environment::Qa, Environment::Uat, Environment::Prod, Environment::Other];
    let statuses = [
        DeploymentStatus::Scheduled,
        DeploymentStatus::InProgress,
        DeploymentStatus::Completed,
        DeploymentStatus::Failed,
    ];

    (0..10)
        .map(|index| Deployment {
            id: generate_id(rng),
            squad_number: format!("Squad {}", rng.gen_range(1..=5)),
            details: format!("Deploy v1.{index} with new feature X"),
            environment: *pick(rng, &environments),
            date: days_before(today(), index),
            status: *pick(rng, &statuses),
        })
        .collect()
}

fn generate_sonar_fixes<R: Rng>(rng: &mut R, users: &[User]) -> Vec<SonarFix> {
    let severities =
        [Severity::Blocker, Severity::Critical, Severity::Major, Severity::Minor, Severity::Info];
    let statuses = [SonarStatus::Open, SonarStatus::InProgress, SonarStatus::Resolved];

    (0..15)
        .map(|_| {
            let start_date = days_before(today(), rng.gen_range(0..10));
            SonarFix {
                id: generate_id(rng),
                severity: *pick(rng, &severities),
                assignee_id: pick(rng, users).id.clone(),
                start_date,
                end_date: days_after(start_date, rng.gen_range(1..=5)),
                remarks: if rng.gen_bool(0.3) {
                    "Fixing code duplication".to_string()
                } else {
                    String::new()
                },
                status: *pick(rng, &statuses),
            }
        })
        .collect()
}

fn generate_unit_test_improvements<R: Rng>(rng: &mut R, users: &[User]) -> Vec<UnitTestImprovement> {
    let statuses =
        [UnitTestStatus::NotStarted, UnitTestStatus::InProgress, UnitTestStatus::Completed];

    (0..12)
        .map(|_| {
            let current_coverage = rng.gen_range(20..80);
            let improved_coverage = (current_coverage + rng.gen_range(0..30)).min(100);
            let start_date = days_before(today(), rng.gen_range(0..10));

            UnitTestImprovement {
                id: generate_id(rng),
                component_name: (*pick(rng, &COMPONENT_NAMES)).to_string(),
                assignee_id: pick(rng, users).id.clone(),
                start_date,
                end_date: days_after(start_date, rng.gen_range(1..=7)),
                current_coverage,
                improved_coverage,
                remarks: if rng.gen_bool(0.3) {
                    "Added tests for edge cases".to_string()
                } else {
                    String::new()
                },
                status: *pick(rng, &statuses),
            }
        })
        .collect()
}

fn generate_sprints<R: Rng>(rng: &mut R) -> Vec<Sprint> {
    (1..=3u64)
        .map(|index| {
            let start_date = days_before(today(), index * 14);
            let status = match index {
                1 => SprintStatus::Active,
                2 => SprintStatus::Completed,
                _ => SprintStatus::Planning,
            };

            Sprint {
                id: generate_id(rng),
                name: format!("Sprint {index}"),
                start_date,
                end_date: days_after(start_date, 13),
                status,
            }
        })
        .collect()
}

fn generate_sprint_items<R: Rng>(rng: &mut R, sprints: &[Sprint], users: &[User]) -> Vec<SprintItem> {
    let types = [ItemType::Task, ItemType::SubTask, ItemType::Defect];
    let statuses = [
        SprintItemStatus::Todo,
        SprintItemStatus::InProgress,
        SprintItemStatus::Review,
        SprintItemStatus::Done,
    ];
    let mut items = Vec::new();

    for sprint in sprints {
        let item_count = rng.gen_range(5..=14);
        for index in 0..item_count {
            items.push(SprintItem {
                id: generate_id(rng),
                item_type: *pick(rng, &types),
                title: format!("{} {} for {}", pick(rng, &types).as_str(), index + 1, sprint.name),
                assignee_id: pick(rng, users).id.clone(),
                status: *pick(rng, &statuses),
                sprint_id: sprint.id.clone(),
            });
        }
    }

    items
}

fn generate_merge_requests<R: Rng>(rng: &mut R, users: &[User]) -> Vec<MergeRequest> {
    let statuses = [
        MergeRequestStatus::Open,
        MergeRequestStatus::UnderReview,
        MergeRequestStatus::ChangesRequested,
        MergeRequestStatus::Approved,
        MergeRequestStatus::Merged,
    ];

    (0..20)
        .map(|_| {
            let created_at = Utc::now() - chrono::Duration::days(rng.gen_range(0..10));
            let updated_at = created_at + chrono::Duration::days(rng.gen_range(0..3));

            let requestor = pick(rng, users);
            let mut reviewer = pick(rng, users);
            while reviewer.id == requestor.id {
                reviewer = pick(rng, users);
            }

            MergeRequest {
                id: generate_id(rng),
                mr_id: format!("MR-{}", rng.gen_range(1..=1000)),
                requestor_id: requestor.id.clone(),
                reviewer_id: reviewer.id.clone(),
                description: "Implement feature X for project Y".to_string(),
                status: *pick(rng, &statuses),
                created_at,
                updated_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_state_has_expected_collection_sizes() {
        let state = sample_state_seeded(1);

        assert_eq!(state.users.len(), 8);
        assert_eq!(state.daily_statuses.len(), 40, "5 statuses per user");
        assert_eq!(state.deployments.len(), 10);
        assert_eq!(state.sonar_fixes.len(), 15);
        assert_eq!(state.unit_test_improvements.len(), 12);
        assert_eq!(state.sprints.len(), 3);
        assert_eq!(state.merge_requests.len(), 20);
        assert!(!state.sprint_items.is_empty());
    }

    #[test]
    fn every_status_carries_at_least_one_task() {
        let state = sample_state_seeded(2);
        assert!(state.daily_statuses.iter().all(|status| !status.tasks.is_empty()));
    }

    #[test]
    fn reviewer_never_matches_requestor() {
        let state = sample_state_seeded(3);
        assert!(state.merge_requests.iter().all(|mr| mr.requestor_id != mr.reviewer_id));
    }

    #[test]
    fn foreign_keys_resolve_to_generated_users() {
        let state = sample_state_seeded(4);
        for fix in &state.sonar_fixes {
            assert!(state.find_user(&fix.assignee_id).is_some());
        }
        for item in &state.sprint_items {
            assert!(state.find_sprint(&item.sprint_id).is_some());
        }
    }

    #[test]
    fn coverage_values_stay_in_range() {
        let state = sample_state_seeded(5);
        for improvement in &state.unit_test_improvements {
            assert!(improvement.improved_coverage <= 100);
            assert!(improvement.coverage_delta() >= 0);
        }
    }
}
