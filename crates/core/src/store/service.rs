//! State store service

use std::sync::Arc;

use tracing::info;
use trackboard_domain::types::{
    DailyStatus, Deployment, MergeRequest, SonarFix, Sprint, SprintItem, UnitTestImprovement, User,
};
use trackboard_domain::{fixtures, AppState, Result};

use super::ports::StatePersistence;

/// Partial state: each present collection replaces its counterpart wholesale.
#[derive(Debug, Clone, Default)]
pub struct StatePatch {
    pub users: Option<Vec<User>>,
    pub daily_statuses: Option<Vec<DailyStatus>>,
    pub deployments: Option<Vec<Deployment>>,
    pub sonar_fixes: Option<Vec<SonarFix>>,
    pub unit_test_improvements: Option<Vec<UnitTestImprovement>>,
    pub sprints: Option<Vec<Sprint>>,
    pub sprint_items: Option<Vec<SprintItem>>,
    pub merge_requests: Option<Vec<MergeRequest>>,
}

impl StatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(mut self, users: Vec<User>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn daily_statuses(mut self, daily_statuses: Vec<DailyStatus>) -> Self {
        self.daily_statuses = Some(daily_statuses);
        self
    }

    pub fn deployments(mut self, deployments: Vec<Deployment>) -> Self {
        self.deployments = Some(deployments);
        self
    }

    pub fn sonar_fixes(mut self, sonar_fixes: Vec<SonarFix>) -> Self {
        self.sonar_fixes = Some(sonar_fixes);
        self
    }

    pub fn unit_test_improvements(mut self, improvements: Vec<UnitTestImprovement>) -> Self {
        self.unit_test_improvements = Some(improvements);
        self
    }

    pub fn sprints(mut self, sprints: Vec<Sprint>) -> Self {
        self.sprints = Some(sprints);
        self
    }

    pub fn sprint_items(mut self, sprint_items: Vec<SprintItem>) -> Self {
        self.sprint_items = Some(sprint_items);
        self
    }

    pub fn merge_requests(mut self, merge_requests: Vec<MergeRequest>) -> Self {
        self.merge_requests = Some(merge_requests);
        self
    }
}

/// Owner of the process-wide state snapshot.
///
/// A read always observes a complete, previously committed snapshot; `apply`
/// is the only mutation and persists before returning. There is no reset
/// operation beyond overwriting the stored blob out of band.
pub struct StateStore {
    state: AppState,
    persistence: Arc<dyn StatePersistence>,
}

impl StateStore {
    /// Open the store: persisted blob when present, fresh fixtures otherwise.
    ///
    /// A fixture-seeded state is persisted immediately so the next open
    /// observes the same data.
    pub async fn open(persistence: Arc<dyn StatePersistence>) -> Result<Self> {
        let state = match persistence.load().await? {
            Some(state) => state,
            None => {
                info!("no persisted state found, seeding fixture data");
                let state = fixtures::sample_state();
                persistence.save(&state).await?;
                state
            }
        };

        Ok(Self { state, persistence })
    }

    /// The current complete snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Shallow-merge the patch: named collections are replaced, the rest
    /// stay untouched. The merged state is persisted in full before this
    /// returns.
    pub async fn apply(&mut self, patch: StatePatch) -> Result<()> {
        if let Some(users) = patch.users {
            self.state.users = users;
        }
        if let Some(daily_statuses) = patch.daily_statuses {
            self.state.daily_statuses = daily_statuses;
        }
        if let Some(deployments) = patch.deployments {
            self.state.deployments = deployments;
        }
        if let Some(sonar_fixes) = patch.sonar_fixes {
            self.state.sonar_fixes = sonar_fixes;
        }
        if let Some(improvements) = patch.unit_test_improvements {
            self.state.unit_test_improvements = improvements;
        }
        if let Some(sprints) = patch.sprints {
            self.state.sprints = sprints;
        }
        if let Some(sprint_items) = patch.sprint_items {
            self.state.sprint_items = sprint_items;
        }
        if let Some(merge_requests) = patch.merge_requests {
            self.state.merge_requests = merge_requests;
        }

        self.persistence.save(&self.state).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio::sync::Mutex;
    use trackboard_domain::types::{Deployment, DeploymentStatus, Environment};

    use super::*;

    /// Persistence kept in memory for store tests.
    #[derive(Default)]
    struct MemoryPersistence {
        blob: Mutex<Option<AppState>>,
    }

    impl MemoryPersistence {
        fn with_state(state: AppState) -> Arc<Self> {
            Arc::new(Self { blob: Mutex::new(Some(state)) })
        }
    }

    #[async_trait]
    impl StatePersistence for MemoryPersistence {
        async fn load(&self) -> Result<Option<AppState>> {
            Ok(self.blob.lock().await.clone())
        }

        async fn save(&self, state: &AppState) -> Result<()> {
            *self.blob.lock().await = Some(state.clone());
            Ok(())
        }
    }

    fn deployment(id: &str) -> Deployment {
        Deployment {
            id: id.to_string(),
            squad_number: "Squad 1".to_string(),
            details: "Deploy v1.0 with new feature X".to_string(),
            environment: Environment::Qa,
            date: "2024-05-01".parse().expect("valid date"),
            status: DeploymentStatus::Scheduled,
        }
    }

    #[tokio::test]
    async fn missing_blob_seeds_fixtures_and_persists_them() {
        let persistence = Arc::new(MemoryPersistence::default());
        let store =
            StateStore::open(Arc::clone(&persistence) as Arc<dyn StatePersistence>).await.unwrap();

        assert_eq!(store.state().users.len(), 8);
        let saved = persistence.blob.lock().await.clone().expect("seed persisted");
        assert_eq!(&saved, store.state());
    }

    #[tokio::test]
    async fn persisted_blob_round_trips_without_fixture_fallback() {
        let original = fixtures::sample_state_seeded(11);
        let persistence = MemoryPersistence::with_state(original.clone());

        let store = StateStore::open(persistence as Arc<dyn StatePersistence>).await.unwrap();
        assert_eq!(store.state(), &original);
    }

    #[tokio::test]
    async fn apply_replaces_named_collections_only() {
        let base = AppState {
            deployments: vec![deployment("old")],
            users: vec![User { id: "z1".to_string(), name: "Zoe".to_string() }],
            ..AppState::default()
        };

        let persistence = MemoryPersistence::with_state(base);
        let mut store = StateStore::open(persistence as Arc<dyn StatePersistence>).await.unwrap();

        store
            .apply(StatePatch::new().deployments(vec![deployment("new")]))
            .await
            .unwrap();

        assert_eq!(store.state().deployments.len(), 1);
        assert_eq!(store.state().deployments[0].id, "new");
        assert_eq!(store.state().users.len(), 1, "unrelated collections untouched");
        assert_eq!(store.state().users[0].id, "z1");
    }

    #[tokio::test]
    async fn every_apply_persists_the_full_state() {
        let persistence = Arc::new(MemoryPersistence::default());
        let mut store =
            StateStore::open(Arc::clone(&persistence) as Arc<dyn StatePersistence>).await.unwrap();

        store.apply(StatePatch::new().deployments(vec![deployment("d1")])).await.unwrap();

        let saved = persistence.blob.lock().await.clone().expect("state persisted");
        assert_eq!(&saved, store.state());
        assert_eq!(saved.deployments[0].id, "d1");
    }
}
