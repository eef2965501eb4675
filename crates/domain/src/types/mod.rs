//! Record types for the tracked collections

pub mod daily_status;
pub mod deployment;
pub mod merge_request;
pub mod sonar;
pub mod sprint;
pub mod state;
pub mod user;

pub use daily_status::{DailyStatus, Task, TaskStatus};
pub use deployment::{Deployment, DeploymentStatus, Environment};
pub use merge_request::{MergeRequest, MergeRequestStatus};
pub use sonar::{Severity, SonarFix, SonarStatus};
pub use sprint::{ItemType, Sprint, SprintItem, SprintItemStatus, SprintStatus};
pub use state::AppState;
pub use unit_test::{UnitTestImprovement, UnitTestStatus};
pub use user::User;
