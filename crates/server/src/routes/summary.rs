//! Dashboard summary route

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trackboard_core::stats::{self, DashboardSummary, RecentActivity};

use super::{ApiError, SharedState};

/// Overview page payload: headline counters plus recent activity.
#[derive(Debug, Serialize)]
pub struct SummaryDocument {
    pub totals: DashboardSummary,
    pub recent: RecentActivity,
}

pub async fn dashboard_summary(
    State(ctx): State<SharedState>,
) -> Result<Json<SummaryDocument>, ApiError> {
    let store = ctx.store.read().await;
    let state = store.state();

    Ok(Json(SummaryDocument {
        totals: stats::summarize(state),
        recent: stats::recent_activity(state),
    }))
}
