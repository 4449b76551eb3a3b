use axum::{extract::State, Json};

use crate::error::AppError;
use crate::services::stats::StatsSummary;
use crate::AppState;

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsSummary>, AppError> {
    Ok(Json(state.stats.summary().await?))
}
