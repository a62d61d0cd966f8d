//! Read-only JSON views of the catalog.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::catalog::{Announcement, TrainingRecord};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TrainingHistory {
    pub records: Vec<TrainingRecord>,
    pub total_hours: u32,
    pub approved_hours: u32,
}

/// `GET /api/announcements`: announcements in display order.
pub async fn list_announcements(State(state): State<AppState>) -> Json<Vec<Announcement>> {
    Json(state.catalog.announcements.clone())
}

/// `GET /api/training`: training history with hour totals.
pub async fn training_history(State(state): State<AppState>) -> Json<TrainingHistory> {
    let summary = state.catalog.training_summary();
    Json(TrainingHistory {
        records: state.catalog.training.clone(),
        total_hours: summary.total_hours,
        approved_hours: summary.approved_hours,
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
