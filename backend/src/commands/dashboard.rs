use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::DairyResult;
use crate::metrics::{
    self, AttendanceSummary, DailyCollection, DashboardSummary, FinanceSummary, SupplierTotal,
    TaskCounts,
};
use crate::state::AppState;

const DEFAULT_TOP_SUPPLIERS: usize = 5;

#[derive(Debug, Default, Deserialize)]
pub struct TopSuppliersQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AttendanceQuery {
    pub date: Option<NaiveDate>,
}

pub async fn get_dashboard_summary(
    State(state): State<AppState>,
) -> DairyResult<Json<DashboardSummary>> {
    let store = state.read_store()?;
    Ok(Json(metrics::dashboard_summary(&store)))
}

pub async fn get_daily_collection(
    State(state): State<AppState>,
) -> DairyResult<Json<Vec<DailyCollection>>> {
    let store = state.read_store()?;
    Ok(Json(metrics::daily_collection(&store)))
}

pub async fn get_top_suppliers(
    State(state): State<AppState>,
    Query(query): Query<TopSuppliersQuery>,
) -> DairyResult<Json<Vec<SupplierTotal>>> {
    let store = state.read_store()?;
    let limit = query.limit.unwrap_or(DEFAULT_TOP_SUPPLIERS);
    Ok(Json(metrics::top_suppliers(&store, limit)))
}

pub async fn get_finance_summary(
    State(state): State<AppState>,
) -> DairyResult<Json<FinanceSummary>> {
    let store = state.read_store()?;
    Ok(Json(metrics::finance_summary(&store)))
}

pub async fn get_attendance_summary(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> DairyResult<Json<AttendanceSummary>> {
    let date = query
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let store = state.read_store()?;
    Ok(Json(metrics::attendance_summary(&store, date)))
}

pub async fn get_task_counts(State(state): State<AppState>) -> DairyResult<Json<TaskCounts>> {
    let store = state.read_store()?;
    Ok(Json(metrics::task_counts(&store)))
}
