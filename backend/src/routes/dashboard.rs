use crate::commands;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/dashboard/summary",
            get(commands::dashboard::get_dashboard_summary),
        )
        .route(
            "/api/dashboard/daily-collection",
            get(commands::dashboard::get_daily_collection),
        )
        .route(
            "/api/dashboard/top-suppliers",
            get(commands::dashboard::get_top_suppliers),
        )
        .route(
            "/api/dashboard/finance",
            get(commands::dashboard::get_finance_summary),
        )
        .route(
            "/api/dashboard/attendance",
            get(commands::dashboard::get_attendance_summary),
        )
        .route(
            "/api/dashboard/tasks",
            get(commands::dashboard::get_task_counts),
        )
        .route(
            "/api/dashboard/quality-distribution",
            get(commands::quality::get_quality_distribution),
        )
        .route(
            "/api/dashboard/satisfaction",
            get(commands::employee::get_satisfaction_report),
        )
}
