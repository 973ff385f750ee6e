use super::records::record_routes;
use crate::commands;
use crate::models::{AttendanceRecord, Task};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // Employees
        .route("/api/employees", get(commands::employee::get_employees))
        .route(
            "/api/employees/save",
            post(commands::employee::save_employee),
        )
        .route(
            "/api/employees/update/:id",
            post(commands::employee::update_employee),
        )
        .route(
            "/api/employees/delete/:id",
            post(commands::employee::delete_employee),
        )
        // Employee feedback
        .route(
            "/api/employees/surveys",
            get(commands::employee::get_surveys),
        )
        .route(
            "/api/employees/surveys/save",
            post(commands::employee::save_survey),
        )
        .route(
            "/api/employees/performance",
            get(commands::employee::get_performance),
        )
        .route(
            "/api/employees/performance/save",
            post(commands::employee::save_performance),
        )
        .route(
            "/api/employees/feedback-data",
            post(commands::employee::update_employee_data),
        )
        .route(
            "/api/employees/satisfaction",
            get(commands::employee::get_satisfaction_report),
        )
        .merge(record_routes::<AttendanceRecord>("/api/workforce/attendance"))
        .merge(record_routes::<Task>("/api/workforce/tasks"))
}
