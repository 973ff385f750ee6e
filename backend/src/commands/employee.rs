use axum::{
    extract::{Path, State},
    Json,
};

use super::UpsertResult;
use crate::error::DairyResult;
use crate::metrics::{self, SatisfactionReport};
use crate::models::{
    Employee, EmployeeDataPatch, PerformanceRecord, SatisfactionSurvey, Stored,
};
use crate::state::AppState;
use crate::validation::FormInput;

pub async fn get_employees(
    State(state): State<AppState>,
) -> DairyResult<Json<Vec<Stored<Employee>>>> {
    let store = state.read_store()?;
    Ok(Json(store.employees().as_slice().to_vec()))
}

pub async fn save_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> DairyResult<Json<Stored<Employee>>> {
    let employee = employee.into_valid()?;
    let mut store = state.write_store()?;
    Ok(Json(store.add_employee(employee)?))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(employee): Json<Employee>,
) -> DairyResult<Json<Stored<Employee>>> {
    let employee = employee.into_valid()?;
    let mut store = state.write_store()?;
    Ok(Json(store.update_employee(&id, employee)?))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> DairyResult<Json<Stored<Employee>>> {
    let mut store = state.write_store()?;
    let removed = store.delete_employee(&id)?;
    tracing::info!("Employee {} removed", removed.record.employee_id);
    Ok(Json(removed))
}

pub async fn get_surveys(
    State(state): State<AppState>,
) -> DairyResult<Json<Vec<Stored<SatisfactionSurvey>>>> {
    let store = state.read_store()?;
    Ok(Json(store.surveys().as_slice().to_vec()))
}

pub async fn save_survey(
    State(state): State<AppState>,
    Json(survey): Json<SatisfactionSurvey>,
) -> DairyResult<Json<UpsertResult>> {
    let survey = survey.into_valid()?;
    let mut store = state.write_store()?;
    let (id, replaced) = store.upsert_survey(survey);
    Ok(Json(UpsertResult { id, replaced }))
}

pub async fn get_performance(
    State(state): State<AppState>,
) -> DairyResult<Json<Vec<Stored<PerformanceRecord>>>> {
    let store = state.read_store()?;
    Ok(Json(store.performance().as_slice().to_vec()))
}

pub async fn save_performance(
    State(state): State<AppState>,
    Json(record): Json<PerformanceRecord>,
) -> DairyResult<Json<UpsertResult>> {
    let record = record.into_valid()?;
    let mut store = state.write_store()?;
    let (id, replaced) = store.upsert_performance(record);
    tracing::info!("Performance record {} saved", id);
    Ok(Json(UpsertResult { id, replaced }))
}

pub async fn update_employee_data(
    State(state): State<AppState>,
    Json(patch): Json<EmployeeDataPatch>,
) -> DairyResult<Json<SatisfactionReport>> {
    let patch = patch.into_valid()?;
    let mut store = state.write_store()?;
    store.update_employee_data(patch);
    tracing::info!(
        "Employee feedback replaced: {} surveys, {} performance records",
        store.surveys().len(),
        store.performance().len()
    );
    Ok(Json(metrics::satisfaction_report(&store)))
}

pub async fn get_satisfaction_report(
    State(state): State<AppState>,
) -> DairyResult<Json<SatisfactionReport>> {
    let store = state.read_store()?;
    Ok(Json(metrics::satisfaction_report(&store)))
}
