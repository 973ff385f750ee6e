//! Handlers shared by every page-local collection (vehicles, bills, tasks, ...).

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::DairyResult;
use crate::models::Stored;
use crate::state::AppState;
use crate::store::LocalRecord;

pub async fn list_records<T: LocalRecord>(
    State(state): State<AppState>,
) -> DairyResult<Json<Vec<Stored<T>>>> {
    let store = state.read_store()?;
    Ok(Json(store.list::<T>().as_slice().to_vec()))
}

pub async fn get_record<T: LocalRecord>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> DairyResult<Json<Stored<T>>> {
    let store = state.read_store()?;
    Ok(Json(store.list::<T>().get(&id)?.clone()))
}

pub async fn save_record<T: LocalRecord>(
    State(state): State<AppState>,
    Json(record): Json<T>,
) -> DairyResult<Json<Stored<T>>> {
    let record = record.into_valid()?;
    let mut store = state.write_store()?;
    Ok(Json(store.add(record)))
}

pub async fn update_record<T: LocalRecord>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(record): Json<T>,
) -> DairyResult<Json<Stored<T>>> {
    let record = record.into_valid()?;
    let mut store = state.write_store()?;
    Ok(Json(store.update(&id, record)?))
}

pub async fn delete_record<T: LocalRecord>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> DairyResult<Json<Stored<T>>> {
    let mut store = state.write_store()?;
    Ok(Json(store.delete::<T>(&id)?))
}
