use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::DairyResult;
use crate::models::{MilkEntry, Stored};
use crate::state::AppState;
use crate::validation::FormInput;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkEntryQuery {
    pub farmer_id: Option<String>,
}

pub async fn get_milk_entries(
    State(state): State<AppState>,
    Query(query): Query<MilkEntryQuery>,
) -> DairyResult<Json<Vec<Stored<MilkEntry>>>> {
    let store = state.read_store()?;
    let entries = store
        .milk_entries()
        .iter()
        .filter(|e| match query.farmer_id.as_deref() {
            Some(farmer_id) => e.record.farmer_id == farmer_id,
            None => true,
        })
        .cloned()
        .collect();
    Ok(Json(entries))
}

pub async fn add_milk_entry(
    State(state): State<AppState>,
    Json(entry): Json<MilkEntry>,
) -> DairyResult<Json<Stored<MilkEntry>>> {
    let entry = entry.into_valid()?;
    let mut store = state.write_store()?;
    Ok(Json(store.add_milk_entry(entry)))
}

pub async fn update_milk_entry_at(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(entry): Json<MilkEntry>,
) -> DairyResult<Json<Stored<MilkEntry>>> {
    let entry = entry.into_valid()?;
    let mut store = state.write_store()?;
    Ok(Json(store.update_milk_entry(index, entry)?))
}

pub async fn delete_milk_entry_at(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> DairyResult<Json<Stored<MilkEntry>>> {
    let mut store = state.write_store()?;
    let removed = store.delete_milk_entry(index)?;
    tracing::info!("Milk entry {} deleted", removed.id);
    Ok(Json(removed))
}

pub async fn update_milk_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(entry): Json<MilkEntry>,
) -> DairyResult<Json<Stored<MilkEntry>>> {
    let entry = entry.into_valid()?;
    let mut store = state.write_store()?;
    Ok(Json(store.update_milk_entry_by_id(&id, entry)?))
}

pub async fn delete_milk_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> DairyResult<Json<Stored<MilkEntry>>> {
    let mut store = state.write_store()?;
    let removed = store.delete_milk_entry_by_id(&id)?;
    tracing::info!("Milk entry {} deleted", removed.id);
    Ok(Json(removed))
}
