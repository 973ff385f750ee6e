use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::DairyResult;
use crate::models::{Farmer, Stored};
use crate::state::AppState;
use crate::validation::FormInput;

pub async fn get_farmers(State(state): State<AppState>) -> DairyResult<Json<Vec<Stored<Farmer>>>> {
    let store = state.read_store()?;
    Ok(Json(store.farmers().as_slice().to_vec()))
}

pub async fn get_farmer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> DairyResult<Json<Stored<Farmer>>> {
    let store = state.read_store()?;
    Ok(Json(store.farmers().get(&id)?.clone()))
}

pub async fn save_farmer(
    State(state): State<AppState>,
    Json(farmer): Json<Farmer>,
) -> DairyResult<Json<Stored<Farmer>>> {
    let farmer = farmer.into_valid()?;
    let mut store = state.write_store()?;
    Ok(Json(store.add_farmer(farmer)?))
}

pub async fn update_farmer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(farmer): Json<Farmer>,
) -> DairyResult<Json<Stored<Farmer>>> {
    let farmer = farmer.into_valid()?;
    let mut store = state.write_store()?;
    Ok(Json(store.update_farmer(&id, farmer)?))
}

pub async fn delete_farmer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> DairyResult<Json<Stored<Farmer>>> {
    let mut store = state.write_store()?;
    let removed = store.delete_farmer(&id)?;
    tracing::info!("Farmer {} removed", removed.record.farmer_id);
    Ok(Json(removed))
}
