use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::DairyResult;
use crate::metrics::{self, GradeShare};
use crate::models::{QualityTest, QualityTestView};
use crate::state::AppState;
use crate::validation::FormInput;

pub async fn get_quality_tests(
    State(state): State<AppState>,
) -> DairyResult<Json<Vec<QualityTestView>>> {
    let store = state.read_store()?;
    Ok(Json(store.quality_test_views()))
}

pub async fn save_quality_test(
    State(state): State<AppState>,
    Json(test): Json<QualityTest>,
) -> DairyResult<Json<QualityTestView>> {
    let test = test.into_valid()?;
    let mut store = state.write_store()?;
    let stored = store.add_quality_test(test);
    Ok(Json(store.quality_test_view(&stored)))
}

pub async fn update_quality_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(test): Json<QualityTest>,
) -> DairyResult<Json<QualityTestView>> {
    let test = test.into_valid()?;
    let mut store = state.write_store()?;
    let stored = store.update_quality_test(&id, test)?;
    Ok(Json(store.quality_test_view(&stored)))
}

pub async fn delete_quality_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> DairyResult<Json<QualityTestView>> {
    let mut store = state.write_store()?;
    let removed = store.delete_quality_test(&id)?;
    tracing::info!("Quality test {} deleted", removed.id);
    Ok(Json(store.quality_test_view(&removed)))
}

pub async fn get_quality_distribution(
    State(state): State<AppState>,
) -> DairyResult<Json<Vec<GradeShare>>> {
    let store = state.read_store()?;
    Ok(Json(metrics::generate_quality_distribution(
        store.quality_tests().records(),
    )))
}
