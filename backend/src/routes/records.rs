use axum::{
    routing::{get, post},
    Router,
};

use crate::commands::records;
use crate::state::AppState;
use crate::store::LocalRecord;

/// List, fetch, save, update and delete routes for one page-local collection.
pub fn record_routes<T: LocalRecord>(base: &str) -> Router<AppState> {
    Router::new()
        .route(base, get(records::list_records::<T>))
        .route(&format!("{}/get/:id", base), get(records::get_record::<T>))
        .route(&format!("{}/save", base), post(records::save_record::<T>))
        .route(
            &format!("{}/update/:id", base),
            post(records::update_record::<T>),
        )
        .route(
            &format!("{}/delete/:id", base),
            post(records::delete_record::<T>),
        )
}
