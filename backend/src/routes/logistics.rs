use super::records::record_routes;
use crate::models::{Delivery, Vehicle};
use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(record_routes::<Vehicle>("/api/logistics/vehicles"))
        .merge(record_routes::<Delivery>("/api/logistics/deliveries"))
}
