use super::records::record_routes;
use crate::models::{Bill, Payment};
use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(record_routes::<Payment>("/api/finance/payments"))
        .merge(record_routes::<Bill>("/api/finance/bills"))
}
