use super::records::record_routes;
use crate::models::{Feedback, Review};
use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(record_routes::<Review>("/api/customers/reviews"))
        .merge(record_routes::<Feedback>("/api/customers/feedback"))
}
