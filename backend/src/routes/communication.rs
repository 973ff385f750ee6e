use super::records::record_routes;
use crate::models::{Announcement, Message};
use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(record_routes::<Message>("/api/communication/messages"))
        .merge(record_routes::<Announcement>(
            "/api/communication/announcements",
        ))
}
