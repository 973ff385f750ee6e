use axum::response::Redirect;

pub const DASHBOARD_PATH: &str = "/api/dashboard/summary";

pub async fn root() -> Redirect {
    Redirect::temporary(DASHBOARD_PATH)
}

pub async fn ping() -> &'static str {
    "pong"
}
