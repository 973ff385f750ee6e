use crate::commands;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // Farmers
        .route("/api/farmers", get(commands::farmer::get_farmers))
        .route("/api/farmers/get/:id", get(commands::farmer::get_farmer))
        .route("/api/farmers/save", post(commands::farmer::save_farmer))
        .route(
            "/api/farmers/update/:id",
            post(commands::farmer::update_farmer),
        )
        .route(
            "/api/farmers/delete/:id",
            post(commands::farmer::delete_farmer),
        )
        // Milk collection
        .route("/api/milk", get(commands::milk::get_milk_entries))
        .route("/api/milk/save", post(commands::milk::add_milk_entry))
        .route(
            "/api/milk/update/:id",
            post(commands::milk::update_milk_entry),
        )
        .route(
            "/api/milk/delete/:id",
            post(commands::milk::delete_milk_entry),
        )
        .route(
            "/api/milk/update-at/:index",
            post(commands::milk::update_milk_entry_at),
        )
        .route(
            "/api/milk/delete-at/:index",
            post(commands::milk::delete_milk_entry_at),
        )
        // Quality testing
        .route("/api/quality", get(commands::quality::get_quality_tests))
        .route(
            "/api/quality/save",
            post(commands::quality::save_quality_test),
        )
        .route(
            "/api/quality/update/:id",
            post(commands::quality::update_quality_test),
        )
        .route(
            "/api/quality/delete/:id",
            post(commands::quality::delete_quality_test),
        )
        .route(
            "/api/quality/distribution",
            get(commands::quality::get_quality_distribution),
        )
}
