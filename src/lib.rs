pub mod bidding;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod query;
pub mod state;
pub mod store;
pub mod tender;
pub mod views;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::cors::{Any, CorsLayer};

/// 라우터 생성
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::handle_home))
        .route("/tenders", get(handlers::handle_get_current_tenders))
        .route("/tenders/past", get(handlers::handle_get_past_tenders))
        .route(
            "/tender/add",
            get(handlers::handle_add_tender_form).post(handlers::handle_add_tender),
        )
        .route("/tender/:id", get(handlers::handle_get_tender))
        .route("/tender/:id/bid", post(handlers::handle_bid))
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 64))
        .with_state(state)
}
