pub mod app_state;
pub mod chat_reply;
pub mod health_response;
pub mod pricelist_response;
pub mod routes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub use app_state::AppState;

/// Inline price lists travel base64 encoded inside `/chat`, so the default
/// 2 MiB body limit is too small.
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

pub fn app(state: AppState) -> Router {
    // Widgets are embedded on arbitrary customer sites.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/chat", post(routes::chat::chat))
        .route("/upload-pricelist", post(routes::pricelist::upload_pricelist))
        .route("/delete-pricelist", post(routes::pricelist::delete_pricelist))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .with_state(state)
}
