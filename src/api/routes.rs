//! API Routes
//!
//! Configures the Axum router with all content service endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_comment_handler, create_news_handler, delete_comment_handler, delete_news_handler,
    health_handler, list_news_handler, read_comment_handler, read_news_handler,
    search_news_handler, stats_handler, update_comment_handler, update_news_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /news` - List news, paginated
/// - `GET /news/parameter` - List news matching date/title/text filters
/// - `POST /news` - Create a news item
/// - `PUT /news` - Update a news item
/// - `GET /news/details/:id` - News item with one page of comments
/// - `DELETE /news/:id` - Delete a news item and its comments
/// - `POST /comment` - Create a comment
/// - `GET /comment/details/:id` - Read a comment
/// - `PUT /comment/:id` - Update a comment
/// - `DELETE /comment/:id` - Delete a comment
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/news",
            get(list_news_handler)
                .post(create_news_handler)
                .put(update_news_handler),
        )
        .route("/news/parameter", get(search_news_handler))
        .route("/news/details/:id", get(read_news_handler))
        .route("/news/:id", delete(delete_news_handler))
        .route("/comment", post(create_comment_handler))
        .route("/comment/details/:id", get(read_comment_handler))
        .route(
            "/comment/:id",
            put(update_comment_handler).delete(delete_comment_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
