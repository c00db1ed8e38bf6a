//! API Handlers
//!
//! HTTP request handlers for the news and comment endpoints. Request
//! validation happens here; everything else is delegated to [`ContentService`].

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::cache::Cache;
use crate::config::Config;
use crate::domain::{Comment, News, NewsDetails};
use crate::error::{Result, ServiceError};
use crate::models::{
    CreateCommentRequest, CreateNewsRequest, HealthResponse, PageParams, SearchParams,
    StatsResponse, UpdateCommentRequest, UpdateNewsRequest,
};
use crate::service::ContentService;
use crate::storage::{ContentStore, MemoryStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ContentService>,
}

impl AppState {
    /// Creates a new AppState around an existing store and cache.
    pub fn new(store: Arc<dyn ContentStore>, cache: Cache) -> Self {
        Self {
            service: Arc::new(ContentService::new(store, cache)),
        }
    }

    /// Creates a new AppState from configuration, backed by an in-memory store.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(MemoryStore::new()), Cache::new(config.cache_expiry))
    }

    pub fn cache(&self) -> Cache {
        self.service.cache().clone()
    }
}

// Extractor results are taken as-is so that parse failures reach the
// client as `ServiceError` bodies instead of axum's plain-text rejections.
type JsonBody<T> = std::result::Result<Json<T>, JsonRejection>;
type QueryParams<T> = std::result::Result<Query<T>, QueryRejection>;
type PathId = std::result::Result<Path<Uuid>, PathRejection>;

fn reject_invalid(error: Option<String>) -> Result<()> {
    match error {
        Some(msg) => Err(ServiceError::Validation(msg)),
        None => Ok(()),
    }
}

// == News ==

/// Handler for GET /news
pub async fn list_news_handler(
    State(state): State<AppState>,
    params: QueryParams<PageParams>,
) -> Result<Json<Vec<News>>> {
    let Query(params) = params?;
    let page = params.to_page_request::<News>()?;
    Ok(Json(state.service.list_news(&page).await?))
}

/// Handler for GET /news/parameter
pub async fn search_news_handler(
    State(state): State<AppState>,
    params: QueryParams<SearchParams>,
) -> Result<Json<Vec<News>>> {
    let Query(params) = params?;
    let page = params.to_page_request()?;
    let news = state.service.search_news(&params.filter(), &page).await?;
    Ok(Json(news))
}

/// Handler for POST /news
pub async fn create_news_handler(
    State(state): State<AppState>,
    body: JsonBody<CreateNewsRequest>,
) -> Result<(StatusCode, Json<News>)> {
    let Json(req) = body?;
    reject_invalid(req.validate())?;
    let news = state.service.create_news(req).await?;
    Ok((StatusCode::CREATED, Json(news)))
}

/// Handler for GET /news/details/:id
pub async fn read_news_handler(
    State(state): State<AppState>,
    id: PathId,
    params: QueryParams<PageParams>,
) -> Result<Json<NewsDetails>> {
    let Path(id) = id?;
    let Query(params) = params?;
    let page = params.to_page_request::<Comment>()?;
    Ok(Json(state.service.read_news(id, &page).await?))
}

/// Handler for PUT /news
pub async fn update_news_handler(
    State(state): State<AppState>,
    body: JsonBody<UpdateNewsRequest>,
) -> Result<Json<News>> {
    let Json(req) = body?;
    reject_invalid(req.validate())?;
    Ok(Json(state.service.update_news(req).await?))
}

/// Handler for DELETE /news/:id
pub async fn delete_news_handler(
    State(state): State<AppState>,
    id: PathId,
) -> Result<Json<Uuid>> {
    let Path(id) = id?;
    Ok(Json(state.service.delete_news(id).await?))
}

// == Comments ==

/// Handler for POST /comment
pub async fn create_comment_handler(
    State(state): State<AppState>,
    body: JsonBody<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>)> {
    let Json(req) = body?;
    reject_invalid(req.validate())?;
    let comment = state.service.create_comment(req).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Handler for GET /comment/details/:id
pub async fn read_comment_handler(
    State(state): State<AppState>,
    id: PathId,
) -> Result<Json<Comment>> {
    let Path(id) = id?;
    Ok(Json(state.service.read_comment(id).await?))
}

/// Handler for PUT /comment/:id
pub async fn update_comment_handler(
    State(state): State<AppState>,
    id: PathId,
    body: JsonBody<UpdateCommentRequest>,
) -> Result<Json<Comment>> {
    let Path(id) = id?;
    let Json(req) = body?;
    reject_invalid(req.validate())?;
    Ok(Json(state.service.update_comment(id, req).await?))
}

/// Handler for DELETE /comment/:id
pub async fn delete_comment_handler(
    State(state): State<AppState>,
    id: PathId,
) -> Result<Json<Uuid>> {
    let Path(id) = id?;
    Ok(Json(state.service.delete_comment(id).await?))
}

// == Service ==

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.service.cache();
    let stats = cache.stats().await;
    let expiry = cache.expiry().await;

    Json(StatsResponse::new(&stats, expiry.as_secs()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(Arc::new(MemoryStore::new()), Cache::new(1800))
    }

    #[tokio::test]
    async fn test_create_and_read_comment() {
        let state = test_state();

        let (status, Json(news)) = create_news_handler(
            State(state.clone()),
            Ok(Json(CreateNewsRequest {
                title: "Title".to_string(),
                text: "Body".to_string(),
            })),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let (_, Json(comment)) = create_comment_handler(
            State(state.clone()),
            Ok(Json(CreateCommentRequest {
                text: "First".to_string(),
                username: "anton".to_string(),
                news_id: news.id,
            })),
        )
        .await
        .unwrap();

        let Json(read) = read_comment_handler(State(state), Ok(Path(comment.id))).await.unwrap();
        assert_eq!(read, comment);
    }

    #[tokio::test]
    async fn test_blank_title_rejected_before_service() {
        let state = test_state();

        let result = create_news_handler(
            State(state.clone()),
            Ok(Json(CreateNewsRequest {
                title: "".to_string(),
                text: "Body".to_string(),
            })),
        )
        .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));

        let Json(listed) = list_news_handler(State(state), Ok(Query(PageParams::default())))
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_news() {
        let state = test_state();

        let result = delete_news_handler(State(state), Ok(Path(Uuid::new_v4()))).await;
        assert!(matches!(result, Err(ServiceError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.expiry_secs, 1800);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
