//! Content Service
//!
//! Orchestrates the store and the cache for every news and comment operation.
//! Cache population and invalidation are explicit calls in each operation:
//!
//! | operation       | cache                                   |
//! |-----------------|-----------------------------------------|
//! | list news       | read-through on `news`, keyed by query  |
//! | read news       | never cached                            |
//! | create news     | evict all `news`                        |
//! | update news     | evict all `news`                        |
//! | delete news     | evict all `news` and all `comment`      |
//! | create comment  | none                                    |
//! | read comment    | read-through on `comment`, keyed by id  |
//! | update comment  | evict that id from `comment`            |
//! | delete comment  | evict all `comment` and all `news`      |
//!
//! Lookups by id fail with `EntityNotFound` before the cache is touched.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cache::{Cache, COMMENT, NEWS};
use crate::domain::{news_query_key, Comment, News, NewsDetails, NewsFilter, PageRequest};
use crate::error::{Result, ServiceError};
use crate::models::{CreateCommentRequest, CreateNewsRequest, UpdateCommentRequest, UpdateNewsRequest};
use crate::storage::ContentStore;

/// News and comment operations with a read-through cache in front of the store.
pub struct ContentService {
    store: Arc<dyn ContentStore>,
    cache: Cache,
    /// Serialises mutations so an existence check and the write that depends
    /// on it form one unit of work.
    writes: Mutex<()>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>, cache: Cache) -> Self {
        Self {
            store,
            cache,
            writes: Mutex::new(()),
        }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == News ==

    /// Lists one page of news, without comments.
    pub async fn list_news(&self, page: &PageRequest) -> Result<Vec<News>> {
        self.search_news(&NewsFilter::default(), page).await
    }

    /// Lists one page of news matching `filter`, without comments.
    ///
    /// An empty result is a valid answer and is cached like any other.
    pub async fn search_news(&self, filter: &NewsFilter, page: &PageRequest) -> Result<Vec<News>> {
        let key = news_query_key(filter, page);
        if let Some(hit) = self.cached::<Vec<News>>(NEWS, &key).await {
            return Ok(hit);
        }

        let news = self.store.find_news_page(filter, page).await?;
        self.populate(NEWS, key, &news).await?;
        Ok(news)
    }

    /// Reads one article with the requested page of its comments.
    ///
    /// Always served live: the comment slice depends on the page and on
    /// current comment state.
    pub async fn read_news(&self, id: Uuid, page: &PageRequest) -> Result<NewsDetails> {
        let news = self
            .store
            .find_news(id)
            .await?
            .ok_or_else(ServiceError::not_found)?;
        let comments = self.store.find_comments_by_news(id, page).await?;
        Ok(NewsDetails { news, comments })
    }

    pub async fn create_news(&self, request: CreateNewsRequest) -> Result<News> {
        let _unit = self.writes.lock().await;
        let news = self
            .store
            .save_news(News::create(request.title, request.text))
            .await?;
        self.cache.evict_all(NEWS).await;
        info!(id = %news.id, "news created");
        Ok(news)
    }

    pub async fn update_news(&self, request: UpdateNewsRequest) -> Result<News> {
        let _unit = self.writes.lock().await;
        self.require_news(request.id).await?;
        let news = self
            .store
            .save_news(News::revise(request.id, request.title, request.text))
            .await?;
        self.cache.evict_all(NEWS).await;
        info!(id = %news.id, "news updated");
        Ok(news)
    }

    /// Deletes an article and, through the store, all of its comments.
    pub async fn delete_news(&self, id: Uuid) -> Result<Uuid> {
        let _unit = self.writes.lock().await;
        self.require_news(id).await?;
        self.store.delete_news(id).await?;
        self.cache.evict_all(NEWS).await;
        self.cache.evict_all(COMMENT).await;
        info!(id = %id, "news deleted");
        Ok(id)
    }

    // == Comments ==

    pub async fn create_comment(&self, request: CreateCommentRequest) -> Result<Comment> {
        let _unit = self.writes.lock().await;
        self.require_news(request.news_id).await?;
        let comment = self
            .store
            .save_comment(Comment::create(request.news_id, request.text, request.username))
            .await?;
        info!(id = %comment.id, news_id = %comment.news_id, "comment created");
        Ok(comment)
    }

    pub async fn read_comment(&self, id: Uuid) -> Result<Comment> {
        let key = id.to_string();
        if let Some(hit) = self.cached::<Comment>(COMMENT, &key).await {
            return Ok(hit);
        }

        let comment = self.require_comment(id).await?;
        self.populate(COMMENT, key, &comment).await?;
        Ok(comment)
    }

    /// Rewrites text and author; the owning article never changes.
    pub async fn update_comment(&self, id: Uuid, request: UpdateCommentRequest) -> Result<Comment> {
        let _unit = self.writes.lock().await;
        let existing = self.require_comment(id).await?;
        let comment = self
            .store
            .save_comment(Comment::revise(
                id,
                existing.news_id,
                request.text,
                request.username,
            ))
            .await?;
        self.cache.evict(COMMENT, &id.to_string()).await;
        info!(id = %id, "comment updated");
        Ok(comment)
    }

    pub async fn delete_comment(&self, id: Uuid) -> Result<Uuid> {
        let _unit = self.writes.lock().await;
        self.require_comment(id).await?;
        self.store.delete_comment(id).await?;
        self.cache.evict_all(COMMENT).await;
        self.cache.evict_all(NEWS).await;
        info!(id = %id, "comment deleted");
        Ok(id)
    }

    // == Helpers ==

    async fn require_news(&self, id: Uuid) -> Result<News> {
        self.store.find_news(id).await?.ok_or_else(|| {
            debug!(id = %id, "news not found");
            ServiceError::not_found()
        })
    }

    async fn require_comment(&self, id: Uuid) -> Result<Comment> {
        self.store.find_comment(id).await?.ok_or_else(|| {
            debug!(id = %id, "comment not found");
            ServiceError::not_found()
        })
    }

    /// Decodes a cached value; an undecodable entry is dropped and read as a miss.
    async fn cached<T: DeserializeOwned>(&self, partition: &str, key: &str) -> Option<T> {
        let raw = self.cache.get(partition, key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(partition, key, error = %err, "dropping undecodable cache entry");
                self.cache.evict(partition, key).await;
                None
            }
        }
    }

    async fn populate<T: Serialize>(&self, partition: &str, key: String, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.cache.put(partition, key, raw).await;
        Ok(())
    }
}
