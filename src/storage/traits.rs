use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, News, NewsFilter, PageRequest};
use crate::error::Result;

/// Durable home of news and comments, the source of truth behind the cache.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch one article by id
    async fn find_news(&self, id: Uuid) -> Result<Option<News>>;

    /// One sorted page of the articles matching `filter`
    async fn find_news_page(&self, filter: &NewsFilter, page: &PageRequest) -> Result<Vec<News>>;

    /// Insert or replace an article by id
    async fn save_news(&self, news: News) -> Result<News>;

    /// Remove an article together with all of its comments
    async fn delete_news(&self, id: Uuid) -> Result<()>;

    /// Fetch one comment by id
    async fn find_comment(&self, id: Uuid) -> Result<Option<Comment>>;

    /// One sorted page of the comments on an article
    async fn find_comments_by_news(&self, news_id: Uuid, page: &PageRequest) -> Result<Vec<Comment>>;

    /// Insert or replace a comment; its article must exist
    async fn save_comment(&self, comment: Comment) -> Result<Comment>;

    /// Remove a single comment
    async fn delete_comment(&self, id: Uuid) -> Result<()>;
}
