//! In-process content store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ContentStore;
use crate::domain::{Comment, News, NewsFilter, PageRequest};
use crate::error::{Result, ServiceError};

/// A stored value plus its insertion sequence, used to keep listing order
/// stable when the sort key ties.
#[derive(Debug, Clone)]
struct Row<T> {
    seq: u64,
    value: T,
}

#[derive(Debug, Default)]
struct Tables {
    next_seq: u64,
    news: HashMap<Uuid, Row<News>>,
    comments: HashMap<Uuid, Row<Comment>>,
}

impl Tables {
    fn bump(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

/// Content store kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored comments, across all articles.
    pub async fn comment_count(&self) -> usize {
        self.tables.read().await.comments.len()
    }
}

fn in_insertion_order<T: Clone>(rows: impl Iterator<Item = Row<T>>) -> Vec<T> {
    let mut rows: Vec<Row<T>> = rows.collect();
    rows.sort_by_key(|row| row.seq);
    rows.into_iter().map(|row| row.value).collect()
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn find_news(&self, id: Uuid) -> Result<Option<News>> {
        let tables = self.tables.read().await;
        Ok(tables.news.get(&id).map(|row| row.value.clone()))
    }

    async fn find_news_page(&self, filter: &NewsFilter, page: &PageRequest) -> Result<Vec<News>> {
        let tables = self.tables.read().await;
        let matching = in_insertion_order(
            tables
                .news
                .values()
                .filter(|row| filter.matches(&row.value))
                .cloned(),
        );
        Ok(page.apply(matching))
    }

    async fn save_news(&self, news: News) -> Result<News> {
        let mut tables = self.tables.write().await;
        // Updates keep their original position in insertion order.
        let seq = tables
            .news
            .get(&news.id)
            .map(|row| row.seq)
            .unwrap_or_else(|| tables.bump());
        tables.news.insert(
            news.id,
            Row {
                seq,
                value: news.clone(),
            },
        );
        Ok(news)
    }

    async fn delete_news(&self, id: Uuid) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.news.remove(&id).is_some() {
            tables.comments.retain(|_, row| row.value.news_id != id);
        }
        Ok(())
    }

    async fn find_comment(&self, id: Uuid) -> Result<Option<Comment>> {
        let tables = self.tables.read().await;
        Ok(tables.comments.get(&id).map(|row| row.value.clone()))
    }

    async fn find_comments_by_news(&self, news_id: Uuid, page: &PageRequest) -> Result<Vec<Comment>> {
        let tables = self.tables.read().await;
        let owned = in_insertion_order(
            tables
                .comments
                .values()
                .filter(|row| row.value.news_id == news_id)
                .cloned(),
        );
        Ok(page.apply(owned))
    }

    async fn save_comment(&self, comment: Comment) -> Result<Comment> {
        let mut tables = self.tables.write().await;
        if !tables.news.contains_key(&comment.news_id) {
            return Err(ServiceError::not_found());
        }
        let seq = tables
            .comments
            .get(&comment.id)
            .map(|row| row.seq)
            .unwrap_or_else(|| tables.bump());
        tables.comments.insert(
            comment.id,
            Row {
                seq,
                value: comment.clone(),
            },
        );
        Ok(comment)
    }

    async fn delete_comment(&self, id: Uuid) -> Result<()> {
        self.tables.write().await.comments.remove(&id);
        Ok(())
    }
}
