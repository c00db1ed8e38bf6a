//! News and comment entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::now_timestamp;

// == News ==
/// A news article. Listings carry no comments; see [`NewsDetails`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub id: Uuid,
    /// Creation or last update time, `dd-MM-yyyy HH:mm`
    pub date: String,
    pub title: String,
    pub text: String,
}

impl News {
    /// Builds a brand new article with a fresh id, stamped now.
    pub fn create(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::revise(Uuid::new_v4(), title, text)
    }

    /// Builds the replacement for an existing article, stamped now.
    pub fn revise(id: Uuid, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            date: now_timestamp(),
            title: title.into(),
            text: text.into(),
        }
    }
}

// == News Details ==
/// An article together with one page of its comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDetails {
    #[serde(flatten)]
    pub news: News,
    pub comments: Vec<Comment>,
}

// == Comment ==
/// A comment on a news article.
///
/// The owning article is referenced by id only; the article decides the
/// comment's lifetime (deleting it deletes its comments).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub date: String,
    pub text: String,
    pub username: String,
    pub news_id: Uuid,
}

impl Comment {
    pub fn create(news_id: Uuid, text: impl Into<String>, username: impl Into<String>) -> Self {
        Self::revise(Uuid::new_v4(), news_id, text, username)
    }

    pub fn revise(
        id: Uuid,
        news_id: Uuid,
        text: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: now_timestamp(),
            text: text.into(),
            username: username.into(),
            news_id,
        }
    }
}
