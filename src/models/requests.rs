//! Request DTOs for the content API
//!
//! Defines incoming HTTP bodies and query strings.

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{News, NewsFilter, PageRequest, Sortable};
use crate::error::Result;

/// Longest accepted article or comment body, in characters
pub const MAX_TEXT_LENGTH: usize = 2000;

fn check_not_blank(field: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} must not be blank", field))
    } else {
        None
    }
}

fn check_text(field: &str, value: &str) -> Option<String> {
    check_not_blank(field, value).or_else(|| {
        (value.chars().count() > MAX_TEXT_LENGTH).then(|| {
            format!("{} exceeds maximum length of {} characters", field, MAX_TEXT_LENGTH)
        })
    })
}

/// Request body for POST /news
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsRequest {
    pub title: String,
    pub text: String,
}

impl CreateNewsRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        check_not_blank("title", &self.title).or_else(|| check_text("text", &self.text))
    }
}

/// Request body for PUT /news
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNewsRequest {
    pub id: Uuid,
    pub title: String,
    pub text: String,
}

impl UpdateNewsRequest {
    pub fn validate(&self) -> Option<String> {
        check_not_blank("title", &self.title).or_else(|| check_text("text", &self.text))
    }
}

/// Request body for POST /comment
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
    pub username: String,
    pub news_id: Uuid,
}

impl CreateCommentRequest {
    pub fn validate(&self) -> Option<String> {
        check_text("text", &self.text).or_else(|| check_not_blank("username", &self.username))
    }
}

/// Request body for PUT /comment/:id
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCommentRequest {
    pub text: String,
    pub username: String,
}

impl UpdateCommentRequest {
    pub fn validate(&self) -> Option<String> {
        check_text("text", &self.text).or_else(|| check_not_blank("username", &self.username))
    }
}

/// Pagination query: `?page=0&size=10&sort=date,desc`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Option<String>,
}

impl PageParams {
    /// Page request over `T`, whose fields bound the accepted sort properties.
    pub fn to_page_request<T: Sortable>(&self) -> Result<PageRequest> {
        PageRequest::from_params::<T>(self.page, self.size, self.sort.as_deref())
    }
}

/// Query for GET /news/parameter. The three filters are required but may be empty.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub date: String,
    pub title: String,
    pub text: String,
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Option<String>,
}

impl SearchParams {
    pub fn filter(&self) -> NewsFilter {
        NewsFilter::new(self.date.clone(), self.title.clone(), self.text.clone())
    }

    pub fn to_page_request(&self) -> Result<PageRequest> {
        PageRequest::from_params::<News>(self.page, self.size, self.sort.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_news_deserialize() {
        let json = r#"{"title": "Rust 2024", "text": "Edition released"}"#;
        let req: CreateNewsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Rust 2024");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_blank_fields() {
        let req = CreateNewsRequest {
            title: "   ".to_string(),
            text: "body".to_string(),
        };
        assert_eq!(req.validate().as_deref(), Some("title must not be blank"));

        let req = UpdateCommentRequest {
            text: "ok".to_string(),
            username: "".to_string(),
        };
        assert_eq!(req.validate().as_deref(), Some("username must not be blank"));
    }

    #[test]
    fn test_validate_text_length() {
        let req = CreateCommentRequest {
            text: "x".repeat(MAX_TEXT_LENGTH + 1),
            username: "anton".to_string(),
            news_id: Uuid::new_v4(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_comment_request_needs_news_id() {
        let json = r#"{"text": "hi", "username": "anton"}"#;
        assert!(serde_json::from_str::<CreateCommentRequest>(json).is_err());
    }

    #[test]
    fn test_page_params_defaults() {
        let page = PageParams::default().to_page_request::<News>().unwrap();
        assert_eq!(page, PageRequest::default());
    }
}
