//! News API - news articles and their comments over HTTP
//!
//! A read-through cache with explicit invalidation sits in front of the store
//! for both resources.

pub mod api;
pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::ContentService;
pub use tasks::spawn_cleanup_task;
