//! Service Module
//!
//! Business operations over news and comments.

mod content;

pub use content::ContentService;
