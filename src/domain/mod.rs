//! Domain Module
//!
//! Entities served by the API and the query types used to list them.

mod entities;
mod query;

use chrono::{DateTime, Local, TimeZone};

pub use entities::{Comment, News, NewsDetails};
pub use query::{
    news_query_key, Direction, NewsFilter, PageRequest, Sort, SortField, Sortable,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

/// Timestamp layout used for entity dates and error responses.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Formats a time with minute precision.
pub fn format_timestamp<Tz: TimeZone>(time: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time with minute precision.
pub fn now_timestamp() -> String {
    format_timestamp(Local::now())
}
