//! Filtering, sorting and pagination of entity listings.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, ServiceError};

use super::{Comment, News};

/// Default page size when none (or zero) is requested
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page a client may ask for
pub const MAX_PAGE_SIZE: usize = 100;

// == News Filter ==
/// Substring filter over news listings. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsFilter {
    /// Case-sensitive substring of the `dd-MM-yyyy HH:mm` timestamp
    pub date: String,
    /// Case-insensitive substring of the title
    pub title: String,
    /// Case-insensitive substring of the body
    pub text: String,
}

impl NewsFilter {
    pub fn new(
        date: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn matches(&self, news: &News) -> bool {
        news.date.contains(&self.date)
            && contains_ignore_case(&news.title, &self.title)
            && contains_ignore_case(&news.text, &self.text)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

// == Sorting ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Title,
    Text,
    Username,
}

impl SortField {
    fn as_str(self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Title => "title",
            SortField::Text => "text",
            SortField::Username => "username",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Sort order in the `property[,asc|desc]` form used by query strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: Direction::Asc,
        }
    }
}

impl Sort {
    /// Parses `date`, `title,desc`, `username,ASC` and the like.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.split(',').map(str::trim);
        let field = match parts.next().unwrap_or_default().to_ascii_lowercase().as_str() {
            "date" => SortField::Date,
            "title" => SortField::Title,
            "text" => SortField::Text,
            "username" => SortField::Username,
            other => {
                return Err(ServiceError::Validation(format!(
                    "unknown sort property '{}'",
                    other
                )))
            }
        };
        let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("") | Some("asc") => Direction::Asc,
            Some("desc") => Direction::Desc,
            Some(other) => {
                return Err(ServiceError::Validation(format!(
                    "unknown sort direction '{}'",
                    other
                )))
            }
        };
        if parts.next().is_some() {
            return Err(ServiceError::Validation(format!("malformed sort '{}'", raw)));
        }
        Ok(Self { field, direction })
    }

    fn compare<T: Sortable>(&self, a: &T, b: &T) -> Ordering {
        let ord = a.sort_value(self.field).cmp(b.sort_value(self.field));
        match self.direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        };
        write!(f, "{},{}", self.field.as_str(), direction)
    }
}

/// Entities that can be ordered by a [`SortField`].
pub trait Sortable {
    /// Fields the entity carries. Page requests naming any other field are rejected.
    const SORT_FIELDS: &'static [SortField];

    /// Value to order by, for one of [`Self::SORT_FIELDS`].
    fn sort_value(&self, field: SortField) -> &str;
}

impl Sortable for News {
    const SORT_FIELDS: &'static [SortField] = &[SortField::Date, SortField::Title, SortField::Text];

    fn sort_value(&self, field: SortField) -> &str {
        match field {
            SortField::Date => &self.date,
            SortField::Title => &self.title,
            SortField::Text => &self.text,
            SortField::Username => "",
        }
    }
}

impl Sortable for Comment {
    const SORT_FIELDS: &'static [SortField] =
        &[SortField::Date, SortField::Text, SortField::Username];

    fn sort_value(&self, field: SortField) -> &str {
        match field {
            SortField::Date => &self.date,
            SortField::Title => "",
            SortField::Text => &self.text,
            SortField::Username => &self.username,
        }
    }
}

// == Page Request ==
/// Zero-based page of a sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub sort: Sort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
        }
    }
}

impl PageRequest {
    /// Builds a page request; a zero size falls back to the default and
    /// oversized pages are capped.
    pub fn new(page: usize, size: usize, sort: Sort) -> Self {
        let size = match size {
            0 => DEFAULT_PAGE_SIZE,
            n => n.min(MAX_PAGE_SIZE),
        };
        Self { page, size, sort }
    }

    /// Builds a page request over `T` from optional query parameters.
    pub fn from_params<T: Sortable>(
        page: Option<usize>,
        size: Option<usize>,
        sort: Option<&str>,
    ) -> Result<Self> {
        let sort = match sort {
            Some(raw) if !raw.trim().is_empty() => Sort::parse(raw)?,
            _ => Sort::default(),
        };
        if !T::SORT_FIELDS.contains(&sort.field) {
            return Err(ServiceError::Validation(format!(
                "unknown sort property '{}'",
                sort.field.as_str()
            )));
        }
        Ok(Self::new(
            page.unwrap_or(0),
            size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
        ))
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Sorts `items` (stable, so ties keep their incoming order) and cuts
    /// out this page.
    pub fn apply<T: Sortable>(&self, mut items: Vec<T>) -> Vec<T> {
        items.sort_by(|a, b| self.sort.compare(a, b));
        items.into_iter().skip(self.offset()).take(self.size).collect()
    }
}

/// Cache key of one news listing.
///
/// Filter values are debug-quoted so no two distinct queries collide.
pub fn news_query_key(filter: &NewsFilter, page: &PageRequest) -> String {
    format!(
        "date={:?}|title={:?}|text={:?}|page={}|size={}|sort={}",
        filter.date, filter.title, filter.text, page.page, page.size, page.sort
    )
}
