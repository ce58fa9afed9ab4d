//! CMS content models and DTOs.
//!
//! Content items are edited in place and moved between statuses by the
//! editor actions (save draft, submit for review, schedule, publish).

use std::fmt;

use choptop_core::{PaginationMeta, PaginationParams};
use choptop_core::serde::deserialize_optional_string;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Slug given to new items until a title is chosen.
pub const PLACEHOLDER_SLUG: &str = "untitled";
pub const PLACEHOLDER_TITLE: &str = "Untitled";
pub const DEFAULT_AUTHOR: &str = "You";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Article,
    Banner,
    Category,
    Guide,
    Page,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Banner => "banner",
            Self::Category => "category",
            Self::Guide => "guide",
            Self::Page => "page",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    #[default]
    Draft,
    InReview,
    Scheduled,
    Published,
}

impl ContentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::InReview => "In Review",
            Self::Scheduled => "Scheduled",
            Self::Published => "Published",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-UG")]
    EnUg,
    #[serde(rename = "en-KE")]
    EnKe,
    #[serde(rename = "sw-KE")]
    SwKe,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnUg => "en-UG",
            Self::EnKe => "en-KE",
            Self::SwKe => "sw-KE",
        }
    }
}

/// Cities content can be targeted at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum City {
    #[default]
    Kampala,
    Nairobi,
    Entebbe,
    Mombasa,
}

impl City {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kampala => "Kampala",
            Self::Nairobi => "Nairobi",
            Self::Entebbe => "Entebbe",
            Self::Mombasa => "Mombasa",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContentItem {
    pub id: String,
    pub content_type: ContentType,
    pub title: String,
    pub slug: String,
    pub status: ContentStatus,
    pub locale: Locale,
    pub city: City,
    #[schema(value_type = String, example = "2025-12-01T10:00:00")]
    pub scheduled_at: NaiveDateTime,
    pub author: String,
}

impl ContentItem {
    /// Public path the item is previewed at.
    pub fn preview_path(&self) -> String {
        format!("/cms/{}/{}", self.locale.as_str(), self.slug)
    }

    /// Lowercased text the list search matches against.
    pub fn search_text(&self) -> String {
        format!(
            "{}{}{}{}{}{}{}",
            self.id,
            self.title,
            self.slug,
            self.city.as_str(),
            self.locale.as_str(),
            self.content_type.as_str(),
            self.status.label()
        )
        .to_lowercase()
    }
}

/// Lowercases `title` and collapses every run of characters outside
/// `[a-z0-9]` into a single `-`, trimming dashes at both ends.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateContentDto {
    pub content_type: Option<ContentType>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub locale: Option<Locale>,
    pub city: Option<City>,
    #[schema(value_type = Option<String>)]
    pub scheduled_at: Option<NaiveDateTime>,
    #[validate(length(min = 1, max = 100))]
    pub author: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateContentDto {
    pub content_type: Option<ContentType>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub slug: Option<String>,
    pub locale: Option<Locale>,
    pub city: Option<City>,
    #[schema(value_type = Option<String>)]
    pub scheduled_at: Option<NaiveDateTime>,
}

/// Editor actions that move an item to a new status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentAction {
    SaveDraft,
    SubmitForReview,
    Schedule,
    Publish,
}

impl ContentAction {
    pub fn target_status(&self) -> ContentStatus {
        match self {
            Self::SaveDraft => ContentStatus::Draft,
            Self::SubmitForReview => ContentStatus::InReview,
            Self::Schedule => ContentStatus::Scheduled,
            Self::Publish => ContentStatus::Published,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub q: Option<String>,
    pub status: Option<ContentStatus>,
    pub content_type: Option<ContentType>,
    pub locale: Option<Locale>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl ContentFilterParams {
    pub fn matches(&self, item: &ContentItem) -> bool {
        let hits = self
            .q
            .as_ref()
            .is_none_or(|q| item.search_text().contains(&q.to_lowercase()));

        hits && self.status.is_none_or(|s| item.status == s)
            && self.content_type.is_none_or(|t| item.content_type == t)
            && self.locale.is_none_or(|l| item.locale == l)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedContentResponse {
    pub data: Vec<ContentItem>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContentPreview {
    pub id: String,
    pub path: String,
    pub title: String,
    pub city: City,
}
