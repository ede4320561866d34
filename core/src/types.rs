//! Content service DTOs.
//!
//! # Design
//! A subset of the WordPress REST shape for posts and pages. Helpers are
//! generic over the decoded type, so these are a convenience rather than a
//! contract: any field the server omits falls back to its default, and extra
//! fields are ignored.

use serde::{Deserialize, Serialize};

/// A `{"rendered": "..."}` wrapper as WordPress returns titles and bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// A blog post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Post {
    pub id: u64,
    pub date: Option<String>,
    pub slug: String,
    pub status: String,
    pub link: String,
    pub title: Rendered,
    pub content: Rendered,
    pub excerpt: Rendered,
}

/// A static page. `parent` is 0 for top-level pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Page {
    pub id: u64,
    pub date: Option<String>,
    pub slug: String,
    pub status: String,
    pub link: String,
    pub title: Rendered,
    pub content: Rendered,
    pub parent: u64,
    pub menu_order: i64,
}
