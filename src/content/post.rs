//! Post model

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

/// A blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Last updated date
    pub updated: Option<DateTime<Local>>,

    /// Whether the post is a draft
    pub draft: bool,

    /// Ordering weight, when set
    pub weight: Option<i64>,

    /// Template override, when set
    pub template: Option<String>,

    /// Post tags
    pub tags: Vec<String>,

    /// All taxonomy terms
    pub taxonomies: IndexMap<String, Vec<String>>,

    /// Source file path (relative to the content directory)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,

    /// Slug (URL-friendly name)
    pub slug: String,

    /// Custom front-matter fields
    pub extra: IndexMap<String, toml::Value>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(title: String, date: DateTime<Local>, source: String) -> Self {
        let slug = slug::slugify(&title);
        Self {
            title,
            date,
            updated: None,
            draft: false,
            weight: None,
            template: None,
            tags: Vec::new(),
            taxonomies: IndexMap::new(),
            source: source.clone(),
            full_source: PathBuf::from(&source),
            slug,
            extra: IndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_slug() {
        let post = Post::new(
            "Hello, World!".to_string(),
            Local::now(),
            "hello-world.md".to_string(),
        );
        assert_eq!(post.slug, "hello-world");
        assert!(!post.draft);
    }
}
