//! Content loader - loads posts from the content directory

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, Post};
use crate::Blog;

/// Loads content from the content directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load all posts from the content directory
    ///
    /// Files whose stem starts with `_` (section metadata like
    /// `_index.md`) are not posts. Files that fail to parse are
    /// skipped with a warning.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_post_file(path) {
                match self.load_post(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, _body) = FrontMatter::parse(&content)?;

        // Get file metadata for the date fallback
        let metadata = fs::metadata(path)?;
        let file_modified = metadata
            .modified()
            .ok()
            .map(chrono::DateTime::<Local>::from);

        let date = fm
            .parse_date()
            .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));

        let updated = fm.parse_updated().or(file_modified);

        // Title falls back to the file stem
        let title = fm.title.clone().unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        // Source path relative to the content directory
        let source = path
            .strip_prefix(&self.blog.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        // Slug comes from the front matter when set, else the file stem
        let slug = fm.slug.clone().unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("untitled")
                .to_string()
        });

        let mut post = Post::new(title, date, source);
        post.updated = updated;
        post.draft = fm.draft;
        post.weight = fm.weight;
        post.template = fm.template.clone();
        post.tags = fm.tags();
        post.taxonomies = fm.taxonomies;
        post.full_source = path.to_path_buf();
        post.slug = slug;
        post.extra = fm.extra;

        Ok(post)
    }
}

/// Check if a file is a post source file
pub(crate) fn is_post_file(path: &Path) -> bool {
    let is_markdown = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false);

    let is_section = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.starts_with('_'))
        .unwrap_or(true);

    is_markdown && !is_section
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn blog_in(dir: &Path) -> Blog {
        Blog::new(dir).unwrap()
    }

    #[test]
    fn test_load_posts_sorted_and_filtered() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");

        write_file(
            &content,
            "older.md",
            "+++\ntitle = \"Older\"\ndate = 2023-05-01\n+++\nbody\n",
        );
        write_file(
            &content,
            "newer.md",
            "+++\ntitle = \"Newer\"\ndate = 2024-05-01\n+++\nbody\n",
        );
        write_file(
            &content,
            "_index.md",
            "+++\nsort_by = \"date\"\n+++\n",
        );
        write_file(&content, "notes.txt", "not markdown\n");

        let blog = blog_in(tmp.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Newer");
        assert_eq!(posts[1].title, "Older");
    }

    #[test]
    fn test_bad_file_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");

        write_file(
            &content,
            "good.md",
            "+++\ntitle = \"Good\"\ndate = 2024-01-01\n+++\n",
        );
        write_file(&content, "bad.md", "+++\ntitle = broken\n+++\n");

        let blog = blog_in(tmp.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Good");
    }

    #[test]
    fn test_slug_and_draft_from_frontmatter() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");

        write_file(
            &content,
            "wip-post.md",
            "+++\ntitle = \"WIP\"\ndate = 2024-01-01\ndraft = true\nslug = \"custom-slug\"\n+++\n",
        );

        let blog = blog_in(tmp.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        assert_eq!(posts.len(), 1);
        assert!(posts[0].draft);
        assert_eq!(posts[0].slug, "custom-slug");
    }

    #[test]
    fn test_slug_falls_back_to_file_stem() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");

        write_file(
            &content,
            "my-first-post.md",
            "+++\ntitle = \"My First Post\"\ndate = 2024-01-01\n+++\n",
        );

        let blog = blog_in(tmp.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts[0].slug, "my-first-post");
    }

    #[test]
    fn test_missing_content_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert!(posts.is_empty());
    }
}
