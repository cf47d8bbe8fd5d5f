//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::helpers::{editor, prompt};
use crate::Blog;

/// Default scaffold used when scaffolds/post.md is absent
const DEFAULT_SCAFFOLD: &str = r#"+++
title = "{{ title }}"
date = {{ date }}
draft = {{ draft }}
+++
"#;

/// Create a new post file and return its path
pub fn create_post(blog: &Blog, title: &str, slug: Option<&str>, draft: bool) -> Result<PathBuf> {
    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("Title must not be empty");
    }

    let slug = match slug {
        Some(s) => s.trim().to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Could not derive a slug from {:?}, pass one with --slug", title);
    }

    let now = chrono::Local::now();

    // Generate filename from the configured pattern
    let pattern = &blog.config.extra.writing.new_post_name;
    let filename = pattern
        .replace(":title", &slug)
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string());

    fs::create_dir_all(&blog.content_dir)?;
    let file_path = blog.content_dir.join(&filename);

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    // Load scaffold template
    let scaffold_path = blog.scaffold_dir.join("post.md");
    let scaffold_content = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        DEFAULT_SCAFFOLD.to_string()
    };

    // Replace template variables
    let content = scaffold_content
        .replace("{{ title }}", &toml_escape(title))
        .replace("{{ date }}", &now.format("%Y-%m-%d").to_string())
        .replace("{{ draft }}", if draft { "true" } else { "false" });

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Run the new command
///
/// Prompts for title and slug when no title was given on the command
/// line, then opens the editor on the created file.
pub fn run(
    blog: &Blog,
    title: Option<&str>,
    slug: Option<&str>,
    draft: bool,
    no_edit: bool,
) -> Result<()> {
    let (title, slug) = match title {
        Some(t) => (t.to_string(), slug.map(str::to_string)),
        None => {
            let title = prompt::prompt("Title")?;
            if title.is_empty() {
                anyhow::bail!("Title must not be empty");
            }
            let slug = match slug {
                Some(s) => s.to_string(),
                None => prompt::prompt_with_default("Slug", &slug::slugify(&title))?,
            };
            (title, Some(slug))
        }
    };

    let path = create_post(blog, &title, slug.as_deref(), draft)?;

    if !no_edit {
        match editor::resolve(blog.config.extra.writing.editor.as_deref()) {
            Some(cmd) => editor::open(&cmd, &path)?,
            None => {
                tracing::info!("No editor configured, set $EDITOR to open new posts automatically")
            }
        }
    }

    Ok(())
}

/// Escape a string for use inside a TOML basic string
fn toml_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
