//! List blog content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::Blog;

/// List content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(blog);

    match content_type {
        "post" | "posts" => {
            let posts: Vec<_> = loader
                .load_posts()?
                .into_iter()
                .filter(|p| !p.draft)
                .collect();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.source
                );
            }
        }
        "draft" | "drafts" => {
            let drafts: Vec<_> = loader
                .load_posts()?
                .into_iter()
                .filter(|p| p.draft)
                .collect();
            println!("Drafts ({}):", drafts.len());
            for post in drafts {
                println!(
                    "  {} - {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.source
                );
            }
        }
        "tag" | "tags" => {
            let posts = loader.load_posts()?;
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for post in &posts {
                for tag in &post.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, draft, tag", content_type);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_unknown_type() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        assert!(run(&blog, "category").is_err());
    }

    #[test]
    fn test_known_types_on_small_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("a.md"),
            "+++\ntitle = \"A\"\ndate = 2024-01-01\n\n[taxonomies]\ntags = [\"rust\"]\n+++\n",
        )
        .unwrap();
        fs::write(
            content.join("b.md"),
            "+++\ntitle = \"B\"\ndate = 2024-02-01\ndraft = true\n+++\n",
        )
        .unwrap();

        let blog = Blog::new(tmp.path()).unwrap();
        assert!(run(&blog, "post").is_ok());
        assert!(run(&blog, "drafts").is_ok());
        assert!(run(&blog, "tags").is_ok());
    }
}
