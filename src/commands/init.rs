//! Initialize a new blog directory

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new blog in the given directory
pub fn init_blog(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("config.toml");
    if config_path.exists() {
        anyhow::bail!("{:?} already has a config.toml", target_dir);
    }

    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content"))?;
    fs::create_dir_all(target_dir.join("scaffolds"))?;

    // Create default config.toml
    let config_content = r#"# The URL the site will be built for
base_url = "http://example.com"

title = ""
description = ""
default_language = "en"

[[taxonomies]]
name = "tags"

[extra.writing]
new_post_name = ":title.md"

[extra.generator]
command = "zola"
"#;

    fs::write(&config_path, config_content)?;

    // Create scaffold template
    let post_scaffold = r#"+++
title = "{{ title }}"
date = {{ date }}
draft = {{ draft }}

[taxonomies]
tags = []
+++
"#;

    fs::write(target_dir.join("scaffolds/post.md"), post_scaffold)?;

    // Section metadata for the content root
    let index_content = r#"+++
sort_by = "date"
+++
"#;

    fs::write(target_dir.join("content/_index.md"), index_content)?;

    // Create a sample post
    let now = chrono::Local::now();
    let sample_post = format!(
        r#"+++
title = "Hello World"
date = {}

[taxonomies]
tags = []
+++

Welcome to your new blog. Create the next post with:

```bash
$ blogr new "My New Post"
```

Preview it locally with `blogr serve`, and build the site with
`blogr build` once it reads well.
"#,
        now.format("%Y-%m-%d")
    );

    fs::write(target_dir.join("content/hello-world.md"), sample_post)?;

    // Keep generator output out of version control
    fs::write(target_dir.join(".gitignore"), "public/\n")?;

    Ok(())
}
