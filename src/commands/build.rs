//! Build the site with the external generator

use anyhow::{bail, Context, Result};
use std::process::Command;

use crate::Blog;

/// Run `<generator> build` in the blog directory
pub fn run(blog: &Blog, drafts: bool) -> Result<()> {
    let generator = &blog.config.extra.generator.command;

    let mut cmd = Command::new(generator);
    cmd.current_dir(&blog.base_dir).arg("build");
    if drafts {
        cmd.arg("--drafts");
    }

    tracing::debug!("Running {:?}", cmd);

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run {:?}. Is it installed?", generator))?;

    if !status.success() {
        bail!("{} build failed with {}", generator, status);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_generator_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[extra.generator]\ncommand = \"definitely-not-a-real-binary\"\n",
        )
        .unwrap();

        let blog = Blog::new(tmp.path()).unwrap();
        let err = run(&blog, false).unwrap_err();
        assert!(err.to_string().contains("Is it installed"));
    }

    #[test]
    fn test_generator_failure_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        // "false" exists everywhere and always exits nonzero
        fs::write(
            tmp.path().join("config.toml"),
            "[extra.generator]\ncommand = \"false\"\n",
        )
        .unwrap();

        let blog = Blog::new(tmp.path()).unwrap();
        let err = run(&blog, false).unwrap_err();
        assert!(err.to_string().contains("build failed"));
    }
}
