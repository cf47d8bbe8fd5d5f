//! Serve the site with the external generator

use anyhow::{bail, Context, Result};
use std::process::Command;

use crate::Blog;

/// Run `<generator> serve` in the blog directory
///
/// Blocks until the generator exits; the generator handles watching
/// and rebuilding itself.
pub fn run(blog: &Blog, interface: &str, port: u16, drafts: bool, open: bool) -> Result<()> {
    let generator = &blog.config.extra.generator.command;

    let mut cmd = Command::new(generator);
    cmd.current_dir(&blog.base_dir)
        .arg("serve")
        .arg("--interface")
        .arg(interface)
        .arg("--port")
        .arg(port.to_string());
    if drafts {
        cmd.arg("--drafts");
    }
    if open {
        cmd.arg("--open");
    }

    tracing::debug!("Running {:?}", cmd);

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run {:?}. Is it installed?", generator))?;

    if !status.success() {
        bail!("{} serve exited with {}", generator, status);
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
        assert!(run(&blog, "127.0.0.1", 1111, false, false).is_err());
    }
}
