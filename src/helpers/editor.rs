//! Editor resolution and invocation

use anyhow::{bail, Context, Result};
use std::env;
use std::path::Path;
use std::process::Command;

/// Resolve which editor to use: $VISUAL, then $EDITOR, then the
/// configured fallback
pub fn resolve(config_editor: Option<&str>) -> Option<String> {
    resolve_from(
        env::var("VISUAL").ok(),
        env::var("EDITOR").ok(),
        config_editor,
    )
}

fn resolve_from(
    visual: Option<String>,
    editor: Option<String>,
    config: Option<&str>,
) -> Option<String> {
    visual
        .filter(|s| !s.trim().is_empty())
        .or(editor.filter(|s| !s.trim().is_empty()))
        .or_else(|| config.map(str::to_string).filter(|s| !s.trim().is_empty()))
}

/// Open a file in the given editor and wait for it to exit
///
/// The editor value may carry arguments ("code -w").
pub fn open(editor: &str, path: &Path) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("Empty editor command");
    };

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch editor {:?}", program))?;

    if !status.success() {
        tracing::warn!("Editor {:?} exited with {}", program, status);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_wins() {
        let got = resolve_from(
            Some("emacsclient".to_string()),
            Some("vim".to_string()),
            Some("nano"),
        );
        assert_eq!(got.as_deref(), Some("emacsclient"));
    }

    #[test]
    fn test_editor_over_config() {
        let got = resolve_from(None, Some("vim".to_string()), Some("nano"));
        assert_eq!(got.as_deref(), Some("vim"));
    }

    #[test]
    fn test_config_fallback() {
        let got = resolve_from(None, None, Some("nano"));
        assert_eq!(got.as_deref(), Some("nano"));
    }

    #[test]
    fn test_empty_values_skipped() {
        let got = resolve_from(Some("".to_string()), Some("  ".to_string()), None);
        assert_eq!(got, None);
    }
}
