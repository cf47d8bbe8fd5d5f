//! blogr: content tooling for a generator-built blog
//!
//! This crate manages the content side of a static blog: scaffolding
//! posts with TOML front matter, validating the content tree, and
//! delegating build/serve to the external site generator.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory
    pub content_dir: std::path::PathBuf,
    /// Output directory written by the generator
    pub output_dir: std::path::PathBuf,
    /// Scaffold template directory
    pub scaffold_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("config.toml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No config.toml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join("content");
        let output_dir = base_dir.join(&config.output_dir);
        let scaffold_dir = base_dir.join(&config.extra.writing.scaffold_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            output_dir,
            scaffold_dir,
        })
    }

    /// Remove the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
