//! Blog configuration (config.toml)
//!
//! The file is shared with the external generator, so unknown keys are
//! kept as-is and tool settings live under `[extra]`.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub base_url: String,
    pub default_language: String,

    // Directory
    pub output_dir: String,

    // Taxonomies declared for the generator
    pub taxonomies: Vec<TaxonomyConfig>,

    // Tool settings, kept under [extra] so the generator ignores them
    pub extra: ExtraConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub rest: IndexMap<String, toml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base_url: "http://example.com".to_string(),
            default_language: "en".to_string(),

            output_dir: "public".to_string(),

            taxonomies: Vec::new(),

            extra: ExtraConfig::default(),
            rest: IndexMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }
}

/// A taxonomy declaration (e.g. tags)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    pub name: String,
    pub feed: bool,
    pub paginate_by: Option<usize>,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            feed: false,
            paginate_by: None,
        }
    }
}

/// The `[extra]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraConfig {
    pub writing: WritingConfig,
    pub generator: GeneratorConfig,

    #[serde(flatten)]
    pub rest: IndexMap<String, toml::Value>,
}

/// Post scaffolding settings (`[extra.writing]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WritingConfig {
    /// Filename pattern for new posts (:title, :year, :month, :day)
    pub new_post_name: String,
    /// Directory holding scaffold templates
    pub scaffold_dir: String,
    /// Editor to open new posts with, after $VISUAL and $EDITOR
    pub editor: Option<String>,
}

impl Default for WritingConfig {
    fn default() -> Self {
        Self {
            new_post_name: ":title.md".to_string(),
            scaffold_dir: "scaffolds".to_string(),
            editor: None,
        }
    }
}

/// External generator settings (`[extra.generator]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Binary invoked for build/serve
    pub command: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: "zola".to_string(),
        }
    }
}
