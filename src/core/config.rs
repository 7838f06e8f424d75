//! Configuration management for docsearch.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults matching the documentation
//! site layout (`src/content/docs`, six content areas, three
//! excluded pages).

use crate::core::error::{DocSearchError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local config file, checked before the XDG location
pub const LOCAL_CONFIG_FILE: &str = "docsearch.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub records: RecordsConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Where content lives and which files are eligible
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Root of the markdown tree
    #[serde(default = "default_content_root")]
    pub root: PathBuf,

    /// Directory basenames the walker may descend into
    #[serde(default = "default_subfolders")]
    pub subfolders: Vec<String>,

    /// Filenames never indexed, wherever they appear
    #[serde(default = "default_exclude_files")]
    pub exclude_files: Vec<String>,

    /// Markup extensions, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

/// Output artifact configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Record file written by each build
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

/// Fixed values stamped onto every record
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordsConfig {
    /// Classification string for every record
    #[serde(default = "default_tag")]
    pub tag: String,

    /// Prefix joined with the slug to form the URL
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,

    /// Title used when neither front-matter nor an H1 provides one
    #[serde(default = "default_fallback_title")]
    pub fallback_title: String,
}

/// Query defaults for the search boundary
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Results per page
    #[serde(default = "default_hits_per_page")]
    pub hits_per_page: usize,

    /// Upper bound accepted for `hits_per_page`
    #[serde(default = "default_max_hits_per_page")]
    pub max_hits_per_page: usize,

    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// Attach a query id to results for click analytics
    #[serde(default = "default_click_analytics")]
    pub click_analytics: bool,

    /// Attach ranking details to each hit
    #[serde(default)]
    pub get_ranking_info: bool,
}

// Default value functions
fn default_content_root() -> PathBuf {
    PathBuf::from("src/content/docs")
}

fn default_subfolders() -> Vec<String> {
    vec![
        "about".to_string(),
        "configuration".to_string(),
        "installation".to_string(),
        "misc".to_string(),
        "usage".to_string(),
        "tools".to_string(),
    ]
}

fn default_exclude_files() -> Vec<String> {
    vec![
        "404.md".to_string(),
        "index.mdx".to_string(),
        "api.mdx".to_string(),
    ]
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "mdx".to_string()]
}

fn default_output_path() -> PathBuf {
    PathBuf::from("search.json")
}

fn default_tag() -> String {
    "Documentation".to_string()
}

fn default_url_prefix() -> String {
    "/docs".to_string()
}

fn default_fallback_title() -> String {
    "Untitled".to_string()
}

fn default_hits_per_page() -> usize {
    10
}

fn default_max_hits_per_page() -> usize {
    100
}

fn default_max_query_length() -> usize {
    500
}

fn default_click_analytics() -> bool {
    true
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_content_root(),
            subfolders: default_subfolders(),
            exclude_files: default_exclude_files(),
            extensions: default_extensions(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            url_prefix: default_url_prefix(),
            fallback_title: default_fallback_title(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            hits_per_page: default_hits_per_page(),
            max_hits_per_page: default_max_hits_per_page(),
            max_query_length: default_max_query_length(),
            click_analytics: default_click_analytics(),
            get_ranking_info: false,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocSearchError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// File priority:
    /// 1. DOCSEARCH_CONFIG env var
    /// 2. ./docsearch.toml
    /// 3. XDG config file (~/.config/docsearch/config.toml)
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("DOCSEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(root) = env::var("DOCSEARCH_CONTENT_ROOT") {
            self.content.root = PathBuf::from(root);
        }
        if let Ok(output) = env::var("DOCSEARCH_OUTPUT") {
            self.output.path = PathBuf::from(output);
        }
        if let Ok(tag) = env::var("DOCSEARCH_TAG") {
            self.records.tag = tag;
        }
        if let Ok(hits) = env::var("DOCSEARCH_HITS_PER_PAGE") {
            if let Ok(h) = hits.parse() {
                self.search.hits_per_page = h;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.content.extensions.is_empty() {
            return Err(DocSearchError::ConfigError(
                "At least one markup extension is required".to_string(),
            ));
        }

        if self
            .content
            .extensions
            .iter()
            .any(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(DocSearchError::ConfigError(
                "Extensions must be non-empty and given without a leading dot".to_string(),
            ));
        }

        if self.records.tag.trim().is_empty() {
            return Err(DocSearchError::ConfigError(
                "Record tag must not be empty".to_string(),
            ));
        }

        if !self.records.url_prefix.starts_with('/') {
            return Err(DocSearchError::ConfigError(format!(
                "URL prefix '{}' must start with '/'",
                self.records.url_prefix
            )));
        }

        if self.records.fallback_title.trim().is_empty() {
            return Err(DocSearchError::ConfigError(
                "Fallback title must not be empty".to_string(),
            ));
        }

        if self.search.hits_per_page == 0 {
            return Err(DocSearchError::ConfigError(
                "Hits per page must be non-zero".to_string(),
            ));
        }

        if self.search.hits_per_page > self.search.max_hits_per_page {
            return Err(DocSearchError::ConfigError(
                "Hits per page cannot exceed max hits per page".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(DocSearchError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Content root: {:?}", self.content.root);
        tracing::info!("  Subfolders: {:?}", self.content.subfolders);
        tracing::info!("  Excluded files: {:?}", self.content.exclude_files);
        tracing::info!("  Extensions: {:?}", self.content.extensions);
        tracing::info!("  Output: {:?}", self.output.path);
        tracing::info!("  Tag: {}", self.records.tag);
        tracing::info!("  URL prefix: {}", self.records.url_prefix);
        tracing::info!("  Hits per page: {}", self.search.hits_per_page);
    }
}
