use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// Dataset JSON file. Relative paths resolve against the config file's directory.
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrowseConfig {
    #[serde(default)]
    pub hide_empty: bool,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_comment_preview")]
    pub comment_preview: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            hide_empty: false,
            limit: default_limit(),
            comment_preview: default_comment_preview(),
        }
    }
}

fn default_limit() -> usize {
    50
}
fn default_comment_preview() -> usize {
    80
}

#[derive(Debug, Deserialize, Clone)]
pub struct GalleryConfig {
    #[serde(default = "default_gallery_base_url")]
    pub base_url: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_url: default_gallery_base_url(),
        }
    }
}

fn default_gallery_base_url() -> String {
    "https://factorio.com/galaxy".to_string()
}

impl GalleryConfig {
    pub fn url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .with_context(|| format!("gallery.base_url is not a valid URL: {}", self.base_url))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => bail!(
                "gallery.base_url must use http or https, got '{}'",
                other
            ),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7340".to_string()
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config = parse_config(&content)?;

    if config.dataset.path.is_relative() {
        if let Some(dir) = path.parent() {
            config.dataset.path = dir.join(&config.dataset.path);
        }
    }

    Ok(config)
}

/// Parse and validate configuration text. Relative paths are left as-is.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    // Validate browse
    if config.browse.limit == 0 {
        bail!("browse.limit must be >= 1");
    }
    if config.browse.comment_preview == 0 {
        bail!("browse.comment_preview must be >= 1");
    }

    // Validate gallery
    config.gallery.url()?;

    Ok(config)
}
