//! Configuration primitives for trendlog.
//!
//! Stored in a machine-readable TOML file. Lookup order:
//!   1. an explicit path (the `--config` flag),
//!   2. the `TRENDLOG_CONFIG` environment variable,
//!   3. `trendlog.toml` in the storage root,
//!   4. `trendlog/config.toml` in the OS config directory.
//!
//! Every field has a default, so a missing file or a partial file is valid.

mod paths;

pub use paths::{workspace_root, WorkspacePaths};

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration for one storage root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Which acquisition strategy to use and how to reach it.
    #[serde(default)]
    pub source: SourceSettings,
    /// Where day files, archives, and the overview live.
    #[serde(default)]
    pub storage: StorageSettings,
    /// Rendering knobs for the Markdown reports.
    #[serde(default)]
    pub reports: ReportSettings,
}

/// Acquisition strategy selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// JSON top-search API.
    #[default]
    TopSearchApi,
    /// Titles scraped from the billboard page markup.
    BillboardHtml,
    /// JSON state embedded in the billboard page's `js-initialData` script.
    InitialData,
}

impl SourceKind {
    pub fn default_endpoint(self) -> &'static str {
        match self {
            SourceKind::TopSearchApi => "https://www.zhihu.com/api/v4/search/top_search",
            SourceKind::BillboardHtml | SourceKind::InitialData => {
                "https://www.zhihu.com/billboard"
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SourceKind::TopSearchApi => "top_search_api",
            SourceKind::BillboardHtml => "billboard_html",
            SourceKind::InitialData => "initial_data",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(default)]
    pub kind: SourceKind,
    /// Overrides the strategy's default endpoint.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Base URL for generated search links.
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            endpoint: None,
            search_url: default_search_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl SourceSettings {
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.kind.default_endpoint())
    }
}

fn default_search_url() -> String {
    "https://www.zhihu.com/search".into()
}

const fn default_timeout_ms() -> u64 {
    15_000
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0.0.0 Safari/537.36"
        .into()
}

/// Archive file placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveLayout {
    /// `archives/<yyyy-MM-dd>.md`
    #[default]
    Flat,
    /// `archives/<yyyy>/<yyyy-MM-dd>.md`
    ByYear,
}

/// Storage locations, relative to the storage root unless absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_raw_dir")]
    pub raw_dir: PathBuf,
    #[serde(default = "default_archives_dir")]
    pub archives_dir: PathBuf,
    #[serde(default = "default_overview_file")]
    pub overview_file: PathBuf,
    #[serde(default)]
    pub archive_layout: ArchiveLayout,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            raw_dir: default_raw_dir(),
            archives_dir: default_archives_dir(),
            overview_file: default_overview_file(),
            archive_layout: ArchiveLayout::default(),
        }
    }
}

fn default_raw_dir() -> PathBuf {
    PathBuf::from("raw")
}

fn default_archives_dir() -> PathBuf {
    PathBuf::from("archives")
}

fn default_overview_file() -> PathBuf {
    PathBuf::from("README.md")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Top-level heading of the overview document.
    #[serde(default = "default_overview_title")]
    pub overview_title: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            overview_title: default_overview_title(),
        }
    }
}

fn default_overview_title() -> String {
    "Trending Searches".into()
}

/// File name looked up in the storage root.
pub const CONFIG_FILE_NAME: &str = "trendlog.toml";
/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TRENDLOG_CONFIG";

/// A config file candidate and whether it was asked for by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// Set for `--config` and `TRENDLOG_CONFIG`; such a file must exist.
    pub required: bool,
}

/// Resolves which config file applies, whether or not it exists.
pub fn config_file_path(explicit: Option<&Path>, root: &Path) -> Option<ConfigLocation> {
    let from_env = env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    resolve_config_file(explicit, from_env, root)
}

fn resolve_config_file(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    root: &Path,
) -> Option<ConfigLocation> {
    if let Some(path) = explicit.map(Path::to_path_buf).or(from_env) {
        return Some(ConfigLocation {
            path,
            required: true,
        });
    }
    let local = root.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(ConfigLocation {
            path: local,
            required: false,
        });
    }
    BaseDirs::new().map(|dirs| ConfigLocation {
        path: dirs.config_dir().join("trendlog").join("config.toml"),
        required: false,
    })
}

/// Loads the configuration from disk or returns defaults.
///
/// A file named by `--config` or `TRENDLOG_CONFIG` must exist; implicit
/// candidates fall back to defaults when absent.
pub fn load_or_default(explicit: Option<&Path>, root: &Path) -> Result<AppConfig> {
    load_located(config_file_path(explicit, root))
}

fn load_located(location: Option<ConfigLocation>) -> Result<AppConfig> {
    let Some(ConfigLocation { path, required }) = location else {
        return Ok(AppConfig::default());
    };
    if !path.exists() {
        if required {
            anyhow::bail!("Config file {:?} does not exist", path);
        }
        return Ok(AppConfig::default());
    }
    load(&path)
}

pub fn load(path: &Path) -> Result<AppConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let cfg: AppConfig = toml::from_str(&data)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(cfg)
}
