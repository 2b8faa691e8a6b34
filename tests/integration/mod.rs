use chrono::NaiveDate;
use std::path::Path;
use tempfile::TempDir;
use trendlog::config::{AppConfig, ArchiveLayout, WorkspacePaths};
use trendlog::Pipeline;

pub struct IntegrationHarness {
    workspace: TempDir,
    config: AppConfig,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_layout(layout: ArchiveLayout) -> Self {
        let mut config = AppConfig::default();
        config.storage.archive_layout = layout;
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace, config }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn paths(&self) -> WorkspacePaths {
        WorkspacePaths::new(self.workspace.path(), &self.config.storage)
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(&self.paths(), &self.config)
    }
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}

mod archive_rebuild;
mod day_accumulation;
mod overview_document;
pub mod support;
