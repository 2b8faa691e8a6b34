use crate::config::{ArchiveLayout, WorkspacePaths};
use crate::reports::markdown::{splice_region, MarkdownRenderer};
use crate::store::{write_atomic, DATE_FORMAT};
use crate::terms::TermRecord;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const ARCHIVE_EXTENSION: &str = "md";

/// Paths written by a publish.
#[derive(Debug, Clone)]
pub struct PublishedReports {
    pub overview_path: PathBuf,
    pub archive_path: PathBuf,
}

/// Writes rendered reports to their places under the storage root.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    overview_path: PathBuf,
    archives_dir: PathBuf,
    layout: ArchiveLayout,
    renderer: MarkdownRenderer,
}

impl ReportWriter {
    pub fn new(paths: &WorkspacePaths, layout: ArchiveLayout, renderer: MarkdownRenderer) -> Self {
        Self {
            overview_path: paths.overview_path.clone(),
            archives_dir: paths.archives_dir.clone(),
            layout,
            renderer,
        }
    }

    pub fn overview_path(&self) -> &Path {
        &self.overview_path
    }

    pub fn archive_path(&self, date: NaiveDate) -> PathBuf {
        let file_name = format!("{}.{ARCHIVE_EXTENSION}", date.format(DATE_FORMAT));
        match self.layout {
            ArchiveLayout::Flat => self.archives_dir.join(file_name),
            ArchiveLayout::ByYear => self
                .archives_dir
                .join(format!("{:04}", date.year()))
                .join(file_name),
        }
    }

    /// Regenerates the overview and the archive entry for `date`.
    pub fn publish(&self, records: &[TermRecord], date: NaiveDate) -> Result<PublishedReports> {
        let overview_path = self.write_overview(records)?;
        let archive_path = self.write_archive(records, date)?;
        Ok(PublishedReports {
            overview_path,
            archive_path,
        })
    }

    /// Rewrites the overview. An existing document with a marker region only
    /// has that region replaced.
    pub fn write_overview(&self, records: &[TermRecord]) -> Result<PathBuf> {
        let rendered = match self.read_existing_overview()? {
            Some(existing) => {
                let region = self.renderer.render_region(records);
                match splice_region(&existing, &region) {
                    Some(spliced) => {
                        debug!(path = %self.overview_path.display(), "updating overview region");
                        spliced
                    }
                    None => self.renderer.render_overview(records),
                }
            }
            None => self.renderer.render_overview(records),
        };
        write_atomic(&self.overview_path, rendered.as_bytes())?;
        Ok(self.overview_path.clone())
    }

    pub fn write_archive(&self, records: &[TermRecord], date: NaiveDate) -> Result<PathBuf> {
        let path = self.archive_path(date);
        let rendered = self.renderer.render_archive_entry(records, date);
        write_atomic(&path, rendered.as_bytes())?;
        debug!(path = %path.display(), "wrote archive entry");
        Ok(path)
    }

    fn read_existing_overview(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.overview_path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err)
                .with_context(|| format!("Unable to read overview {:?}", self.overview_path)),
        }
    }
}
