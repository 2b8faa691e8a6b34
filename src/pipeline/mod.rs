//! One accumulation run: acquire, merge into the day set, persist, publish.

use crate::acquisition::{acquire, TermSource};
use crate::config::{AppConfig, WorkspacePaths};
use crate::reports::{MarkdownRenderer, ReportWriter};
use crate::store::{DayStore, DATE_FORMAT};
use crate::terms::{merge_terms, sanitize_terms, TermRecord};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{info, info_span};
use uuid::Uuid;

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub date: NaiveDate,
    /// Records delivered by the source after sanitizing.
    pub fetched: usize,
    /// Records already stored for the day before this run.
    pub existing: usize,
    /// New titles appended by this run.
    pub added: usize,
    /// Size of the day set after merging.
    pub total: usize,
    pub day_file: PathBuf,
    pub overview_path: PathBuf,
    pub archive_path: PathBuf,
}

pub struct Pipeline {
    store: DayStore,
    writer: ReportWriter,
}

impl Pipeline {
    pub fn new(paths: &WorkspacePaths, config: &AppConfig) -> Self {
        let renderer = MarkdownRenderer::new(config.reports.overview_title.clone());
        Self {
            store: DayStore::new(paths.raw_dir.clone()),
            writer: ReportWriter::new(paths, config.storage.archive_layout, renderer),
        }
    }

    pub fn store(&self) -> &DayStore {
        &self.store
    }

    pub fn writer(&self) -> &ReportWriter {
        &self.writer
    }

    /// Fetches from `source` and records the batch under `date`.
    ///
    /// Acquisition failures return before any file is read or written.
    pub fn run(&self, source: &dyn TermSource, date: NaiveDate) -> Result<RunSummary> {
        let incoming = acquire(source)
            .with_context(|| format!("Acquisition from {} failed", source.name()))?;
        self.record(date, incoming)
    }

    /// Merges `incoming` into the stored day set and regenerates both reports.
    pub fn record(&self, date: NaiveDate, incoming: Vec<TermRecord>) -> Result<RunSummary> {
        let run_id = Uuid::new_v4();
        let span = info_span!("run", %run_id, date = %date.format(DATE_FORMAT));
        let _guard = span.enter();

        let incoming = sanitize_terms(incoming);
        let existing = self.store.load(date)?;
        let merged = merge_terms(&incoming, &existing);
        let known: HashSet<&str> = existing.iter().map(TermRecord::key).collect();
        let added = merged.len() - known.len();

        let day_file = self.store.save(date, &merged)?;
        let published = self.writer.publish(&merged, date)?;

        info!(
            fetched = incoming.len(),
            existing = existing.len(),
            added,
            total = merged.len(),
            "day set updated"
        );
        Ok(RunSummary {
            run_id,
            date,
            fetched: incoming.len(),
            existing: existing.len(),
            added,
            total: merged.len(),
            day_file,
            overview_path: published.overview_path,
            archive_path: published.archive_path,
        })
    }

    /// Re-renders the archive entry of every stored day. Returns how many
    /// entries were written.
    pub fn rebuild_archives(&self) -> Result<usize> {
        let dates = self.store.list_dates()?;
        for date in &dates {
            let records = self.store.load(*date)?;
            self.writer.write_archive(&records, *date)?;
        }
        info!(count = dates.len(), "rebuilt archive entries");
        Ok(dates.len())
    }
}
