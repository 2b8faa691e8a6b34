//! Deterministic Markdown rendering for the overview and archive documents.
//!
//! Output depends only on the records, the date (for archives), and the
//! configured heading. No timestamps, no sorting.

use crate::store::DATE_FORMAT;
use crate::terms::TermRecord;
use chrono::NaiveDate;

/// Opens the generated list region in a document.
pub const BEGIN_MARKER: &str = "<!-- BEGIN -->";
/// Closes the generated list region in a document.
pub const END_MARKER: &str = "<!-- END -->";

#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    overview_title: String,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new("Trending Searches")
    }
}

impl MarkdownRenderer {
    pub fn new(overview_title: impl Into<String>) -> Self {
        Self {
            overview_title: overview_title.into(),
        }
    }

    /// Full overview document for the latest day set.
    pub fn render_overview(&self, records: &[TermRecord]) -> String {
        let mut doc = String::new();
        doc.push_str(&format!("# {}\n\n", self.overview_title));
        doc.push_str(&self.render_region(records));
        doc
    }

    /// Archive document for one calendar day.
    pub fn render_archive_entry(&self, records: &[TermRecord], date: NaiveDate) -> String {
        let mut doc = String::new();
        doc.push_str(&format!("# {}\n\n", date.format(DATE_FORMAT)));
        doc.push_str(&format!("Total: {}\n\n", count_label(records.len())));
        doc.push_str(&self.render_region(records));
        doc
    }

    /// Marker-delimited numbered list, ending in a newline.
    pub fn render_region(&self, records: &[TermRecord]) -> String {
        let mut region = String::new();
        region.push_str(BEGIN_MARKER);
        region.push('\n');
        region.push_str(&render_list(records));
        region.push_str(END_MARKER);
        region.push('\n');
        region
    }
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 term".into()
    } else {
        format!("{count} terms")
    }
}

fn render_list(records: &[TermRecord]) -> String {
    let mut list = String::new();
    for (idx, record) in records.iter().enumerate() {
        let title = escape_link_text(record.key());
        match &record.url {
            Some(url) => list.push_str(&format!(
                "{}. [{}]({})\n",
                idx + 1,
                title,
                escape_link_target(url)
            )),
            None => list.push_str(&format!("{}. {}\n", idx + 1, title)),
        }
    }
    list
}

/// Titles come from a remote page; angle brackets are entity-escaped so no
/// title can ever spell a region marker.
fn escape_link_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '[' | ']' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

fn escape_link_target(url: &str) -> String {
    url.replace(' ', "%20")
        .replace('(', "%28")
        .replace(')', "%29")
        .replace('<', "%3C")
        .replace('>', "%3E")
}

/// Replaces the marker region of an existing document with `region`.
///
/// Returns `None` when the document lacks an ordered BEGIN/END pair, in which
/// case the caller should write a fresh document instead.
pub fn splice_region(document: &str, region: &str) -> Option<String> {
    let start = document.find(BEGIN_MARKER)?;
    let end_rel = document[start..].find(END_MARKER)?;
    let mut end = start + end_rel + END_MARKER.len();
    if document[end..].starts_with('\n') {
        end += 1;
    }
    let mut spliced = String::with_capacity(document.len() + region.len());
    spliced.push_str(&document[..start]);
    spliced.push_str(region);
    spliced.push_str(&document[end..]);
    Some(spliced)
}
