pub mod markdown;
pub mod writer;

pub use markdown::{splice_region, MarkdownRenderer, BEGIN_MARKER, END_MARKER};
pub use writer::{PublishedReports, ReportWriter};
