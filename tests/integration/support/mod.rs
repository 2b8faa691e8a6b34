use trendlog::{AcquisitionError, TermRecord, TermSource};

/// Source that always fails the way an unreachable upstream does.
pub struct UnreachableSource;

impl TermSource for UnreachableSource {
    fn name(&self) -> &str {
        "unreachable"
    }

    fn fetch(&self) -> Result<Vec<TermRecord>, AcquisitionError> {
        Err(AcquisitionError::Status {
            url: "https://upstream.invalid/top".into(),
            status: 503,
        })
    }
}

pub fn titled(names: &[&str]) -> Vec<TermRecord> {
    names.iter().map(|name| TermRecord::titled(*name)).collect()
}

pub fn titles(records: &[TermRecord]) -> Vec<String> {
    records.iter().map(|record| record.title.clone()).collect()
}
