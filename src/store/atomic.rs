use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces `path` with `contents` via a sibling temp file and a rename.
///
/// Readers observe either the previous file or the complete new one. Parent
/// directories are created when missing.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {:?}", parent))?;
    let mut staged = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to stage a write in {:?}", parent))?;
    staged
        .write_all(contents)
        .with_context(|| format!("Failed to write staged copy of {:?}", path))?;
    staged
        .as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush staged copy of {:?}", path))?;
    staged
        .persist(path)
        .with_context(|| format!("Failed to move staged copy into {:?}", path))?;
    Ok(())
}
