use std::path::Path;

use globset::{Glob, GlobMatcher};
use tokio::fs;

use crate::{error::RenameError, model::FileEntry};

pub const ZIP_PATTERN: &str = "*.zip";

pub fn zip_matcher() -> Result<GlobMatcher, RenameError> {
    Ok(Glob::new(ZIP_PATTERN)?.compile_matcher())
}

/// Lists the direct children of `directory` matching [`ZIP_PATTERN`], hidden
/// names included. Anything that is not a file is skipped. The order is
/// whatever the filesystem yields.
pub async fn enumerate_zip_files(directory: &Path) -> Result<Vec<FileEntry>, RenameError> {
    if !directory.is_dir() {
        return Err(RenameError::InvalidDirectory(directory.to_path_buf()));
    }

    let matcher = zip_matcher()?;
    let mut read_dir = fs::read_dir(directory).await?;

    let mut entries = Vec::new();
    while let Some(entry) = read_dir.next_entry().await? {
        let path = entry.path();
        if !matcher.is_match(entry.file_name()) {
            continue;
        }

        if !fs::metadata(&path).await.is_ok_and(|meta| meta.is_file()) {
            tracing::debug!("skipping non file match: {:?}", path);
            continue;
        }

        entries.push(FileEntry::from(&path)?);
    }

    Ok(entries)
}
