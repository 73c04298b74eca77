use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("File operation failed: {0}")]
    FileOperationFailed(#[from] std::io::Error),
    #[error("Directory '{}' does not exist or is not a directory", .0.display())]
    InvalidDirectory(PathBuf),
    #[error("File name of '{}' is not valid unicode", .0.display())]
    InvalidFileName(PathBuf),
    #[error("Building the file pattern failed: {0}")]
    InvalidPattern(#[from] globset::Error),
    #[error("Target '{}' already exists", .0.display())]
    TargetExists(PathBuf),
}
