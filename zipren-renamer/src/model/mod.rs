use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::error::RenameError;

mod strategy;

pub use strategy::Strategy;

/// Name parts are kept as os strings, names that are not valid unicode are
/// renamed all the same.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileEntry {
    pub extension: OsString,
    pub name: OsString,
    pub parent: PathBuf,
    pub path: PathBuf,
    pub stem: OsString,
}

impl FileEntry {
    pub fn from(path: &Path) -> Result<Self, RenameError> {
        let invalid = || RenameError::InvalidFileName(path.to_path_buf());

        let name = path.file_name().ok_or_else(invalid)?;
        let stem = path.file_stem().ok_or_else(invalid)?;
        let mut extension = OsString::new();
        if let Some(ext) = path.extension() {
            extension.push(".");
            extension.push(ext);
        }
        let parent = path.parent().ok_or_else(invalid)?;

        Ok(Self {
            extension,
            name: name.to_owned(),
            parent: parent.to_path_buf(),
            path: path.to_path_buf(),
            stem: stem.to_owned(),
        })
    }

    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().to_string()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenamePlan {
    pub entry: FileEntry,
    pub name: OsString,
}

impl RenamePlan {
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().to_string()
    }

    pub fn target(&self) -> PathBuf {
        self.entry.parent.join(&self.name)
    }
}

#[cfg(test)]
mod test {
    use std::{
        ffi::OsString,
        path::{Path, PathBuf},
    };

    use super::{FileEntry, RenamePlan};

    #[test]
    fn entry_splits_stem_and_extension() {
        let entry = FileEntry::from(Path::new("/downloads/report.final.zip")).unwrap();

        assert_eq!(entry.name, "report.final.zip");
        assert_eq!(entry.stem, "report.final");
        assert_eq!(entry.extension, ".zip");
        assert_eq!(PathBuf::from("/downloads"), entry.parent);
    }

    #[test]
    fn hidden_entry_keeps_leading_dot_in_stem() {
        let entry = FileEntry::from(Path::new("/downloads/.hidden.zip")).unwrap();

        assert_eq!(entry.stem, ".hidden");
        assert_eq!(entry.extension, ".zip");
    }

    #[test]
    fn plan_target_stays_in_parent() {
        let entry = FileEntry::from(Path::new("/downloads/a.zip")).unwrap();
        let plan = RenamePlan {
            entry,
            name: OsString::from("a_001.zip"),
        };

        assert_eq!(PathBuf::from("/downloads/a_001.zip"), plan.target());
        assert_eq!("a_001.zip", plan.display_name());
    }

    #[cfg(unix)]
    #[test]
    fn entry_accepts_non_unicode_names() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let name = OsStr::from_bytes(b"caf\xe9.zip");
        let entry = FileEntry::from(&Path::new("/downloads").join(name)).unwrap();

        assert_eq!(entry.name, name);
        assert_eq!(entry.stem, OsStr::from_bytes(b"caf\xe9"));
        assert_eq!(entry.extension, ".zip");
        assert_eq!("caf\u{FFFD}.zip", entry.display_name());
    }
}
