use std::{ffi::OsString, time::Duration};

use chrono::Local;
use uuid::Uuid;

use crate::model::{FileEntry, RenamePlan, Strategy};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S_%6f";
const TIMESTAMP_PAUSE: Duration = Duration::from_millis(10);
const RANDOM_ID_LENGTH: usize = 8;

/// Produces the new names for one renaming pass. The sequential counter lives
/// here and is shared by every file of the pass, regardless of its stem.
#[derive(Debug)]
pub struct NameGenerator {
    counter: usize,
    prefix: String,
    strategy: Strategy,
}

impl NameGenerator {
    pub fn new(strategy: Strategy, prefix: &str) -> Self {
        Self {
            counter: 1,
            prefix: prefix.to_owned(),
            strategy,
        }
    }

    pub async fn next(&mut self, entry: FileEntry) -> RenamePlan {
        let suffix = match self.strategy {
            Strategy::Timestamp => {
                let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
                // keeps two files of the same batch from sharing a timestamp
                tokio::time::sleep(TIMESTAMP_PAUSE).await;
                timestamp
            }
            Strategy::Sequential => {
                let suffix = format!("{:03}", self.counter);
                self.counter += 1;
                suffix
            }
            Strategy::RandomId => random_id(),
        };

        let mut name = OsString::from(&self.prefix);
        name.push(&entry.stem);
        name.push("_");
        name.push(suffix);
        name.push(&entry.extension);

        tracing::debug!("planned {:?} -> {:?}", entry.name, name);

        RenamePlan { entry, name }
    }
}

fn random_id() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(RANDOM_ID_LENGTH)
        .collect()
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use regex::Regex;

    use crate::model::{FileEntry, Strategy};

    use super::NameGenerator;

    fn entry(path: &str) -> FileEntry {
        FileEntry::from(Path::new(path)).unwrap()
    }

    #[tokio::test]
    async fn sequential_counts_across_stems() {
        let mut generator = NameGenerator::new(Strategy::Sequential, "");

        let first = generator.next(entry("/d/a.zip")).await;
        let second = generator.next(entry("/d/b.zip")).await;
        let third = generator.next(entry("/d/a.zip")).await;

        assert_eq!(first.name, "a_001.zip");
        assert_eq!(second.name, "b_002.zip");
        assert_eq!(third.name, "a_003.zip");
    }

    #[tokio::test]
    async fn sequential_keeps_growing_past_three_digits() {
        let mut generator = NameGenerator::new(Strategy::Sequential, "");
        let mut last = None;
        for _ in 0..1000 {
            last = Some(generator.next(entry("/d/a.zip")).await);
        }

        assert_eq!(
            Some("a_1000.zip".to_owned()),
            last.map(|plan| plan.display_name())
        );
    }

    #[tokio::test]
    async fn prefix_leads_every_strategy() {
        for strategy in [Strategy::Timestamp, Strategy::Sequential, Strategy::RandomId] {
            let mut generator = NameGenerator::new(strategy, "batch_");
            let plan = generator.next(entry("/d/archive.zip")).await;

            let name = plan.display_name();
            assert!(name.starts_with("batch_archive_"), "{}", name);
            assert!(name.ends_with(".zip"), "{}", name);
        }
    }

    #[tokio::test]
    async fn timestamp_has_microsecond_precision() {
        let mut generator = NameGenerator::new(Strategy::Timestamp, "");
        let plan = generator.next(entry("/d/a.zip")).await;

        let pattern = Regex::new(r"^a_\d{8}_\d{6}_\d{6}\.zip$").unwrap();
        let name = plan.display_name();
        assert!(pattern.is_match(&name), "{}", name);
    }

    #[tokio::test]
    async fn timestamps_differ_within_a_batch() {
        let mut generator = NameGenerator::new(Strategy::Timestamp, "");
        let first = generator.next(entry("/d/a.zip")).await;
        let second = generator.next(entry("/d/a.zip")).await;

        assert_ne!(first.name, second.name);
    }

    #[tokio::test]
    async fn random_id_is_eight_hex_chars() {
        let mut generator = NameGenerator::new(Strategy::RandomId, "");
        let plan = generator.next(entry("/d/a.zip")).await;

        let pattern = Regex::new(r"^a_[0-9a-f]{8}\.zip$").unwrap();
        let name = plan.display_name();
        assert!(pattern.is_match(&name), "{}", name);
    }

    #[tokio::test]
    async fn random_ids_differ_between_runs() {
        let first = NameGenerator::new(Strategy::RandomId, "")
            .next(entry("/d/a.zip"))
            .await;
        let second = NameGenerator::new(Strategy::RandomId, "")
            .next(entry("/d/a.zip"))
            .await;

        assert_ne!(first.name, second.name);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_unicode_stem_is_kept_byte_for_byte() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt, path::PathBuf};

        let path = PathBuf::from("/d").join(OsStr::from_bytes(b"caf\xe9.zip"));
        let mut generator = NameGenerator::new(Strategy::Sequential, "p_");
        let plan = generator.next(FileEntry::from(&path).unwrap()).await;

        assert_eq!(plan.name, OsStr::from_bytes(b"p_caf\xe9_001.zip"));
    }
}
