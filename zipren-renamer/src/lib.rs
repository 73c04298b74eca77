use std::io::Write;

use error::RenameError;
use event::{print_messages, Emitter, Message, Summary};
use init::enumeration::enumerate_zip_files;
use settings::Settings;
use update::name::NameGenerator;

pub mod error;
pub mod event;
mod init;
pub mod model;
pub mod settings;
mod task;
mod update;

/// Renames every zip file directly inside `settings.directory` and returns how
/// many renames succeeded. Progress is reported through `emitter`; failures
/// are reported as messages and never abort the pass.
#[tracing::instrument(skip(emitter))]
pub async fn rename_zip_files(settings: &Settings, emitter: &Emitter) -> usize {
    let summary = rename_entries(settings, emitter).await;
    let renamed = summary.renamed;

    emitter.emit(Message::Finished(summary));

    renamed
}

/// Runs one pass and writes every status message to `writer` as it arrives.
/// All messages are written before this returns.
pub async fn run<W: Write>(settings: Settings, writer: &mut W) -> usize {
    let (emitter, receiver) = Emitter::start();
    let pass = async move {
        let renamed = rename_zip_files(&settings, &emitter).await;
        drop(emitter);
        renamed
    };

    let (renamed, printed) = tokio::join!(pass, print_messages(receiver, writer));
    if let Err(err) = printed {
        tracing::error!("printing status messages failed: {:?}", err);
    }

    renamed
}

async fn rename_entries(settings: &Settings, emitter: &Emitter) -> Summary {
    let mut summary = Summary {
        dry_run: settings.dry_run,
        ..Default::default()
    };

    let directory = &settings.directory;
    let entries = match enumerate_zip_files(directory).await {
        Ok(it) => it,
        Err(RenameError::InvalidDirectory(path)) => {
            tracing::error!("invalid directory: {:?}", path);
            emitter.emit(Message::InvalidDirectory(path));
            return summary;
        }
        Err(err) => {
            tracing::error!("enumerating zip files failed: {:?}", err);
            emitter.emit(Message::EnumerationFailed(directory.clone(), err.to_string()));
            return summary;
        }
    };

    if entries.is_empty() {
        emitter.emit(Message::NoMatches(directory.clone()));
        return summary;
    }

    emitter.emit(Message::Found(entries.len(), directory.clone()));

    let mut generator = NameGenerator::new(settings.strategy, &settings.prefix);
    for entry in entries {
        let plan = generator.next(entry).await;
        if settings.dry_run {
            summary.planned += 1;
            emitter.emit(Message::WouldRename(plan.entry.display_name(), plan.display_name()));
            continue;
        }

        match task::rename_path(&plan).await {
            Ok(()) => {
                tracing::info!("renamed {:?} to {:?}", plan.entry.path, plan.target());
                summary.renamed += 1;
                emitter.emit(Message::Renamed(plan.entry.display_name(), plan.display_name()));
            }
            Err(err) => {
                tracing::warn!("renaming {:?} failed: {:?}", plan.entry.path, err);
                summary.failed += 1;
                emitter.emit(Message::RenameFailed(plan.entry.display_name(), err.to_string()));
            }
        }
    }

    summary
}
