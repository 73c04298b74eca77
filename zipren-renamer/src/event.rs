use std::{fmt::Display, io::Write, path::PathBuf};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    EnumerationFailed(PathBuf, String),
    Finished(Summary),
    Found(usize, PathBuf),
    InvalidDirectory(PathBuf),
    NoMatches(PathBuf),
    RenameFailed(String, String),
    Renamed(String, String),
    WouldRename(String, String),
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::EnumerationFailed(path, reason) => {
                write!(f, "Error: Reading '{}' failed: {}", path.display(), reason)
            }
            Message::Finished(summary) => write!(f, "\n{}", summary),
            Message::Found(count, path) => {
                write!(f, "Found {} zip files in '{}'", count, path.display())
            }
            Message::InvalidDirectory(path) => write!(
                f,
                "Error: Directory '{}' does not exist or is not a directory",
                path.display()
            ),
            Message::NoMatches(path) => write!(f, "No zip files found in '{}'", path.display()),
            Message::RenameFailed(name, reason) => {
                write!(f, "Error renaming {}: {}", name, reason)
            }
            Message::Renamed(old, new) => write!(f, "Renamed: {} -> {}", old, new),
            Message::WouldRename(old, new) => write!(f, "Would rename: {} -> {}", old, new),
        }
    }
}

/// Dry runs report `renamed` as well, which stays zero because nothing is
/// touched. `planned` holds the number of simulated renames.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub dry_run: bool,
    pub failed: usize,
    pub planned: usize,
    pub renamed: usize,
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.dry_run {
            write!(
                f,
                "Dry run completed. {} files would be renamed.",
                self.renamed
            )
        } else if self.failed > 0 {
            write!(
                f,
                "Successfully renamed {} zip files, {} failed.",
                self.renamed, self.failed
            )
        } else {
            write!(f, "Successfully renamed {} zip files.", self.renamed)
        }
    }
}

#[derive(Clone, Debug)]
pub struct Emitter {
    sender: UnboundedSender<Message>,
}

impl Emitter {
    pub fn start() -> (Self, UnboundedReceiver<Message>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn emit(&self, message: Message) {
        if let Err(error) = self.sender.send(message) {
            tracing::error!("emitting message failed: {:?}", error);
        }
    }
}

/// Writes every message as one line until all emitters are dropped.
pub async fn print_messages<W: Write>(
    mut receiver: UnboundedReceiver<Message>,
    writer: &mut W,
) -> Result<(), std::io::Error> {
    while let Some(message) = receiver.recv().await {
        writeln!(writer, "{}", message)?;
    }
    writer.flush()
}
