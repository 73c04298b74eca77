use std::path::PathBuf;

use crate::model::Strategy;

#[derive(Debug)]
pub struct Settings {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub prefix: String,
    pub strategy: Strategy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            dry_run: false,
            prefix: String::new(),
            strategy: Strategy::default(),
        }
    }
}
