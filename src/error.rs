use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that leave nothing to work with. A session cannot start after any
/// of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read dictionary file: {}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot open user dictionary: {}", path.display())]
    UserDictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read document: {}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Document is empty")]
    EmptyDocument,

    #[error("No mistakes found")]
    NoMistakes,
}

pub type Result<T> = std::result::Result<T, Error>;
