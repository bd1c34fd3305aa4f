pub mod dictionary;
pub mod suggestions;
pub mod tokenizer;

use crate::error::{Error, Result};
use dictionary::WordSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Cursor, Write};
use std::path::{Path, PathBuf};

/// Word list compiled into the binary, used when no system list is available
pub const EMBEDDED_WORDS: &str = include_str!("../../assets/basic-words.txt");

/// Decides whether a word is known and which known words resemble it.
///
/// Words the user accepts can be appended to a user dictionary file, which is
/// merged into the word set whenever a checker is built with one.
#[derive(Debug)]
pub struct Checker {
    words: WordSet,
    user_dictionary: Option<PathBuf>,
}

impl Checker {
    /// Build a checker from a word list on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let words = WordSet::from_path(path).map_err(|source| Error::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Loaded {} words from {} (longest: {})",
            words.len(),
            path.display(),
            words.longest()
        );
        Ok(Self::from_words(words))
    }

    /// Build a checker from the embedded basic word list
    pub fn embedded() -> Self {
        let words = WordSet::from_reader(Cursor::new(EMBEDDED_WORDS))
            .unwrap_or_else(|_| WordSet::new());
        log::debug!("Loaded {} embedded words", words.len());
        Self::from_words(words)
    }

    pub fn from_words(words: WordSet) -> Self {
        Self {
            words,
            user_dictionary: None,
        }
    }

    /// Attach a user dictionary, creating it (and its directory) if missing
    /// and merging its words if it already exists.
    pub fn with_user_dictionary(mut self, path: &Path) -> Result<Self> {
        let wrap = |source: io::Error| Error::UserDictionary {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(wrap)?;
            }
        }

        if path.exists() {
            let file = File::open(path).map_err(wrap)?;
            let before = self.words.len();
            self.words
                .extend_from_reader(BufReader::new(file))
                .map_err(wrap)?;
            log::debug!(
                "Merged {} words from user dictionary {}",
                self.words.len() - before,
                path.display()
            );
        } else {
            File::create(path).map_err(wrap)?;
            log::info!("Created user dictionary {}", path.display());
        }

        self.user_dictionary = Some(path.to_path_buf());
        Ok(self)
    }

    pub fn is_mistake(&self, word: &str) -> bool {
        !self.words.contains(word)
    }

    /// Up to ten known words closest to `word`, nearest first
    pub fn guess(&mut self, word: &str) -> Vec<String> {
        self.words.guess(word)
    }

    /// Add a word for the rest of this session
    pub fn add(&mut self, word: &str) {
        self.words.insert(word);
    }

    /// Append a word to the user dictionary file. Nothing in memory changes;
    /// call [`Checker::add`] as well to accept the word right away.
    pub fn add_to_user_dictionary(&self, word: &str) -> io::Result<()> {
        let path = self.user_dictionary.as_deref().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "No user dictionary configured")
        })?;

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", word.to_lowercase())
    }

    pub fn user_dictionary(&self) -> Option<&Path> {
        self.user_dictionary.as_deref()
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }
}
