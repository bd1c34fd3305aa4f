use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "typotattler";
const LOCAL_CONFIG: &str = ".typotattler.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Word list to check against. Falls back to `fallback_dictionaries`.
    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    #[serde(default = "default_fallback_dictionaries")]
    pub fallback_dictionaries: Vec<PathBuf>,

    #[serde(default)]
    pub user_dictionary: Option<PathBuf>,

    #[serde(default = "default_max_suggestions_shown")]
    pub max_suggestions_shown: usize,
}

fn default_fallback_dictionaries() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/usr/share/dict/words"),
        PathBuf::from("/usr/dict/words"),
    ]
}

fn default_max_suggestions_shown() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            fallback_dictionaries: default_fallback_dictionaries(),
            user_dictionary: None,
            max_suggestions_shown: default_max_suggestions_shown(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(dictionary: Option<PathBuf>, user_dictionary: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                log::debug!("Reading global config {}", global_path.display());
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG);
        if local_path.exists() {
            log::debug!("Reading local config {}", local_path.display());
            config = config.merge(Self::from_file(&local_path)?);
        }

        if dictionary.is_some() {
            config.dictionary = dictionary;
        }
        if user_dictionary.is_some() {
            config.user_dictionary = user_dictionary;
        }

        if config.user_dictionary.is_none() {
            config.user_dictionary = Self::default_user_dict_path();
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if other.fallback_dictionaries != default_fallback_dictionaries() {
            self.fallback_dictionaries = other.fallback_dictionaries;
        }
        if other.user_dictionary.is_some() {
            self.user_dictionary = other.user_dictionary;
        }
        if other.max_suggestions_shown != default_max_suggestions_shown() {
            self.max_suggestions_shown = other.max_suggestions_shown;
        }
        self
    }

    /// Dictionary candidates in the order they should be tried
    pub fn dictionary_candidates(&self) -> Vec<PathBuf> {
        self.dictionary
            .iter()
            .chain(self.fallback_dictionaries.iter())
            .cloned()
            .collect()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_user_dict_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().join("usrdict.txt"))
    }
}
