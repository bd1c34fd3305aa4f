pub mod output;
pub mod prompt;
pub mod session;

use crate::checker::Checker;
use crate::error::Result;
use crate::Config;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Load the first readable dictionary among the configured candidates, falling
/// back to the embedded word list, then attach the user dictionary.
pub fn load_checker(config: &Config) -> Result<Checker> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut checker = None;
    for candidate in config.dictionary_candidates() {
        pb.set_message(format!("Loading {}", candidate.display()));
        match Checker::from_path(&candidate) {
            Ok(loaded) => {
                checker = Some(loaded);
                break;
            }
            Err(e) => log::warn!("{}", e),
        }
    }
    pb.finish_and_clear();

    let checker = checker.unwrap_or_else(|| {
        log::warn!(
            "No word list could be read, falling back to the small embedded dictionary. \
             Pass a DICTIONARY argument or set `dictionary` in the config file."
        );
        Checker::embedded()
    });

    match &config.user_dictionary {
        Some(path) => checker.with_user_dictionary(path),
        None => Ok(checker),
    }
}
