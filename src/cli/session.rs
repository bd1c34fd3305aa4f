use crate::checker::Checker;
use crate::cli::output::{format_mistake, format_suggestions};
use crate::cli::prompt::{concat_options, first_letters, Prompt, YES_NO, YES_NO_CANCEL};
use crate::document::{Document, MistakeId};
use crate::files::{avoid_name_collision, expand_user};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const COMMANDS: &[&str] = &[
    "next",
    "previous",
    "suggestions",
    "revision",
    "add to dictionary",
    "ignore all",
    "context",
    "go to line",
    "option overview",
    "exit",
];

const CANCELLED: &str = "Cancelled - New command:";

/// Interactive walk through the mistakes of one document
pub struct Session<R, W> {
    doc: Document,
    checker: Checker,
    prompt: Prompt<R, W>,
    source: PathBuf,
    current: Option<MistakeId>,
    shown_line: Option<usize>,
    max_suggestions: usize,
    colored: bool,
    done: bool,
    saved_to: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        doc: Document,
        checker: Checker,
        prompt: Prompt<R, W>,
        source: PathBuf,
        max_suggestions: usize,
        colored: bool,
    ) -> Self {
        Self {
            doc,
            checker,
            prompt,
            source,
            current: None,
            shown_line: None,
            max_suggestions,
            colored,
            done: false,
            saved_to: None,
        }
    }

    /// Run until the user exits. Returns where the document was saved, if it
    /// was modified.
    pub fn run(&mut self) -> io::Result<Option<PathBuf>> {
        let overview = concat_options(COMMANDS);
        let letters = first_letters(COMMANDS);

        self.prompt.say(&overview)?;
        self.next()?;

        while !self.done {
            match self.prompt.read_char("", &letters)? {
                'n' => self.next()?,
                'p' => self.previous()?,
                's' => self.suggestion()?,
                'r' => self.revision()?,
                'a' => self.add_to_dictionary()?,
                'i' => self.ignore()?,
                'c' => self.context()?,
                'g' => self.go_to_line()?,
                'o' => self.prompt.say(&overview)?,
                'e' => self.exit()?,
                _ => {}
            }
        }

        Ok(self.saved_to.clone())
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn checker(&self) -> &Checker {
        &self.checker
    }

    pub fn into_parts(self) -> (Document, Checker, Prompt<R, W>) {
        (self.doc, self.checker, self.prompt)
    }

    fn show(&mut self, id: MistakeId) -> io::Result<()> {
        let mistake = self.doc.mistake(id);
        let with_line = self.shown_line != Some(mistake.line());
        let line = self.doc.line(mistake.line()).unwrap_or_default();
        let text = format_mistake(mistake, line, with_line, self.colored);

        self.shown_line = Some(mistake.line());
        self.prompt.say(text)
    }

    fn next(&mut self) -> io::Result<()> {
        match self.doc.next_mistake() {
            Some(id) => {
                self.current = Some(id);
                self.show(id)
            }
            None => {
                self.prompt.say("End of file.")?;
                self.exit()
            }
        }
    }

    fn previous(&mut self) -> io::Result<()> {
        match self.doc.previous_mistake() {
            Some(id) => {
                self.current = Some(id);
                self.show(id)
            }
            None => self.prompt.say("Reached start of file."),
        }
    }

    fn suggestion(&mut self) -> io::Result<()> {
        let Some(id) = self.current else {
            return Ok(());
        };

        let mut suggestions = self.doc.suggestions(id, &mut self.checker);
        suggestions.truncate(self.max_suggestions);

        if suggestions.is_empty() {
            return self.prompt.say("No suggestions available.");
        }

        self.prompt.say(format!(
            "(0) - Cancel || {}",
            format_suggestions(&suggestions, self.colored)
        ))?;

        match self.prompt.read_number("", 0..=suggestions.len())? {
            0 => self.prompt.say(CANCELLED),
            n => self.replace(id, &suggestions[n - 1]),
        }
    }

    fn revision(&mut self) -> io::Result<()> {
        let Some(id) = self.current else {
            return Ok(());
        };

        loop {
            let correction = self.prompt.read_line("Revision: ")?;

            if self.checker.is_mistake(&correction) {
                let choice = self.prompt.choose(
                    "Word not in dictionary. Replace anyways? ",
                    &["replace", "add word to dictionary and replace", "no", "cancel"],
                )?;
                match choice {
                    'n' => continue,
                    'c' => return self.prompt.say(CANCELLED),
                    'a' => {
                        if let Err(e) = self.checker.add_to_user_dictionary(&correction) {
                            log::warn!("Could not save '{}' to user dictionary: {}", correction, e);
                            self.prompt.say("Could not save to file.")?;
                        }
                        self.checker.add(&correction);
                    }
                    _ => {}
                }
            }

            return self.replace(id, &correction);
        }
    }

    fn add_to_dictionary(&mut self) -> io::Result<()> {
        let Some(id) = self.current else {
            return Ok(());
        };
        let word = self.doc.mistake(id).word().to_string();

        while let Err(e) = self.checker.add_to_user_dictionary(&word) {
            log::warn!("Could not save '{}' to user dictionary: {}", word, e);
            match self.prompt.choose("Could not save to file. Retry? ", YES_NO_CANCEL)? {
                'y' => continue,
                'n' => break,
                _ => return self.prompt.say(CANCELLED),
            }
        }

        self.ignore()
    }

    fn ignore(&mut self) -> io::Result<()> {
        if let Some(id) = self.current {
            self.doc.ignore(id, &mut self.checker);
        }
        self.next()
    }

    fn context(&mut self) -> io::Result<()> {
        match self.current {
            Some(id) => {
                let context = self.doc.context(id);
                self.prompt.say(context)
            }
            None => Ok(()),
        }
    }

    fn go_to_line(&mut self) -> io::Result<()> {
        let last = self.doc.line_count();
        let line = self.prompt.read_number("Go to line: ", 1..=last)?;
        self.doc.jump_to_line(line - 1);
        self.next()
    }

    fn replace(&mut self, id: MistakeId, replacement: &str) -> io::Result<()> {
        let mistake = self.doc.mistake(id);
        let word = mistake.word().to_string();

        let choice = if mistake.has_successor() {
            self.prompt.choose(
                &format!("{} was found more than once. Replace all? ", word),
                YES_NO_CANCEL,
            )?
        } else {
            'n'
        };

        let result = match choice {
            'y' => self.doc.replace_all(id, replacement),
            'n' => self.doc.replace(id, replacement).map_err(|e| vec![e]),
            _ => return self.prompt.say(CANCELLED),
        };

        match result {
            Ok(()) => {
                // the line changed, show it again with the next mistake
                self.shown_line = None;
                self.next()
            }
            Err(failures) => {
                self.prompt.say(format!(
                    "Error: Mismatch between the line number recorded for the mistake and the actual line. \
                     The mistake '{}' was not found in the recorded line in the following cases:",
                    word
                ))?;
                for failure in failures {
                    self.prompt.say(failure)?;
                }
                Ok(())
            }
        }
    }

    fn exit(&mut self) -> io::Result<()> {
        if self.prompt.choose("Exit? ", YES_NO)? == 'y' {
            self.done = true;
            if self.doc.is_modified() {
                self.save()?;
            }
        }
        Ok(())
    }

    /// Save under a fresh name next to the source, or wherever the user says
    fn save(&mut self) -> io::Result<()> {
        let mut path = avoid_name_collision(&self.source);
        let question = format!("File was modified. It will be saved as '{}' ", path.display());

        let mut written = self.prompt.choose(&question, YES_NO)? == 'y' && self.write(&path)?;

        while !written {
            let answer = self.prompt.read_line("Please enter a new path: ")?;
            path = expand_user(&answer);

            if path.exists() {
                let free = avoid_name_collision(&path);
                let rename = format!(
                    "Rename to '{}'",
                    free.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
                );
                let choice = self.prompt.choose(
                    &format!("File '{}' already exists. ", answer),
                    &["Enter new name", rename.as_str(), "Overwrite"],
                )?;
                match choice {
                    'e' => continue,
                    'r' => path = free,
                    _ => {}
                }
            }

            written = self.write(&path)?;
        }

        self.saved_to = Some(path);
        Ok(())
    }

    fn write(&mut self, path: &Path) -> io::Result<bool> {
        match self.doc.write_to_disk(path) {
            Ok(()) => {
                self.prompt.say(format!("Saved to '{}'", path.display()))?;
                Ok(true)
            }
            Err(e) => {
                log::warn!("Could not write {}: {}", path.display(), e);
                self.prompt.say(format!("Invalid path: {}", path.display()))?;
                Ok(false)
            }
        }
    }
}
