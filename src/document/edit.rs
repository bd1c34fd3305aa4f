use super::{Document, MistakeId};
use crate::checker::Checker;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// A mistake's spelling was no longer present in its recorded line.
///
/// `line` is 0-based; the `Display` output shows it 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", .line + 1, .text)]
pub struct LineMismatch {
    /// 0-based line index
    pub line: usize,
    /// Current text of the line
    pub text: String,
}

impl Document {
    /// Replace the mistake's spelling within its line.
    ///
    /// Every textual copy of the spelling on that line is replaced, and every
    /// occurrence on the line with exactly that spelling is marked corrected.
    /// An already corrected or ignored mistake is left alone.
    pub fn replace(&mut self, id: MistakeId, replacement: &str) -> Result<(), LineMismatch> {
        let mistake = &self.mistakes[id.0];
        if !mistake.valid {
            return Ok(());
        }

        let lineno = mistake.line;
        let line = &self.lines[lineno];
        if !line.contains(mistake.word.as_str()) {
            return Err(LineMismatch {
                line: lineno,
                text: line.clone(),
            });
        }

        let word = mistake.word.clone();
        self.lines[lineno] = line.replace(&word, replacement);
        self.invalidate_on_line(lineno, &word);
        self.modified = true;

        log::debug!("Line {}: '{}' -> '{}'", lineno + 1, word, replacement);
        Ok(())
    }

    /// Replace every occurrence in the chain starting at `id`.
    ///
    /// Members sharing a line with the member before them are skipped, that
    /// line has already been handled. Failures do not stop the walk and edits
    /// made before a failure stay applied.
    pub fn replace_all(
        &mut self,
        id: MistakeId,
        replacement: &str,
    ) -> Result<(), Vec<LineMismatch>> {
        let mut failures = Vec::new();
        let mut last_line = None;
        let mut cursor = Some(id);

        while let Some(current) = cursor {
            let line = self.mistakes[current.0].line;
            if last_line != Some(line) {
                if let Err(mismatch) = self.replace(current, replacement) {
                    failures.push(mismatch);
                }
            }
            last_line = Some(line);
            cursor = self.mistakes[current.0].next;
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }

    /// The mistake's line with its neighbours, joined by newlines
    pub fn context(&self, id: MistakeId) -> String {
        let line = self.mistakes[id.0].line;
        let start = line.saturating_sub(1);
        let end = (line + 2).min(self.lines.len());

        self.lines[start..end].join("\n")
    }

    /// Accept the spelling: add it to `checker` and retire this occurrence and
    /// every later one in its chain.
    pub fn ignore(&mut self, id: MistakeId, checker: &mut Checker) {
        checker.add(&self.mistakes[id.0].word);

        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let mistake = &mut self.mistakes[current.0];
            mistake.valid = false;
            cursor = mistake.next;
        }
    }

    /// Write all lines to `path`, each followed by the platform line ending
    pub fn write_to_disk(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(LINE_ENDING.as_bytes())?;
        }
        writer.flush()?;

        log::info!("Wrote {} lines to {}", self.lines.len(), path.display());
        Ok(())
    }

    fn invalidate_on_line(&mut self, line: usize, word: &str) {
        let start = self.mistakes.partition_point(|m| m.line < line);
        for mistake in self.mistakes[start..]
            .iter_mut()
            .take_while(|m| m.line == line)
        {
            if mistake.word == word {
                mistake.valid = false;
            }
        }
    }
}
