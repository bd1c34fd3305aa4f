pub mod cursor;
pub mod edit;
pub mod mistake;

pub use edit::LineMismatch;
pub use mistake::{Mistake, MistakeId};

use crate::checker::{tokenizer, Checker};
use crate::error::{Error, Result};
use mistake::capitalize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A text file held in memory together with every misspelling found in it.
///
/// Mistakes are stored in document order. Occurrences sharing a case-folded
/// spelling are chained front to back, and suggestions are computed once per
/// spelling and shared along the chain.
#[derive(Debug)]
pub struct Document {
    lines: Vec<String>,
    mistakes: Vec<Mistake>,
    /// -1 before the first mistake, `mistakes.len()` once exhausted
    position: isize,
    suggestions: HashMap<String, Vec<String>>,
    modified: bool,
}

impl Document {
    /// Tokenize `lines` and flag every token `checker` does not know
    pub fn new(lines: Vec<String>, checker: &Checker) -> Result<Self> {
        if lines.is_empty() {
            return Err(Error::EmptyDocument);
        }

        let mut mistakes: Vec<Mistake> = Vec::new();
        let mut last_seen: HashMap<String, MistakeId> = HashMap::new();

        for (lineno, line) in lines.iter().enumerate() {
            for token in tokenizer::tokens(line) {
                if !checker.is_mistake(token.text) {
                    continue;
                }

                let id = MistakeId(mistakes.len());
                mistakes.push(Mistake::new(token.text, lineno, token.column(line)));

                if let Some(prev) = last_seen.insert(token.text.to_lowercase(), id) {
                    mistakes[prev.0].next = Some(id);
                }
            }
        }

        if mistakes.is_empty() {
            return Err(Error::NoMistakes);
        }

        log::debug!(
            "Indexed {} lines: {} mistakes, {} distinct spellings",
            lines.len(),
            mistakes.len(),
            last_seen.len()
        );

        Ok(Self {
            lines,
            mistakes,
            position: -1,
            suggestions: HashMap::new(),
            modified: false,
        })
    }

    /// Read a UTF-8 text file and index it
    pub fn open(path: &Path, checker: &Checker) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Document {
            path: path.to_path_buf(),
            source,
        })?;

        Self::new(content.lines().map(String::from).collect(), checker)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn mistakes(&self) -> &[Mistake] {
        &self.mistakes
    }

    pub fn mistake(&self, id: MistakeId) -> &Mistake {
        &self.mistakes[id.0]
    }

    /// Ids of every mistake, in document order
    pub fn ids(&self) -> impl Iterator<Item = MistakeId> {
        (0..self.mistakes.len()).map(MistakeId)
    }

    /// Ids of the chain starting at `id`, `id` included
    pub fn chain(&self, id: MistakeId) -> impl Iterator<Item = MistakeId> + '_ {
        std::iter::successors(Some(id), move |&current| self.mistakes[current.0].next)
    }

    /// True once any replacement went through
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Known words close to the mistake's spelling.
    ///
    /// The list is computed on the first request for a spelling and reused by
    /// every other occurrence of it. When the occurrence starts with an
    /// uppercase letter, so does every suggestion returned for it.
    pub fn suggestions(&mut self, id: MistakeId, checker: &mut Checker) -> Vec<String> {
        let mistake = &self.mistakes[id.0];
        let guesses = self
            .suggestions
            .entry(mistake.word.to_lowercase())
            .or_insert_with(|| checker.guess(&mistake.word));

        if mistake.uppercase {
            guesses.iter().map(|w| capitalize(w)).collect()
        } else {
            guesses.clone()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    pub(crate) fn checker(words: &[&str]) -> Checker {
        Checker::from_words(words.iter().collect())
    }

    pub(crate) fn doc(lines: &[&str], words: &[&str]) -> Document {
        let lines = lines.iter().map(|s| s.to_string()).collect();
        Document::new(lines, &checker(words)).unwrap()
    }

    #[test]
    fn test_mistakes_in_document_order() {
        let doc = doc(
            &["I teh cat", "a dgo and teh dog"],
            &["i", "the", "cat", "a", "and", "dog"],
        );

        let found: Vec<(&str, usize)> = doc
            .mistakes()
            .iter()
            .map(|m| (m.word(), m.line()))
            .collect();
        assert_eq!(found, vec![("teh", 0), ("dgo", 1), ("teh", 1)]);
        assert_eq!(doc.mistakes()[2].column(), 11);
    }

    #[test]
    fn test_same_spelling_is_chained() {
        let doc = doc(&["I teh cat", "teh dog"], &["i", "cat", "dog"]);

        assert_eq!(doc.mistakes().len(), 2);
        assert_eq!(doc.mistake(MistakeId(0)).next(), Some(MistakeId(1)));
        assert_eq!(doc.mistake(MistakeId(1)).next(), None);
    }

    #[test]
    fn test_chain_ignores_case() {
        let doc = doc(&["Teh start", "and teh end", "TEH"], &["start", "and", "end"]);

        let chain: Vec<MistakeId> = doc.chain(MistakeId(0)).collect();
        assert_eq!(chain, vec![MistakeId(0), MistakeId(1), MistakeId(2)]);
        assert!(doc.mistake(MistakeId(0)).is_uppercase());
        assert!(!doc.mistake(MistakeId(1)).is_uppercase());
    }

    #[test]
    fn test_separate_spellings_have_separate_chains() {
        let doc = doc(&["wrod teh wrod teh"], &[]);

        let wrod: Vec<usize> = doc.chain(MistakeId(0)).map(MistakeId::index).collect();
        let teh: Vec<usize> = doc.chain(MistakeId(1)).map(MistakeId::index).collect();
        assert_eq!(wrod, vec![0, 2]);
        assert_eq!(teh, vec![1, 3]);
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let err = Document::new(Vec::new(), &checker(&["word"])).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument));
    }

    #[test]
    fn test_clean_document_reports_no_mistakes() {
        let lines = vec!["the cat".to_string(), String::new()];
        let err = Document::new(lines, &checker(&["the", "cat"])).unwrap_err();
        assert!(matches!(err, Error::NoMistakes));
    }

    #[test]
    fn test_open_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "the cta\r\nsat on teh mat\n").unwrap();

        let doc = Document::open(file.path(), &checker(&["the", "sat", "on", "mat"])).unwrap();
        assert_eq!(doc.lines(), &["the cta", "sat on teh mat"]);
        assert_eq!(doc.mistakes().len(), 2);
    }

    #[test]
    fn test_open_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::open(&dir.path().join("missing.txt"), &checker(&[])).unwrap_err();
        assert!(matches!(err, Error::Document { .. }));
    }

    #[test]
    fn test_open_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let err = Document::open(file.path(), &checker(&[])).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument));
    }

    #[test]
    fn test_suggestions_are_shared_along_the_chain() {
        let mut checker = checker(&["the", "i", "cat", "dog"]);
        let lines = vec!["I teh cat".to_string(), "Teh dog".to_string()];
        let mut doc = Document::new(lines, &checker).unwrap();

        let first = doc.suggestions(MistakeId(0), &mut checker);
        assert_eq!(first[0], "the");

        // a word added afterwards does not change the cached list
        checker.add("teeh");
        let again = doc.suggestions(MistakeId(0), &mut checker);
        assert_eq!(first, again);

        let second = doc.suggestions(MistakeId(1), &mut checker);
        assert_eq!(second.len(), first.len());
        assert_eq!(second[0], "The");
    }

    #[test]
    fn test_suggestions_may_be_empty() {
        let mut checker = checker(&["a"]);
        let mut doc = Document::new(vec!["xyzzyx".to_string()], &checker).unwrap();
        assert!(doc.suggestions(MistakeId(0), &mut checker).is_empty());
    }
}
