use crate::checker::suggestions::{self, DistanceMatrix};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Guess for the size of a system word list
const INITIAL_CAPACITY: usize = 150_000;

/// Case-folded set of known words.
///
/// Besides the words themselves the set remembers the length of its longest
/// member and owns the scratch matrix used by [`WordSet::guess`]. The matrix is
/// always at least `longest + 1` on each side.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
    longest: usize,
    matrix: DistanceMatrix,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one word per line. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut set = Self {
            words: HashSet::with_capacity(INITIAL_CAPACITY),
            ..Self::default()
        };
        set.extend_from_reader(reader)?;
        Ok(set)
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Merge another word list into this set
    pub fn extend_from_reader<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                self.insert(word);
            }
        }
        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Add a word, growing the scratch matrix if it is the longest one yet
    pub fn insert(&mut self, word: &str) {
        let folded = word.to_lowercase();
        let len = folded.chars().count();

        if len > self.longest {
            self.longest = len;
            self.matrix.grow(len + 1);
        }

        self.words.insert(folded);
    }

    /// Up to ten known words closest to `token`, nearest first
    pub fn guess(&mut self, token: &str) -> Vec<String> {
        suggestions::rank(token, &self.words, &mut self.matrix)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn longest(&self) -> usize {
        self.longest
    }

    pub(crate) fn matrix_dimension(&self) -> usize {
        self.matrix.dimension()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::suggestions::distance;
    use std::io::Cursor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_contains_is_case_insensitive() {
        let set: WordSet = ["Hello", "world"].into_iter().collect();

        assert!(set.contains("hello"));
        assert!(set.contains("HELLO"));
        assert!(set.contains("hElLo"));
        assert!(set.contains("World"));
        assert!(!set.contains("notfound"));
    }

    #[test]
    fn test_insert_grows_matrix() {
        let mut set = WordSet::new();
        set.insert("cat");
        assert_eq!(set.longest(), 3);
        assert!(set.matrix_dimension() >= 4);

        set.insert("encyclopedia");
        assert_eq!(set.longest(), 12);
        assert!(set.matrix_dimension() >= 13);

        set.insert("dog");
        assert_eq!(set.longest(), 12);
        assert!(set.matrix_dimension() >= 13);
    }

    #[test]
    fn test_from_reader_skips_blank_lines() {
        let input = Cursor::new("apple\n\n  Banana  \r\ncherry\n");
        let set = WordSet::from_reader(input).unwrap();

        assert_eq!(set.len(), 3);
        assert!(set.contains("banana"));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "alpha").unwrap();
        writeln!(file, "Beta").unwrap();

        let set = WordSet::from_path(file.path()).unwrap();
        assert!(set.contains("ALPHA"));
        assert!(set.contains("beta"));
    }

    #[test]
    fn test_from_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(WordSet::from_path(&dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_guess_properties() {
        let mut set: WordSet = [
            "the", "they", "then", "them", "tea", "ten", "toe", "tie", "thee", "he", "eh", "te",
            "teh", "tech", "teeth", "elephant",
        ]
        .into_iter()
        .collect();

        let guesses = set.guess("Tehh");
        assert!(guesses.len() <= 10);
        assert!(!guesses.is_empty());

        let dists: Vec<usize> = guesses.iter().map(|w| distance(w, "tehh")).collect();
        for (word, dist) in guesses.iter().zip(&dists) {
            assert!(word.chars().count().abs_diff(4) <= 1, "{}", word);
            assert!(*dist < 4, "{}", word);
        }
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_guess_handles_token_longer_than_any_word() {
        let mut set: WordSet = ["abc"].into_iter().collect();
        assert_eq!(set.guess("abcd"), vec!["abc".to_string()]);
    }
}
