/// Position of a [`Mistake`] in its document's master list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MistakeId(pub(crate) usize);

impl MistakeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One flagged token at a specific line.
///
/// Every later occurrence with the same case-folded spelling is reachable
/// through [`Mistake::next`], which makes up the spelling's chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mistake {
    pub(crate) word: String,
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) uppercase: bool,
    pub(crate) valid: bool,
    pub(crate) next: Option<MistakeId>,
}

impl Mistake {
    pub(crate) fn new(word: &str, line: usize, column: usize) -> Self {
        Self {
            word: word.to_string(),
            line,
            column,
            uppercase: word.chars().next().is_some_and(char::is_uppercase),
            valid: true,
            next: None,
        }
    }

    /// Spelling as it appeared in the document
    pub fn word(&self) -> &str {
        &self.word
    }

    /// 0-based index of the owning line
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based char column at indexing time. Not updated by edits.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_uppercase(&self) -> bool {
        self.uppercase
    }

    /// False once corrected or ignored
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn next(&self) -> Option<MistakeId> {
        self.next
    }

    pub fn has_successor(&self) -> bool {
        self.next.is_some()
    }
}

/// Upper-case the first char of a word
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
