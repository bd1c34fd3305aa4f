use unicode_segmentation::UnicodeSegmentation;

/// A candidate word and its byte offset within the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub offset: usize,
}

impl Token<'_> {
    /// 1-based column counted in chars
    pub fn column(&self, line: &str) -> usize {
        line[..self.offset].chars().count() + 1
    }
}

/// Split a line into candidate words.
///
/// Whitespace, control characters, ASCII digits and ASCII punctuation separate
/// words. An apostrophe is kept only when a word character sits directly on
/// both sides of it, so `wasn't` survives while `boys'` loses its apostrophe.
/// Each grapheme cluster is classified by its first char.
pub fn tokens(line: &str) -> Vec<Token<'_>> {
    let graphemes: Vec<(usize, &str)> = line.grapheme_indices(true).collect();
    let mut result = Vec::new();
    let mut start: Option<usize> = None;

    for (k, &(offset, _)) in graphemes.iter().enumerate() {
        if is_separator(&graphemes, k) {
            if let Some(begin) = start.take() {
                result.push(Token {
                    text: &line[begin..offset],
                    offset: begin,
                });
            }
        } else if start.is_none() {
            start = Some(offset);
        }
    }

    if let Some(begin) = start {
        result.push(Token {
            text: &line[begin..],
            offset: begin,
        });
    }

    result
}

/// Like [`tokens`], without offsets
pub fn tokenize(line: &str) -> Vec<&str> {
    tokens(line).into_iter().map(|t| t.text).collect()
}

fn first_char(grapheme: &str) -> char {
    grapheme.chars().next().unwrap_or(' ')
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn is_separator(graphemes: &[(usize, &str)], k: usize) -> bool {
    let ch = first_char(graphemes[k].1);

    if ch == '\'' {
        let before = k.checked_sub(1).map(|i| first_char(graphemes[i].1));
        let after = graphemes.get(k + 1).map(|&(_, g)| first_char(g));
        return !matches!(
            (before, after),
            (Some(b), Some(a)) if is_word_char(b) && is_word_char(a)
        );
    }

    ch.is_whitespace() || ch.is_control() || ch.is_ascii_digit() || ch.is_ascii_punctuation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_apostrophe_is_kept() {
        assert_eq!(tokenize("wasn't sure"), vec!["wasn't", "sure"]);
        assert_eq!(tokenize("I'd say"), vec!["I'd", "say"]);
    }

    #[test]
    fn test_outer_apostrophe_splits() {
        assert_eq!(tokenize("the boys' room"), vec!["the", "boys", "room"]);
        assert_eq!(tokenize("'tis 'quoted'"), vec!["tis", "quoted"]);
        assert_eq!(tokenize("' lone"), vec!["lone"]);
    }

    #[test]
    fn test_punctuation_digits_and_controls_split() {
        assert_eq!(
            tokenize("Hello, world! 42nd\tstreet-side (again)."),
            vec!["Hello", "world", "nd", "street", "side", "again"]
        );
        assert_eq!(tokenize("snake_case"), vec!["snake", "case"]);
    }

    #[test]
    fn test_apostrophe_after_digit_is_kept() {
        assert_eq!(tokenize("the 90's band"), vec!["the", "'s", "band"]);
        assert_eq!(tokenize("5'6"), vec!["'"]);
    }

    #[test]
    fn test_empty_and_separator_only_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... 123 !!").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_stay_in_words() {
        assert_eq!(tokenize("café naïve"), vec!["café", "naïve"]);
        // combining acute accent stays with its base letter
        assert_eq!(tokenize("cafe\u{301} ok"), vec!["cafe\u{301}", "ok"]);
    }

    #[test]
    fn test_offsets_and_columns() {
        let line = "né teh";
        let toks = tokens(line);
        assert_eq!(toks[1].text, "teh");
        assert_eq!(toks[1].offset, 4);
        assert_eq!(toks[1].column(line), 4);
    }
}
