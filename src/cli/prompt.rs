use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::ops::RangeInclusive;

pub const YES_NO: &[&str] = &["Yes", "No"];
pub const YES_NO_CANCEL: &[&str] = &["Yes", "No", "Cancel"];

/// Line-oriented question/answer channel.
///
/// Every answer is one line of input. Running out of input is reported as
/// [`io::ErrorKind::UnexpectedEof`].
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print `prompt` and read the next non-blank line, trimmed
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "Input closed",
                ));
            }
            let answer = line.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
        }
    }

    /// Read single-letter answers until one of `answers` comes up
    pub fn read_char(&mut self, prompt: &str, answers: &[char]) -> io::Result<char> {
        let mut answer = self.read_line(prompt)?;
        loop {
            if let Some(c) = answer.chars().next().and_then(|c| c.to_lowercase().next()) {
                if answers.contains(&c) {
                    return Ok(c);
                }
            }
            self.say("Answer not available.")?;
            answer = self.read_line("")?;
        }
    }

    /// Offer `options` as `[(Y)es/(N)o]` and return the lowercase first
    /// letter of the chosen one
    pub fn choose(&mut self, prompt: &str, options: &[&str]) -> io::Result<char> {
        let letters = first_letters(options);
        let text = format!("{}{} ", prompt, concat_options(options));
        self.read_char(&text, &letters)
    }

    /// Read a number within `range`
    pub fn read_number(&mut self, prompt: &str, range: RangeInclusive<usize>) -> io::Result<usize> {
        let mut answer = self.read_line(prompt)?;
        loop {
            match answer.parse::<usize>() {
                Ok(n) if range.contains(&n) => return Ok(n),
                Ok(_) => self.say("Answer out of bounds.")?,
                Err(_) => self.say("Please enter a number.")?,
            }
            answer = self.read_line("")?;
        }
    }
}

/// `["next", "exit"]` -> `[(N)ext/(E)xit]`
pub fn concat_options(options: &[&str]) -> String {
    let rendered: Vec<String> = options
        .iter()
        .map(|option| {
            let mut chars = option.chars();
            match chars.next() {
                Some(first) => format!("({}){}", first.to_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect();
    format!("[{}]", rendered.join("/"))
}

/// Lowercase leading letters of `options`, sorted.
///
/// # Panics
///
/// If `options` is empty, an option is empty or two options share their
/// leading letter.
pub fn first_letters(options: &[&str]) -> Vec<char> {
    assert!(!options.is_empty(), "option list is empty");

    let mut letters: Vec<char> = options
        .iter()
        .map(|option| {
            option
                .chars()
                .next()
                .and_then(|c| c.to_lowercase().next())
                .expect("option is empty")
        })
        .collect();

    letters.sort_unstable();
    letters.dedup();
    assert_eq!(
        letters.len(),
        options.len(),
        "two options start with the same letter"
    );

    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompt: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompt.into_output()).unwrap()
    }

    #[test]
    fn test_concat_options() {
        assert_eq!(concat_options(YES_NO_CANCEL), "[(Y)es/(N)o/(C)ancel]");
        assert_eq!(concat_options(&["go to line"]), "[(G)o to line]");
    }

    #[test]
    fn test_first_letters() {
        assert_eq!(first_letters(&["Yes", "no", "Cancel"]), vec!['c', 'n', 'y']);
    }

    #[test]
    #[should_panic(expected = "same letter")]
    fn test_duplicate_letters_panic() {
        first_letters(&["next", "no"]);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn test_empty_options_panic() {
        first_letters(&[]);
    }

    #[test]
    fn test_choose_retries_until_valid() {
        let mut p = prompt("x\n\nYES\n");
        assert_eq!(p.choose("Exit? ", YES_NO).unwrap(), 'y');

        let out = output(p);
        assert!(out.starts_with("Exit? [(Y)es/(N)o] "));
        assert_eq!(out.matches("Answer not available.").count(), 1);
    }

    #[test]
    fn test_read_number_bounds() {
        let mut p = prompt("abc\n12\n3\n");
        assert_eq!(p.read_number("Line: ", 1..=5).unwrap(), 3);

        let out = output(p);
        assert!(out.contains("Please enter a number."));
        assert!(out.contains("Answer out of bounds."));
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut p = prompt("");
        let err = p.read_line("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
