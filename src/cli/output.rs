use crate::checker::Checker;
use crate::document::{Document, Mistake};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub line: usize,
    pub column: usize,
    pub word: String,
    pub suggestions: Vec<String>,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub file: String,
    pub total_errors: usize,
    pub errors: Vec<ReportEntry>,
}

impl Report {
    /// Collect every mistake of `doc` with up to `max_suggestions` suggestions
    pub fn from_document(
        file_path: &Path,
        doc: &mut Document,
        checker: &mut Checker,
        max_suggestions: usize,
    ) -> Self {
        let ids: Vec<_> = doc.ids().collect();
        let mut errors = Vec::with_capacity(ids.len());

        for id in ids {
            let mut suggestions = doc.suggestions(id, checker);
            suggestions.truncate(max_suggestions);

            let mistake = doc.mistake(id);
            errors.push(ReportEntry {
                line: mistake.line() + 1,
                column: mistake.column(),
                word: mistake.word().to_string(),
                suggestions,
                context: doc.line(mistake.line()).unwrap_or_default().to_string(),
            });
        }

        Self {
            file: file_path.display().to_string(),
            total_errors: errors.len(),
            errors,
        }
    }
}

pub fn print_report(report: &Report, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", format_text_report(report, colored_output)),
        OutputFormat::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize report: {}", e),
        },
    }
}

pub fn format_text_report(report: &Report, colored_output: bool) -> String {
    let mut out = String::new();
    if report.errors.is_empty() {
        return out;
    }

    if colored_output {
        out.push_str(&format!("\n{}\n", report.file.bold().underline()));
    } else {
        out.push_str(&format!("\n{}\n", report.file));
    }

    for error in &report.errors {
        let line_info = format!("{}:{}", error.line, error.column);

        if colored_output {
            out.push_str(&format!(
                "  {} {} {}\n",
                line_info.blue().bold(),
                error.word.red().bold(),
                format_context(&error.context, &error.word, colored_output)
            ));

            if !error.suggestions.is_empty() {
                let suggestions = error
                    .suggestions
                    .iter()
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(&", ".dimmed().to_string());
                out.push_str(&format!("    {} {}\n", "→".dimmed(), suggestions));
            }
        } else {
            out.push_str(&format!("  {} {} {}\n", line_info, error.word, error.context));

            if !error.suggestions.is_empty() {
                out.push_str(&format!("    → {}\n", error.suggestions.join(", ")));
            }
        }
    }

    out
}

/// Highlight every copy of `word` inside `context`
pub fn format_context(context: &str, word: &str, colored: bool) -> String {
    if colored {
        context.replace(word, &word.red().bold().to_string())
    } else {
        context.to_string()
    }
}

/// Render a mistake for the interactive session. The line itself is only
/// included when `with_line` is set.
pub fn format_mistake(mistake: &Mistake, line: &str, with_line: bool, colored: bool) -> String {
    let mut out = String::new();

    if with_line {
        let number = format!("{}:", mistake.line() + 1);
        if colored {
            out.push_str(&format!(
                "{} {}\n",
                number.blue().bold(),
                format_context(line, mistake.word(), colored)
            ));
        } else {
            out.push_str(&format!("{} {}\n", number, line));
        }
    }

    if colored {
        out.push_str(&format!("\t=> '{}'", mistake.word().red().bold()));
    } else {
        out.push_str(&format!("\t=> '{}'", mistake.word()));
    }

    out
}

/// `(1) - the | (2) - then`
pub fn format_suggestions(suggestions: &[String], colored: bool) -> String {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if colored {
                format!("({}) - {}", i + 1, s.green())
            } else {
                format!("({}) - {}", i + 1, s)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn print_check_summary(total_errors: usize, colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        if colored {
            println!(
                "{} {} {} found",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word
            );
        } else {
            println!("✗ {} {} found", total_errors, error_word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MistakeId;

    fn sample() -> (Document, Checker) {
        let checker = Checker::from_words(["i", "the", "cat", "dog"].into_iter().collect());
        let lines = vec!["I teh cat".to_string(), "Teh dog".to_string()];
        let doc = Document::new(lines, &checker).unwrap();
        (doc, checker)
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_report_from_document() {
        let (mut doc, mut checker) = sample();
        let report = Report::from_document(Path::new("a.txt"), &mut doc, &mut checker, 1);

        assert_eq!(report.total_errors, 2);
        assert_eq!(
            report.errors[0],
            ReportEntry {
                line: 1,
                column: 3,
                word: "teh".to_string(),
                suggestions: vec!["the".to_string()],
                context: "I teh cat".to_string(),
            }
        );
        assert_eq!(report.errors[1].suggestions, vec!["The".to_string()]);
    }

    #[test]
    fn test_plain_text_report() {
        let (mut doc, mut checker) = sample();
        let report = Report::from_document(Path::new("a.txt"), &mut doc, &mut checker, 1);

        let text = format_text_report(&report, false);
        assert!(text.contains("a.txt"));
        assert!(text.contains("  1:3 teh I teh cat"));
        assert!(text.contains("    → The"));
    }

    #[test]
    fn test_json_report_shape() {
        let (mut doc, mut checker) = sample();
        let report = Report::from_document(Path::new("a.txt"), &mut doc, &mut checker, 1);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["total_errors"], 2);
        assert_eq!(value["errors"][1]["line"], 2);
        assert_eq!(value["errors"][1]["word"], "Teh");
    }

    #[test]
    fn test_format_mistake() {
        let (doc, _) = sample();
        let mistake = doc.mistake(MistakeId(1));

        assert_eq!(
            format_mistake(mistake, "Teh dog", true, false),
            "2: Teh dog\n\t=> 'Teh'"
        );
        assert_eq!(format_mistake(mistake, "Teh dog", false, false), "\t=> 'Teh'");
    }

    #[test]
    fn test_format_suggestions() {
        let list = vec!["the".to_string(), "then".to_string()];
        assert_eq!(format_suggestions(&list, false), "(1) - the | (2) - then");
    }
}
