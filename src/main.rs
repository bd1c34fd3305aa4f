use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use typotattler::cli::output::{self, OutputFormat, Report};
use typotattler::cli::prompt::Prompt;
use typotattler::cli::session::Session;
use typotattler::files::expand_user;
use typotattler::{Config, Document, Error};

const SESSION_KEYS: &str = "\
Session keys:
  n  Next mistake. At the end of the file, asks whether to exit.
  p  Previous mistake.
  s  Show suggestions and replace the mistake with the chosen one.
  r  Revision: type the replacement yourself. An unknown replacement can be
     used anyway or added to the user dictionary first.
  a  Add the word to the user dictionary and ignore it from here on.
  i  Ignore all: accept the word for this session, this occurrence and every
     later one.
  c  Show the lines around the mistake.
  g  Go to a line and continue with the first mistake from there.
  o  Show the key overview.
  e  Exit. A modified document is saved under a new name next to FILE.

A replaced or ignored mistake is not visited again. When a word occurs more
than once, replacing it asks whether to replace every occurrence.";

#[derive(Parser, Debug)]
#[command(name = "typotattler")]
#[command(
    version,
    about = "Walk through every misspelling in a text file and fix it",
    long_about = "typotattler splits FILE into its individual words and checks them against \
                  the system word list or against DICTIONARY if provided. DICTIONARY is a \
                  text file with one word per line.",
    after_help = SESSION_KEYS
)]
struct Cli {
    /// File to check
    #[arg(value_name = "FILE", required_unless_present = "completion")]
    file: Option<String>,

    /// Word list to check against (one word per line)
    #[arg(value_name = "DICTIONARY")]
    dictionary: Option<String>,

    /// User dictionary that accepted words are appended to
    #[arg(long, value_name = "PATH")]
    user_dict: Option<String>,

    /// List all mistakes and exit instead of starting an interactive session
    #[arg(long)]
    report: bool,

    /// Report format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Exit with code 0 even if mistakes are reported
    #[arg(long)]
    no_fail: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// No log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "typotattler", &mut io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose, cli.quiet);

    let colored = !cli.no_color;
    if !colored {
        colored::control::set_override(false);
    }

    let config = Config::load(
        cli.dictionary.as_deref().map(expand_user),
        cli.user_dict.as_deref().map(expand_user),
    )?;

    let file = cli
        .file
        .as_deref()
        .map(expand_user)
        .context("No file specified. Use --help for usage information.")?;

    let mut checker = typotattler::cli::load_checker(&config)?;

    let mut doc = match Document::open(&file, &checker) {
        Ok(doc) => doc,
        Err(Error::NoMistakes) => {
            println!("No mistakes found.");
            return Ok(());
        }
        Err(e) => return Err(e).context("Cannot start checking. Exiting..."),
    };

    if cli.report {
        let report =
            Report::from_document(&file, &mut doc, &mut checker, config.max_suggestions_shown);
        output::print_report(&report, colored, &cli.format);
        if cli.format == OutputFormat::Text {
            output::print_check_summary(report.total_errors, colored);
        }
        if report.total_errors > 0 && !cli.no_fail {
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut session = Session::new(
        doc,
        checker,
        Prompt::stdio(),
        file,
        config.max_suggestions_shown,
        colored,
    );
    let saved: Option<PathBuf> = session.run().context("Interactive session aborted")?;

    if let Some(path) = saved {
        log::info!("Saved corrections to {}", path.display());
    }
    println!("Exiting...");

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
