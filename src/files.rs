use directories::BaseDirs;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};

lazy_static! {
    // "(n)" counter at the end of a file stem, trailing spaces allowed
    static ref NAME_COUNTER: Regex = Regex::new(r"\((\d+)\) *$").unwrap();
}

/// Substitute a leading `~/` with the user's home directory
pub fn expand_user(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(dirs) = BaseDirs::new() {
            return dirs.home_dir().join(rest);
        }
    }
    PathBuf::from(path)
}

/// Bump the counter of a file stem: `foo` -> `foo(1)`, `foo(1)` -> `foo(2)`
pub fn incr_name(name: &str) -> String {
    match NAME_COUNTER.captures(name) {
        Some(caps) => {
            let whole = caps.get(0).map_or(name.len(), |m| m.start());
            let count: u64 = caps[1].parse().unwrap_or(0);
            format!("{}({})", &name[..whole], count.saturating_add(1))
        }
        None => format!("{}(1)", name),
    }
}

/// A sibling of `path` that does not exist yet, found by bumping the counter
/// in the file stem. The extension is kept.
pub fn avoid_name_collision(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (mut stem, extension) = match file_name.rfind('.') {
        Some(i) => (file_name[..i].to_string(), file_name[i..].to_string()),
        None => (file_name.clone(), String::new()),
    };

    loop {
        stem = incr_name(&stem);
        let candidate = path.with_file_name(format!("{}{}", stem, extension));
        if !candidate.exists() {
            return candidate;
        }
    }
}
