pub mod checker;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod files;

pub use checker::Checker;
pub use config::Config;
pub use document::{Document, LineMismatch, Mistake, MistakeId};
pub use error::{Error, Result};
