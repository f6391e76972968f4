//! Kanwa dictionary: entry model, inflection table, store, and loaders.

mod entry;
mod kanwa;
mod lexicon;
pub mod okurigana;

#[cfg(test)]
mod tests;

pub use entry::YomiEntry;
pub use kanwa::KanwaDict;

/// Errors raised by dictionary IO.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dictionary: {0}")]
    Malformed(&'static str),
}
