pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils {
    pub mod config;
    pub mod env;
    pub mod profiling;
}

pub use domain::word_list::{MergeReport, WordListRepository};
pub use error::{Result, WordListError};
pub use infrastructure::word_list::JsonFileWordListRepo;

use std::path::Path;

/// `path` の単語リストに `new_words` をマージして書き戻す。
pub fn add_words<S: AsRef<str>>(path: impl AsRef<Path>, new_words: &[S]) -> Result<MergeReport> {
    JsonFileWordListRepo::new(path.as_ref()).merge_words(new_words)
}
