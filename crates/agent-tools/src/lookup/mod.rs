//! Knowledge Lookup
//!
//! Abstraction over the encyclopedia tool's backing source.

mod mock;
mod wikipedia;

pub use mock::MockSummarySource;
pub use wikipedia::WikipediaClient;

use async_trait::async_trait;

use crate::error::Result;

/// Summary source trait (Strategy pattern)
///
/// Implement this for each knowledge backend: Wikipedia, a local corpus,
/// a test double, etc.
#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Fetch a short summary for a title, truncated to `sentences` sentences
    async fn summary(&self, title: &str, sentences: usize) -> Result<String>;

    /// Source name
    fn name(&self) -> &str;
}

/// Keep the first `n` sentences of a text
pub(crate) fn first_sentences(text: &str, n: usize) -> String {
    let mut out = String::new();
    for (count, sentence) in text.split_inclusive(". ").enumerate() {
        out.push_str(sentence);
        if count + 1 == n {
            break;
        }
    }
    out.trim_end().to_string()
}
