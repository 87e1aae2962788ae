//! Mock Summary Source
//!
//! For testing and demo purposes. Serves a handful of static articles.

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::{first_sentences, SummarySource};
use crate::error::{LookupError, Result};

/// In-memory summary source with static articles, keyed case-insensitively
pub struct MockSummarySource {
    articles: BTreeMap<String, String>,
}

impl Default for MockSummarySource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSummarySource {
    pub fn new() -> Self {
        let mut articles = BTreeMap::new();
        for (title, text) in [
            (
                "Rust",
                "Rust is a general-purpose programming language emphasizing performance and memory safety. It enforces memory safety without a garbage collector. Rust originated at Mozilla Research.",
            ),
            (
                "Paris",
                "Paris is the capital and largest city of France. It has an estimated population of over two million residents. The city is a major centre for finance, fashion and the arts.",
            ),
            (
                "Ada Lovelace",
                "Ada Lovelace was an English mathematician and writer. She is chiefly known for her work on Charles Babbage's proposed mechanical general-purpose computer.",
            ),
        ] {
            articles.insert(title.to_lowercase(), text.to_string());
        }
        Self { articles }
    }

    /// Empty source, populate with `with_article`
    pub fn empty() -> Self {
        Self {
            articles: BTreeMap::new(),
        }
    }

    /// Add or replace an article
    pub fn with_article(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.articles.insert(title.into().to_lowercase(), text.into());
        self
    }
}

#[async_trait]
impl SummarySource for MockSummarySource {
    async fn summary(&self, title: &str, sentences: usize) -> Result<String> {
        self.articles
            .get(&title.trim().to_lowercase())
            .map(|text| first_sentences(text, sentences))
            .ok_or_else(|| LookupError::NotFound(title.to_string()))
    }

    fn name(&self) -> &str {
        "MockSource"
    }
}
