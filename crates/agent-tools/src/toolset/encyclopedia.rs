//! Encyclopedia Tool
//!
//! Two-sentence summaries from a pluggable knowledge source. Any lookup
//! failure (page not found, ambiguous title, network error) degrades to a
//! fixed not-found string.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::Tool;

use crate::lookup::SummarySource;

const NO_RESULTS: &str = "No Wikipedia results found.";
const SUMMARY_SENTENCES: usize = 2;

pub struct EncyclopediaTool {
    source: Arc<dyn SummarySource>,
}

impl EncyclopediaTool {
    pub fn new(source: Arc<dyn SummarySource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Tool for EncyclopediaTool {
    fn name(&self) -> &str {
        "encyclopedia"
    }

    fn description(&self) -> &str {
        "Get short Wikipedia summaries"
    }

    async fn invoke(&self, query: &str) -> String {
        match self.source.summary(query, SUMMARY_SENTENCES).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::debug!(source = %self.source.name(), "summary lookup failed: {e}");
                NO_RESULTS.to_string()
            }
        }
    }
}
