//! # agent-tools
//!
//! The default tool catalog for the agent service, plus the knowledge
//! lookup layer backing the encyclopedia tool.
//!
//! ## Catalog
//!
//! | Tool           | Input          | Output                                      |
//! |----------------|----------------|---------------------------------------------|
//! | `weather`      | city name      | fixed mock forecast, always succeeds        |
//! | `calculator`   | expression     | `Result: {value}` or `Error evaluating: …`  |
//! | `encyclopedia` | article title  | two-sentence summary or a not-found string  |
//!
//! Tools never fail from the pipeline's point of view: every error state
//! is encoded in the returned text.

pub mod error;
pub mod lookup;
pub mod toolset;

pub use error::{LookupError, Result};
pub use lookup::{MockSummarySource, SummarySource, WikipediaClient};
pub use toolset::{CalculatorTool, EncyclopediaTool, WeatherTool};

use std::sync::Arc;

use agent_core::ToolRegistry;

/// The startup catalog: weather, calculator, and an encyclopedia tool
/// backed by the given summary source.
pub fn default_registry(source: Arc<dyn SummarySource>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(WeatherTool);
    registry.register(CalculatorTool);
    registry.register(EncyclopediaTool::new(source));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::provider::{Completion, GenerationOptions, ModelInfo};
    use agent_core::{Agent, LlmProvider};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Provider that replays canned responses and records every prompt
    struct ScriptedProvider {
        responses: Mutex<VecDeque<String>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn new(responses: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn health_check(&self) -> agent_core::Result<bool> {
            Ok(true)
        }

        async fn complete(
            &self,
            prompt: &str,
            options: &GenerationOptions,
        ) -> agent_core::Result<Completion> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let content = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted provider ran out of responses");
            Ok(Completion {
                content,
                model: options.model.clone(),
                usage: None,
            })
        }

        async fn list_models(&self) -> agent_core::Result<Vec<ModelInfo>> {
            Ok(Vec::new())
        }
    }

    fn default_agent(provider: Arc<ScriptedProvider>) -> Agent {
        let registry = default_registry(Arc::new(MockSummarySource::new()));
        Agent::with_defaults(provider, Arc::new(registry))
    }

    #[test]
    fn test_default_registry_contents() {
        let registry = default_registry(Arc::new(MockSummarySource::new()));
        assert_eq!(registry.len(), 3);
        assert!(registry.lookup("Weather").is_some());
        assert!(registry.lookup("CALCULATOR").is_some());
        assert!(registry.lookup("encyclopedia").is_some());
    }

    #[tokio::test]
    async fn test_calculator_query_end_to_end() {
        let provider = ScriptedProvider::new(&[
            "```json\n{\"tool\": \"Calculator\", \"input\": \"7*6\"}\n```",
            "7 times 6 is 42.",
        ]);
        let agent = default_agent(provider.clone());

        let answer = agent.run("What is 7*6?").await.unwrap();
        assert_eq!(answer, "7 times 6 is 42.");

        let prompts = provider.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[1].contains("Tool output: Result: 42"));
    }

    #[tokio::test]
    async fn test_smalltalk_takes_direct_path() {
        let provider = ScriptedProvider::new(&[
            "```json\n{\"tool\": \"None\"}\n```",
            "Hi! How can I help?",
        ]);
        let agent = default_agent(provider.clone());

        let answer = agent.run("Hello").await.unwrap();
        assert_eq!(answer, "Hi! How can I help?");

        let prompts = provider.prompts();
        assert!(prompts[1].contains("Provide a direct, helpful answer."));
        assert!(!prompts[1].contains("Tool output:"));
    }

    #[tokio::test]
    async fn test_encyclopedia_query_end_to_end() {
        let provider = ScriptedProvider::new(&[
            "```json\n{\"tool\": \"encyclopedia\", \"input\": \"Paris\"}\n```",
            "Paris is the French capital.",
        ]);
        let agent = default_agent(provider.clone());

        let answer = agent.run("Tell me about Paris").await.unwrap();
        assert!(!answer.is_empty());

        let prompts = provider.prompts();
        assert!(prompts[1].contains("Tool output: Paris is the capital"));
    }

    #[tokio::test]
    async fn test_decision_prompt_lists_whole_catalog() {
        let provider = ScriptedProvider::new(&[
            "```json\n{\"tool\": \"None\"}\n```",
            "ok",
        ]);
        let agent = default_agent(provider.clone());
        agent.run("anything").await.unwrap();

        let prompts = provider.prompts();
        assert!(prompts[0].contains("calculator: Evaluate math expressions"));
        assert!(prompts[0].contains("encyclopedia: Get short Wikipedia summaries"));
        assert!(prompts[0].contains("weather: Get weather by city name"));
    }
}
