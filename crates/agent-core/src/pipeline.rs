//! Orchestration Pipeline
//!
//! Drives one query through a three-node state machine:
//!
//! ```text
//! Reasoning ──(tool picked)──> ExecutingTool ──> Summarizing ──> Done
//!     └───────(no tool / parse failure)─────────────^
//! ```
//!
//! The reasoning node asks the LLM which tool (if any) should handle the
//! query, the execute node runs that tool, and the summarize node asks the
//! LLM for the final answer. A run makes at most two LLM calls and at most
//! one tool call; there are no cycles and no retries.

use std::sync::Arc;

use crate::decision::{parse_decision, ToolDecision};
use crate::error::{AgentError, Result};
use crate::provider::{GenerationOptions, LlmProvider};
use crate::tool::ToolRegistry;

/// `tool_output` written when the registry has no tool under the decided name
pub const INVALID_TOOL_OUTPUT: &str = "Invalid tool name.";

/// Prefix of the diagnostic captured in `tool_output` on a parse failure.
/// The summarize node refuses to show anything with this prefix to the model.
pub const PARSE_FAILURE_PREFIX: &str = "Failed to parse tool decision:";

/// State carried across pipeline stages for a single query.
///
/// Fields are only ever set forward along the pipeline: no stage mutates a
/// field written by a later stage, and `final_answer` stays `None` until
/// the terminal node runs. A fresh state is built per query and discarded
/// once the answer is read.
#[derive(Clone, Debug, Default)]
pub struct AgentState {
    /// The query as received, immutable after construction
    pub user_input: String,

    /// Raw reasoning output from the LLM, set by the reasoning node
    pub tool_decision: Option<String>,

    /// Tool return value (or diagnostic), set by the execute node
    pub tool_output: Option<String>,

    /// The answer returned to the caller, set by the summarize node
    pub final_answer: Option<String>,
}

impl AgentState {
    fn new(query: impl Into<String>) -> Self {
        Self {
            user_input: query.into(),
            ..Default::default()
        }
    }
}

/// Pipeline stages. The routed decision rides on the `ExecutingTool`
/// transition so `AgentState` itself never holds parsed data.
enum Stage {
    Reasoning,
    ExecutingTool { name: String, input: String },
    Summarizing,
    Done,
}

/// Agent configuration
#[derive(Clone, Debug, Default)]
pub struct AgentConfig {
    /// Generation options used for both LLM calls
    pub generation: GenerationOptions,
}

/// The agent facade: one entry point, `run(query) -> answer`.
///
/// Provider and tool registry are long-lived shared dependencies injected
/// at construction; the agent itself is cheap to build per request.
pub struct Agent {
    provider: Arc<dyn LlmProvider>,
    tools: Arc<ToolRegistry>,
    config: AgentConfig,
}

impl Agent {
    /// Create a new agent
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        tools: Arc<ToolRegistry>,
        config: AgentConfig,
    ) -> Self {
        Self {
            provider,
            tools,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(provider: Arc<dyn LlmProvider>, tools: Arc<ToolRegistry>) -> Self {
        Self::new(provider, tools, AgentConfig::default())
    }

    /// Run one query through the pipeline and return the final answer.
    ///
    /// The query is assumed non-empty; the HTTP boundary rejects empty
    /// input before the pipeline is ever constructed.
    pub async fn run(&self, query: &str) -> Result<String> {
        let state = self.drive(query).await?;
        state
            .final_answer
            .ok_or_else(|| AgentError::Pipeline("pipeline finished without an answer".into()))
    }

    /// Drive the state machine to `Done`
    async fn drive(&self, query: &str) -> Result<AgentState> {
        let mut state = AgentState::new(query);
        let mut stage = Stage::Reasoning;

        loop {
            stage = match stage {
                Stage::Reasoning => self.reason(&mut state).await?,
                Stage::ExecutingTool { name, input } => {
                    self.execute(&mut state, &name, &input).await
                }
                Stage::Summarizing => self.summarize(&mut state).await?,
                Stage::Done => return Ok(state),
            };
        }
    }

    /// Reasoning node: one LLM call, then route on the parsed decision
    async fn reason(&self, state: &mut AgentState) -> Result<Stage> {
        let prompt = self.decision_prompt(&state.user_input);
        let completion = self
            .provider
            .complete(&prompt, &self.config.generation)
            .await?;

        state.tool_decision = Some(completion.content.clone());

        match parse_decision(&completion.content) {
            Ok(ToolDecision::UseTool { name, input }) => {
                tracing::debug!(tool = %name, "decision: use tool");
                Ok(Stage::ExecutingTool { name, input })
            }
            Ok(ToolDecision::NoTool) => {
                tracing::debug!("decision: no tool");
                Ok(Stage::Summarizing)
            }
            Err(e) => {
                tracing::warn!("unparseable tool decision, answering directly: {e}");
                state.tool_output = Some(e.to_string());
                Ok(Stage::Summarizing)
            }
        }
    }

    /// Execute node: case-insensitive lookup, then invoke.
    ///
    /// An unknown name becomes `"Invalid tool name."` in `tool_output` and
    /// flows into summarization like real tool output. Tools themselves
    /// never fail, so there is no error path here.
    async fn execute(&self, state: &mut AgentState, name: &str, input: &str) -> Stage {
        let output = match self.tools.lookup(name) {
            Some(tool) => {
                tracing::debug!(tool = %name, "executing tool");
                tool.invoke(input).await
            }
            None => {
                tracing::warn!(tool = %name, "decision named an unregistered tool");
                INVALID_TOOL_OUTPUT.to_string()
            }
        };

        state.tool_output = Some(output);
        Stage::Summarizing
    }

    /// Summarize node: one LLM call producing the final answer
    async fn summarize(&self, state: &mut AgentState) -> Result<Stage> {
        let prompt = match &state.tool_output {
            Some(output) if !output.starts_with(PARSE_FAILURE_PREFIX) => {
                self.summary_prompt(&state.user_input, output)
            }
            _ => self.direct_prompt(&state.user_input),
        };

        let completion = self
            .provider
            .complete(&prompt, &self.config.generation)
            .await?;

        state.final_answer = Some(completion.content);
        Ok(Stage::Done)
    }

    /// Prompt for the reasoning node, embedding the tool catalog
    fn decision_prompt(&self, query: &str) -> String {
        let mut catalog = String::new();
        for (name, description) in self.tools.catalog() {
            catalog.push_str(&format!("- {name}: {description}\n"));
        }

        format!(
            r#"You are an intelligent AI agent.
Available tools:
{catalog}
User query: {query}

Decide which tool to use and what input to give it, or respond with {{"tool": "None"}} if no tool is needed.
Respond strictly with JSON wrapped in ```json fences.
Examples:
For tool use:
```json
{{"tool": "calculator", "input": "2+2"}}
```
For no tool:
```json
{{"tool": "None"}}
```"#
        )
    }

    /// Prompt for the summarize node when a tool ran
    fn summary_prompt(&self, query: &str, tool_output: &str) -> String {
        format!(
            "User asked: {query}\nTool output: {tool_output}\n\nNow give a concise, helpful final answer for the user."
        )
    }

    /// Prompt for the direct-answer path
    fn direct_prompt(&self, query: &str) -> String {
        format!("User asked: {query}\n\nProvide a direct, helpful answer.")
    }

    /// Get the tool registry
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Get configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

/// Builder for Agent configuration
pub struct AgentBuilder {
    provider: Option<Arc<dyn LlmProvider>>,
    tools: ToolRegistry,
    config: AgentConfig,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            provider: None,
            tools: ToolRegistry::new(),
            config: AgentConfig::default(),
        }
    }

    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn tool<T: crate::tool::Tool + 'static>(mut self, tool: T) -> Self {
        self.tools.register(tool);
        self
    }

    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.generation.model = model.into();
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.generation.temperature = temp;
        self
    }

    pub fn build(self) -> Result<Agent> {
        let provider = self
            .provider
            .ok_or_else(|| AgentError::Config("Provider is required".into()))?;

        Ok(Agent::new(provider, Arc::new(self.tools), self.config))
    }
}
