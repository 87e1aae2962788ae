//! # agent-runtime
//!
//! Runtime providers for the agent service.
//!
//! ## Providers
//!
//! - **Ollama** (default): Local LLM inference via Ollama
//! - **OpenAI** (coming soon): OpenAI API integration
//! - **Anthropic** (coming soon): Claude API integration
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agent_runtime::ollama::OllamaProvider;
//!
//! let provider = OllamaProvider::new("http://localhost", 11434);
//! let agent = Agent::with_defaults(Arc::new(provider), tools);
//! ```

#[cfg(feature = "ollama")]
pub mod ollama;

#[cfg(feature = "ollama")]
pub use ollama::OllamaProvider;

// Re-export core types for convenience
pub use agent_core::{Agent, AgentError, LlmProvider, Result, Tool, ToolRegistry};
