//! # agent-core
//!
//! Core agent logic: provider-agnostic LLM abstraction, an extensible tool
//! registry, and the three-stage orchestration pipeline that drives one
//! query to completion.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Agent                                │
//! │  ┌────────────┐  ┌──────────┐  ┌─────────┐  ┌─────────────┐  │
//! │  │  Pipeline  │──│ Decision │──│  Tools  │  │ LlmProvider │  │
//! │  │ (3 stages) │  │  Parser  │  │ Registry│──│ (Strategy)  │  │
//! │  └────────────┘  └──────────┘  └─────────┘  └─────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `LlmProvider` trait enables swapping between Ollama, OpenAI,
//! Anthropic, or any other provider without changing pipeline logic, and
//! lets tests inject scripted doubles.

pub mod decision;
pub mod error;
pub mod pipeline;
pub mod provider;
pub mod tool;

pub use decision::{parse_decision, DecisionParseError, ToolDecision};
pub use error::{AgentError, Result};
pub use pipeline::{Agent, AgentBuilder, AgentConfig, AgentState};
pub use provider::{Completion, GenerationOptions, LlmProvider, ModelInfo};
pub use tool::{FnTool, Tool, ToolRegistry};
