//! Routing Decision Parser
//!
//! Extracts a structured routing decision from the raw text a language
//! model produced during the reasoning stage. The model is instructed to
//! answer with a ```` ```json ```` fenced block holding
//! `{"tool": "calculator", "input": "2+2"}` (or `{"tool": "None"}`).
//!
//! All free-text leniency lives here (marker stripping, last-occurrence
//! rule); the pipeline only ever sees the clean [`ToolDecision`] variant.

use serde::Deserialize;
use thiserror::Error;

/// Start marker of the fenced decision block
const FENCE_START: &str = "```json";

/// Closing marker of the fenced decision block
const FENCE_END: &str = "```";

/// Parsed routing decision
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolDecision {
    /// The model declared no tool is needed
    NoTool,

    /// The model picked a tool and an input for it
    UseTool { name: String, input: String },
}

/// Decision text that could not be parsed
///
/// Non-fatal: callers treat this as "no tool" and keep the message only
/// for diagnostics.
#[derive(Error, Debug)]
#[error("Failed to parse tool decision: {0}")]
pub struct DecisionParseError(String);

/// Wire shape of the fenced payload
#[derive(Debug, Deserialize)]
struct RawDecision {
    #[serde(default)]
    tool: Option<String>,
    #[serde(default)]
    input: Option<String>,
}

/// Parse a routing decision out of raw model output.
///
/// Takes the text after the LAST occurrence of the start marker, then the
/// portion before the next closing marker, trims it, and parses it as
/// JSON. Using the last occurrence tolerates the model echoing the
/// examples from its own prompt earlier in the completion. A completion
/// with no fence at all is treated as a bare payload, so un-fenced JSON
/// still parses.
///
/// Pure and deterministic: the same text always yields the same decision.
pub fn parse_decision(raw: &str) -> Result<ToolDecision, DecisionParseError> {
    let after_start = match raw.rfind(FENCE_START) {
        Some(idx) => &raw[idx + FENCE_START.len()..],
        None => raw,
    };
    let payload = match after_start.find(FENCE_END) {
        Some(idx) => &after_start[..idx],
        None => after_start,
    };

    let decision: RawDecision = serde_json::from_str(payload.trim())
        .map_err(|e| DecisionParseError(e.to_string()))?;

    match decision.tool {
        Some(name) if !name.is_empty() && !name.eq_ignore_ascii_case("none") => {
            Ok(ToolDecision::UseTool {
                name,
                input: decision.input.unwrap_or_default(),
            })
        }
        _ => Ok(ToolDecision::NoTool),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fenced_tool_call() {
        let raw = "Let me think.\n```json\n{\"tool\": \"Calculator\", \"input\": \"7*6\"}\n```";
        let decision = parse_decision(raw).unwrap();
        assert_eq!(
            decision,
            ToolDecision::UseTool {
                name: "Calculator".into(),
                input: "7*6".into(),
            }
        );
    }

    #[test]
    fn test_parse_none_is_case_insensitive() {
        for tool in ["None", "none", "NONE"] {
            let raw = format!("```json\n{{\"tool\": \"{tool}\"}}\n```");
            assert_eq!(parse_decision(&raw).unwrap(), ToolDecision::NoTool);
        }
    }

    #[test]
    fn test_missing_or_empty_tool_means_no_tool() {
        assert_eq!(
            parse_decision("```json\n{}\n```").unwrap(),
            ToolDecision::NoTool
        );
        assert_eq!(
            parse_decision("```json\n{\"tool\": \"\"}\n```").unwrap(),
            ToolDecision::NoTool
        );
    }

    #[test]
    fn test_uses_last_fenced_block() {
        let raw = "Example first:\n```json\n{\"tool\": \"None\"}\n```\nMy answer:\n```json\n{\"tool\": \"weather\", \"input\": \"Paris\"}\n```";
        let decision = parse_decision(raw).unwrap();
        assert_eq!(
            decision,
            ToolDecision::UseTool {
                name: "weather".into(),
                input: "Paris".into(),
            }
        );
    }

    #[test]
    fn test_bare_json_without_fence_parses() {
        let decision = parse_decision("{\"tool\": \"calculator\", \"input\": \"1+1\"}").unwrap();
        assert_eq!(
            decision,
            ToolDecision::UseTool {
                name: "calculator".into(),
                input: "1+1".into(),
            }
        );
    }

    #[test]
    fn test_missing_input_defaults_to_empty() {
        let decision = parse_decision("```json\n{\"tool\": \"weather\"}\n```").unwrap();
        assert_eq!(
            decision,
            ToolDecision::UseTool {
                name: "weather".into(),
                input: String::new(),
            }
        );
    }

    #[test]
    fn test_malformed_text_is_an_error() {
        assert!(parse_decision("").is_err());
        assert!(parse_decision("I don't know what to do here").is_err());
        assert!(parse_decision("```json\nnot json at all\n```").is_err());
        assert!(parse_decision("```json\n{\"tool\": \n```").is_err());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let raw = "```json\n{\"tool\": \"encyclopedia\", \"input\": \"Rust\"}\n```";
        let first = parse_decision(raw).unwrap();
        let second = parse_decision(raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_message_carries_diagnostic_prefix() {
        let err = parse_decision("garbage").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse tool decision:"));
    }
}
