//! Tool System
//!
//! Extensible tool framework for agent capabilities.
//! Tools are registered at runtime and invoked by the orchestration pipeline.
//!
//! A tool is a named text-in/text-out function with a human-readable
//! description. Invocation never fails: error states are encoded in the
//! returned text per each tool's own convention.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

/// Tool trait - implement to add new capabilities
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name (matched case-insensitively by the registry)
    fn name(&self) -> &str;

    /// Human-readable description (shown to the LLM in the decision prompt)
    fn description(&self) -> &str;

    /// Execute the tool. Must not fail: encode errors in the returned text.
    async fn invoke(&self, input: &str) -> String;
}

/// Closure-backed tool, for registering functions at runtime
pub struct FnTool {
    name: String,
    description: String,
    func: Box<dyn Fn(&str) -> String + Send + Sync>,
}

impl FnTool {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        func: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            func: Box::new(func),
        }
    }
}

#[async_trait]
impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn invoke(&self, input: &str) -> String {
        (self.func)(input)
    }
}

/// Registry for available tools
///
/// Keyed by lowercased tool name. No two tools share a case-insensitive
/// name: the last registration wins on conflict.
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Register a new tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_boxed(Arc::new(tool));
    }

    /// Register a boxed tool
    pub fn register_boxed(&mut self, tool: Arc<dyn Tool>) {
        let key = tool.name().to_lowercase();
        if self.tools.insert(key, tool).is_some() {
            tracing::debug!("replaced existing tool registration");
        }
    }

    /// Register a plain function as a tool
    pub fn register_fn(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        func: impl Fn(&str) -> String + Send + Sync + 'static,
    ) {
        self.register(FnTool::new(name, description, func));
    }

    /// Get a tool by name (case-insensitive)
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(&name.to_lowercase()).cloned()
    }

    /// All (name, description) pairs in deterministic order,
    /// for rendering the tool catalog into prompts
    pub fn catalog(&self) -> Vec<(String, String)> {
        self.tools
            .values()
            .map(|t| (t.name().to_string(), t.description().to_string()))
            .collect()
    }

    /// Get tool names
    pub fn names(&self) -> Vec<&str> {
        self.tools.values().map(|t| t.name()).collect()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "Echo"
        }

        fn description(&self) -> &str {
            "Repeats the input back"
        }

        async fn invoke(&self, input: &str) -> String {
            input.to_string()
        }
    }

    #[tokio::test]
    async fn test_register_and_lookup_case_insensitive() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("echo").is_some());
        assert!(registry.lookup("ECHO").is_some());
        assert!(registry.lookup("Echo").is_some());
        assert!(registry.lookup("unknown").is_none());

        let out = registry.lookup("echo").unwrap().invoke("hi").await;
        assert_eq!(out, "hi");
    }

    #[tokio::test]
    async fn test_last_registration_wins() {
        let mut registry = ToolRegistry::new();
        registry.register_fn("echo", "first", |s| format!("a:{s}"));
        registry.register_fn("Echo", "second", |s| format!("b:{s}"));

        assert_eq!(registry.len(), 1);
        let tool = registry.lookup("echo").unwrap();
        assert_eq!(tool.description(), "second");
        assert_eq!(tool.invoke("x").await, "b:x");
    }

    #[test]
    fn test_catalog_is_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register_fn("weather", "Get weather by city name", |_| String::new());
        registry.register_fn("calculator", "Evaluate math expressions", |_| String::new());

        let catalog = registry.catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].0, "calculator");
        assert_eq!(catalog[1].0, "weather");
    }
}
