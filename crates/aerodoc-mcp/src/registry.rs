//! Tool Registry
//!
//! Maps tool names to handlers and their declared input schemas. Registration
//! happens once at process start; nothing is added or removed afterwards.
//! Every handler's observable contract is "returns a string": validation and
//! upstream failures are rendered into the string, never propagated. An `Err`
//! from `execute` only means the caller's arguments did not match the schema.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A named, schema-described callable exposed over MCP.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> Value;
    async fn execute(&self, input: Value) -> Result<String>;
}

pub type BoxedTool = Arc<dyn Tool>;

/// Tool metadata as listed over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub struct ToolRegistry {
    tools: RwLock<HashMap<String, BoxedTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: RwLock::new(HashMap::new()),
        }
    }

    pub async fn register(&self, tool: BoxedTool) -> Result<()> {
        let name = tool.name().to_string();
        self.tools.write().await.insert(name.clone(), tool);
        debug!("Registered tool: {}", name);
        Ok(())
    }

    pub async fn get(&self, name: &str) -> Option<BoxedTool> {
        self.tools.read().await.get(name).cloned()
    }

    /// List all tools, sorted by name for a stable wire listing.
    pub async fn list(&self) -> Vec<ToolInfo> {
        let tools = self.tools.read().await;
        let mut infos: Vec<ToolInfo> = tools
            .values()
            .map(|t| ToolInfo {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.input_schema(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    pub async fn count(&self) -> usize {
        self.tools.read().await.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct UpperTool;

    #[async_trait]
    impl Tool for UpperTool {
        fn name(&self) -> &str {
            "upper"
        }
        fn description(&self) -> &str {
            "Uppercase the input text."
        }
        fn input_schema(&self) -> Value {
            json!({"type": "object", "properties": {"text": {"type": "string"}}, "required": ["text"]})
        }
        async fn execute(&self, input: Value) -> Result<String> {
            let text = input
                .get("text")
                .and_then(|v| v.as_str())
                .ok_or_else(|| anyhow::anyhow!("Missing text"))?;
            Ok(text.to_uppercase())
        }
    }

    #[tokio::test]
    async fn register_and_execute() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(UpperTool)).await.unwrap();

        assert_eq!(registry.count().await, 1);
        let listed = registry.list().await;
        assert_eq!(listed[0].name, "upper");

        let tool = registry.get("upper").await.unwrap();
        let out = tool.execute(json!({"text": "metar"})).await.unwrap();
        assert_eq!(out, "METAR");
    }

    #[tokio::test]
    async fn missing_argument_is_a_caller_error() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(UpperTool)).await.unwrap();

        let tool = registry.get("upper").await.unwrap();
        assert!(tool.execute(json!({})).await.is_err());
    }
}
