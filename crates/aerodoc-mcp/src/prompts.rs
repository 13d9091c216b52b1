//! Prompt Registry
//!
//! Canned, parameterized message templates served via the MCP prompts
//! protocol. Prompts are pure: rendering takes the caller's arguments and
//! produces role-tagged text messages with no I/O and no failure modes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// A single role-tagged message produced by a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessage {
    pub role: String,
    pub text: String,
}

impl PromptMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            text: text.into(),
        }
    }

    /// Wire shape used by `prompts/get`.
    pub fn to_wire(&self) -> Value {
        json!({
            "role": self.role,
            "content": { "type": "text", "text": self.text }
        })
    }
}

/// Declared prompt argument, listed via `prompts/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptArgument {
    pub name: String,
    pub description: String,
    pub required: bool,
}

pub trait Prompt: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn arguments(&self) -> Vec<PromptArgument> {
        Vec::new()
    }
    fn render(&self, arguments: &Value) -> Vec<PromptMessage>;
}

pub type BoxedPrompt = Arc<dyn Prompt>;

/// Prompt registry, populated once at startup.
#[derive(Default)]
pub struct PromptRegistry {
    prompts: Vec<BoxedPrompt>,
}

impl PromptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, prompt: BoxedPrompt) {
        self.prompts.push(prompt);
    }

    pub fn list(&self) -> &[BoxedPrompt] {
        &self.prompts
    }

    pub fn get(&self, name: &str) -> Option<&BoxedPrompt> {
        self.prompts.iter().find(|p| p.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct GreetPrompt;

    impl Prompt for GreetPrompt {
        fn name(&self) -> &str {
            "greet"
        }
        fn description(&self) -> &str {
            "Greets someone by name."
        }
        fn render(&self, arguments: &Value) -> Vec<PromptMessage> {
            let who = arguments.get("who").and_then(|v| v.as_str()).unwrap_or("");
            vec![PromptMessage::user(format!("Hello, {}!", who))]
        }
    }

    #[test]
    fn lookup_and_render() {
        let mut registry = PromptRegistry::new();
        registry.register(Arc::new(GreetPrompt));

        let prompt = registry.get("greet").unwrap();
        let messages = prompt.render(&json!({"who": "tower"}));
        assert_eq!(messages, vec![PromptMessage::user("Hello, tower!")]);
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn wire_shape_is_text_content() {
        let wire = PromptMessage::user("hi").to_wire();
        assert_eq!(wire["role"], "user");
        assert_eq!(wire["content"]["type"], "text");
        assert_eq!(wire["content"]["text"], "hi");
    }
}
