//! Document Prompts

use aerodoc_mcp::{Prompt, PromptArgument, PromptMessage};
use serde_json::Value;

/// Canned troubleshooting request for PDF read failures. Pure: embeds the
/// caller's error text verbatim, no I/O.
pub struct DebugPdfPrompt;

impl Prompt for DebugPdfPrompt {
    fn name(&self) -> &str {
        "Debug PDF"
    }

    fn description(&self) -> &str {
        "Helps to debug errors for PDF issues."
    }

    fn arguments(&self) -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "error".to_string(),
            description: "The error message encountered".to_string(),
            required: true,
        }]
    }

    fn render(&self, arguments: &Value) -> Vec<PromptMessage> {
        let error = arguments.get("error").and_then(|v| v.as_str()).unwrap_or("");
        vec![PromptMessage::user(format!(
            "I'm trying to read a PDF file but encountered this error: {}. \
             How can I resolve this issue? Please provide step-by-step troubleshooting advice.",
            error
        ))]
    }
}
