//! Non-interactive UI for headless environments.

use std::collections::HashMap;

use crate::error::{PocketstackError, Result};

use super::{Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// The installer is built around interactive prompts; without a terminal
/// it can only answer from `POCKETSTACK_PROMPT_*` environment overrides or
/// a prompt's own default. Anything else cancels the run rather than
/// guessing at a destructive answer.
pub struct NonInteractiveUI {
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new() -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("POCKETSTACK_PROMPT_"))
            .collect();

        Self { env_overrides }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self {
            env_overrides: overrides,
        }
    }

    fn answer_for(&self, prompt: &Prompt) -> Option<String> {
        let env_key = format!("POCKETSTACK_PROMPT_{}", prompt.key.to_uppercase());
        self.env_overrides
            .get(&env_key)
            .cloned()
            .or_else(|| prompt.default.clone())
    }
}

impl Default for NonInteractiveUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let Some(answer) = self.answer_for(prompt) else {
            eprintln!(
                "Cannot prompt for '{}' without a terminal (no default value)",
                prompt.key
            );
            return Err(PocketstackError::Cancelled);
        };

        match prompt.prompt_type {
            PromptType::Confirm => {
                let yes = answer == "true" || answer == "y" || answer == "yes";
                Ok(PromptResult::Bool(yes))
            }
            _ => Ok(PromptResult::String(answer)),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        println!("{}", message);
        Box::new(SilentSpinner)
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", title);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints terminal states as plain lines.
struct SilentSpinner;

impl SpinnerHandle for SilentSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
