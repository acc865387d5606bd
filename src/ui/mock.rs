//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use pocketstack::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("name", "my-app");
//!
//! let answer = ui
//!     .prompt(&Prompt::input("name", "Project name?", None))
//!     .unwrap();
//! assert_eq!(answer.as_string(), "my-app");
//!
//! ui.success("Done!");
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::{PocketstackError, Result};

use super::{Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt
/// responses. Supports both single responses (via `set_prompt_response`)
/// and queued responses (via `queue_prompt_responses`) for keys prompted
/// multiple times.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key, returned in order.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner start messages.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get the keys of all prompts shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    fn next_response(&mut self, key: &str) -> Option<String> {
        if let Some(queue) = self.prompt_queues.get_mut(key) {
            if let Some(response) = queue.pop_front() {
                return Some(response);
            }
        }
        self.prompt_responses.get(key).cloned()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        let answer = self
            .next_response(&prompt.key)
            .or_else(|| prompt.default.clone())
            .ok_or_else(|| {
                PocketstackError::Other(anyhow::anyhow!(
                    "MockUI has no response for prompt '{}'",
                    prompt.key
                ))
            })?;

        match prompt.prompt_type {
            PromptType::Confirm => {
                let yes = answer == "true" || answer == "y" || answer == "yes";
                Ok(PromptResult::Bool(yes))
            }
            _ => Ok(PromptResult::String(answer)),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Spinner handle that discards everything.
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_all_output_kinds() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.show_header("h");

        assert_eq!(ui.messages(), &["m".to_string()]);
        assert_eq!(ui.successes(), &["s".to_string()]);
        assert_eq!(ui.warnings(), &["w".to_string()]);
        assert_eq!(ui.errors(), &["e".to_string()]);
        assert_eq!(ui.headers(), &["h".to_string()]);
    }

    #[test]
    fn scripted_response_is_returned() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("name", "demo");
        let result = ui
            .prompt(&Prompt::input("name", "Project name?", None))
            .unwrap();
        assert_eq!(result.as_string(), "demo");
        assert_eq!(ui.prompts_shown(), &["name".to_string()]);
    }

    #[test]
    fn queued_responses_return_in_order_then_fall_back() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("retry", vec!["no", "yes"]);
        ui.set_prompt_response("retry", "fallback");

        let prompt = Prompt::input("retry", "Again?", None);
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "no");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "yes");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "fallback");
    }

    #[test]
    fn confirm_prompt_parses_bool() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("wipe", "yes");
        let result = ui
            .prompt(&Prompt::confirm("wipe", "Remove?", false))
            .unwrap();
        assert_eq!(result.as_bool(), Some(true));
    }

    #[test]
    fn unscripted_prompt_uses_default() {
        let mut ui = MockUI::new();
        let result = ui
            .prompt(&Prompt::input("dir", "Where?", Some("./app")))
            .unwrap();
        assert_eq!(result.as_string(), "./app");
    }

    #[test]
    fn unscripted_prompt_without_default_errors() {
        let mut ui = MockUI::new();
        assert!(ui.prompt(&Prompt::input("dir", "Where?", None)).is_err());
    }

    #[test]
    fn spinner_messages_are_recorded() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Cloning...");
        spinner.finish_success("Cloned");
        assert_eq!(ui.spinners(), &["Cloning...".to_string()]);
    }
}
