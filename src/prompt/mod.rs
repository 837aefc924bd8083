use crate::model::Notice;
use crate::notice::DynNotifier;

pub const DEFAULT_PLACEHOLDER: &str = "Describe what you want to build...";
pub const DEFAULT_BUTTON_TEXT: &str = "Generate Code";
pub const LOADING_BUTTON_TEXT: &str = "Generating...";

/// Outcome of pressing the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    /// The handler ran and returned `T`.
    Accepted(T),
    /// Blank prompt; a validation notice was shown.
    Empty,
    /// Submit is disabled while a generation is loading.
    Disabled,
}

impl<T> Submission<T> {
    pub fn accepted(self) -> Option<T> {
        match self {
            Submission::Accepted(t) => Some(t),
            _ => None,
        }
    }
}

/// Single free-text prompt field with its submit button.
pub struct PromptInput {
    notifier: DynNotifier,
    pub placeholder: String,
    pub button_text: String,
}

impl PromptInput {
    pub fn new(notifier: DynNotifier) -> Self {
        Self {
            notifier,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Label the submit control shows for the given loading flag.
    pub fn button_label(&self, loading: bool) -> &str {
        if loading { LOADING_BUTTON_TEXT } else { &self.button_text }
    }

    /// Whether the submit control is clickable for the current field contents.
    pub fn can_submit(&self, text: &str, loading: bool) -> bool {
        !loading && !text.trim().is_empty()
    }

    /// Validate `text` and hand it, untrimmed, to `on_generate`.
    pub fn submit<T, F>(&self, text: &str, loading: bool, on_generate: F) -> Submission<T>
    where
        F: FnOnce(&str) -> T,
    {
        if loading {
            return Submission::Disabled;
        }
        if text.trim().is_empty() {
            self.notifier.notify(Notice::destructive(
                "Empty prompt",
                "Please enter a description of what you want to build.",
            ));
            return Submission::Empty;
        }
        Submission::Accepted(on_generate(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use crate::notice::MemoryNotifier;
    use std::sync::Arc;

    fn input() -> (PromptInput, Arc<MemoryNotifier>) {
        let notes = Arc::new(MemoryNotifier::new());
        (PromptInput::new(notes.clone()), notes)
    }

    #[test]
    fn blank_prompts_never_reach_the_handler() {
        for text in ["", "   ", "\n\t  \r\n"] {
            let (input, notes) = input();
            let mut called = false;
            let out = input.submit(text, false, |_| called = true);
            assert_eq!(out, Submission::Empty);
            assert!(!called);
            let shown = notes.notices();
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].title, "Empty prompt");
            assert_eq!(shown[0].severity, Severity::Destructive);
        }
    }

    #[test]
    fn handler_gets_raw_text() {
        let (input, notes) = input();
        let out = input.submit("  make a navbar \n", false, |p| p.to_string());
        assert_eq!(out.accepted().as_deref(), Some("  make a navbar \n"));
        assert!(notes.notices().is_empty());
    }

    #[test]
    fn disabled_while_loading() {
        let (input, notes) = input();
        let out = input.submit("anything", true, |_| unreachable!());
        assert_eq!(out, Submission::<()>::Disabled);
        assert!(notes.notices().is_empty());
        assert!(!input.can_submit("anything", true));
        assert_eq!(input.button_label(true), LOADING_BUTTON_TEXT);
        assert_eq!(input.button_label(false), DEFAULT_BUTTON_TEXT);
    }
}
