use std::fmt;

/// Observable state of a suggestion engine
///
/// Committing and cancelling are transitions; both end in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// No active token, suggestions hidden
    #[default]
    Idle,
    /// A token is being typed; suggestions follow each edit
    Typing,
    /// The user is moving through the published list
    Selecting,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineState::Idle => write!(f, "idle"),
            EngineState::Typing => write!(f, "typing"),
            EngineState::Selecting => write!(f, "selecting"),
        }
    }
}

/// Why suggestions were dismissed without committing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Escape or an explicit host call
    Explicit,
    /// The entry field lost focus
    FocusLost,
    /// The caret no longer follows an alphanumeric run
    EmptyToken,
    /// Suggestions are disabled for this field
    Disabled,
    /// The background worker is gone
    WorkerUnavailable,
}

/// The published suggestion list and its selection
#[derive(Debug, Clone, Default)]
pub struct SuggestionList {
    /// Currently published suggestions
    suggestions: Vec<String>,
    /// Index of the highlighted suggestion
    selected_index: usize,
    /// Whether the list is shown to the user
    is_visible: bool,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list and show it if non-empty
    pub fn publish(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
        self.selected_index = 0;
        self.is_visible = !self.suggestions.is_empty();
    }

    pub fn hide(&mut self) {
        self.is_visible = false;
        self.suggestions.clear();
        self.selected_index = 0;
    }

    /// Move selection down, stopping at the last item
    pub fn select_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.suggestions.len() - 1);
        }
    }

    /// Move selection up, stopping at the first item
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn selected(&self) -> Option<&str> {
        if self.is_visible {
            self.suggestions.get(self.selected_index).map(String::as_str)
        } else {
            None
        }
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }
}

#[cfg(test)]
#[path = "engine_state_tests.rs"]
mod engine_state_tests;
