//! Todo View-Model
//!
//! Plain owned state behind the App component: the current input text and
//! the list of submitted items. Kept free of reactive machinery so it can
//! be unit-tested on the host target.

/// The two pieces of view-state owned by the App component
#[derive(Clone, Debug, Default)]
pub struct TodoModel {
    /// Current input text, replaced on every keystroke
    pub input: String,
    /// Submitted items in insertion order (append-only)
    pub todos: Vec<String>,
}

impl TodoModel {
    /// Replace the input text with `new_text`. No validation, no length limit.
    pub fn set_input(&mut self, new_text: String) {
        self.input = new_text;
    }

    /// Append the current input to the list, then clear the input.
    /// An empty input still appends an empty string (no guard).
    pub fn add(&mut self) {
        self.todos.push(self.input.clone());
        self.input.clear();
    }

    /// Number of submitted items, shown in the add-button label
    pub fn count(&self) -> usize {
        self.todos.len()
    }
}
