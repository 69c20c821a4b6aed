//! Style Identifiers
//!
//! Class names from the external style definitions. Opaque strings with no
//! behavioral effect.

pub const CONTAINER: &str = "todo-container";
pub const HEADER: &str = "todo-header";
pub const INPUT: &str = "todo-input";
pub const BUTTON: &str = "todo-add-btn";
pub const TODO_ITEM: &str = "todo-item";
