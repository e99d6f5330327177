/// Snapshot type for text owners.
use std::fmt;
use std::sync::Arc;

/// Immutable capture of an editor's text at one instant.
///
/// Backed by a shared `Arc<str>`, so handing clones back to the owner on
/// undo/redo never copies the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextMemento {
    state: Arc<str>,
}

impl TextMemento {
    /// Captures the given text.
    pub fn new(state: impl Into<Arc<str>>) -> Self {
        Self {
            state: state.into(),
        }
    }

    /// Returns the captured text.
    pub fn state(&self) -> &str {
        &self.state
    }
}

impl From<&str> for TextMemento {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextMemento {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for TextMemento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.state)
    }
}
