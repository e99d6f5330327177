// Re-exports from patternbook-mod-history.
// Keeps editor code depending on one path for the history types.
pub use patternbook_mod_history::{HistoryConfig, InMemoryHistory, MementoManager, TextMemento};
