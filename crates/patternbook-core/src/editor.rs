//! Text editor that owns its state and delegates undo/redo to a history.
//!
//! The history's current snapshot always equals the editor text. A new
//! editor records its initial empty text, and every edit records the text it
//! produces, so each snapshot is the state immediately preceding the next
//! edit. Undoing a single write therefore restores the empty text.
//!
//! In before-mutation terms: the snapshot saved after edit `i` is the state
//! before edit `i + 1`, and the snapshot saved on construction is the state
//! before edit 1.
use std::fmt;
use std::str::FromStr;

use anyhow::Result;

use crate::buffer::TextBuffer;
use crate::history::{HistoryConfig, InMemoryHistory, MementoManager, TextMemento};

/// How `erase` treats a count larger than the current text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErasePolicy {
    /// Silently erase everything that is there.
    #[default]
    Clamp,
    /// Reject the erase and leave text and history untouched.
    Strict,
}

/// A single scripted editor action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Write(String),
    Erase(usize),
    Undo,
    Redo,
}

impl FromStr for EditCommand {
    type Err = anyhow::Error;

    /// Parses `write=<text>`, `erase=<n>`, `undo` or `redo`.
    ///
    /// Text after `write=` is taken verbatim, including leading spaces.
    fn from_str(s: &str) -> Result<Self> {
        if let Some(text) = s.strip_prefix("write=") {
            return Ok(Self::Write(text.to_string()));
        }
        if let Some(count) = s.strip_prefix("erase=") {
            let count = count
                .trim()
                .parse::<usize>()
                .map_err(|e| anyhow::anyhow!("invalid erase count {count:?}: {e}"))?;
            return Ok(Self::Erase(count));
        }
        match s.trim() {
            "undo" => Ok(Self::Undo),
            "redo" => Ok(Self::Redo),
            other => anyhow::bail!(
                "unknown edit command {other:?} (expected write=<text>, erase=<n>, undo or redo)"
            ),
        }
    }
}

/// A text editor whose undo/redo goes through a `MementoManager`.
pub struct TextEditor<M = InMemoryHistory<TextMemento>> {
    buffer: TextBuffer,
    history: M,
    erase_policy: ErasePolicy,
}

impl<M> fmt::Debug for TextEditor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEditor")
            .field("len_chars", &self.buffer.len_chars())
            .field("erase_policy", &self.erase_policy)
            .finish()
    }
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl TextEditor {
    /// Creates an editor with a default in-memory history.
    pub fn in_memory() -> Self {
        Self::new(InMemoryHistory::default())
    }

    /// Creates an editor with an in-memory history using `config`.
    pub fn with_config(config: HistoryConfig, erase_policy: ErasePolicy) -> Self {
        Self::new(InMemoryHistory::new(config)).with_erase_policy(erase_policy)
    }
}

impl<M: MementoManager<TextMemento>> TextEditor<M> {
    /// Creates an empty editor backed by the given history.
    ///
    /// The initial empty text is saved right away so the first edit can be
    /// undone.
    pub fn new(history: M) -> Self {
        let mut editor = Self {
            buffer: TextBuffer::new(),
            history,
            erase_policy: ErasePolicy::default(),
        };
        editor.save_state();
        editor
    }

    /// Sets the erase policy.
    pub fn with_erase_policy(mut self, erase_policy: ErasePolicy) -> Self {
        self.erase_policy = erase_policy;
        self
    }

    pub fn erase_policy(&self) -> ErasePolicy {
        self.erase_policy
    }

    /// Returns the current text.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Returns the text length in characters.
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Returns the history backing this editor.
    pub fn history(&self) -> &M {
        &self.history
    }

    /// Appends `text`.
    pub fn write(&mut self, text: &str) {
        self.buffer.append(text);
        self.save_state();
    }

    /// Erases the last `count` characters.
    ///
    /// # Errors
    ///
    /// Under [`ErasePolicy::Strict`], returns an error if `count` exceeds the
    /// text length. Text and history are left untouched in that case.
    pub fn erase(&mut self, count: usize) -> Result<()> {
        let len = self.buffer.len_chars();
        let count = if count > len {
            match self.erase_policy {
                ErasePolicy::Clamp => {
                    tracing::debug!(requested = count, available = len, "Clamping erase");
                    len
                }
                ErasePolicy::Strict => {
                    anyhow::bail!("cannot erase {count} chars, text has only {len}")
                }
            }
        } else {
            count
        };
        self.buffer.remove_last(count)?;
        self.save_state();
        Ok(())
    }

    /// Restores the previous snapshot. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        let restored = self.history.undo();
        self.restore(restored)
    }

    /// Restores the next snapshot. Returns false if there was none.
    pub fn redo(&mut self) -> bool {
        let restored = self.history.redo();
        self.restore(restored)
    }

    /// Runs one scripted command.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`TextEditor::erase`].
    pub fn apply(&mut self, command: &EditCommand) -> Result<()> {
        match command {
            EditCommand::Write(text) => self.write(text),
            EditCommand::Erase(count) => self.erase(*count)?,
            EditCommand::Undo => {
                self.undo();
            }
            EditCommand::Redo => {
                self.redo();
            }
        }
        Ok(())
    }

    fn save_state(&mut self) {
        self.history.save(TextMemento::new(self.text()));
    }

    fn restore(&mut self, memento: Option<TextMemento>) -> bool {
        match memento {
            Some(memento) => {
                self.buffer.set_text(memento.state());
                true
            }
            None => false,
        }
    }
}
