/// Rope-backed storage for the editor's text.
use std::fmt;

use anyhow::Result;
use ropey::Rope;

/// Editor text held in a `ropey::Rope`.
///
/// Only supports what the editor does: append at the end, cut from the end,
/// and wholesale replacement when a snapshot is restored.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length in chars (Unicode scalar values).
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Appends text at the end of the buffer.
    pub fn append(&mut self, text: &str) {
        let end = self.rope.len_chars();
        self.rope.insert(end, text);
    }

    /// Removes the last `count` characters.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` exceeds the buffer length.
    pub fn remove_last(&mut self, count: usize) -> Result<()> {
        let len = self.rope.len_chars();
        if count > len {
            anyhow::bail!("cannot remove {count} chars (buffer has {len} chars)");
        }
        self.rope.remove(len - count..len);
        Ok(())
    }

    /// Replaces the whole content.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }
}
