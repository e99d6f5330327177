/// Linear undo/redo history over immutable snapshots.
///
/// The owner saves a snapshot of its state *before* every mutation. The
/// history keeps those snapshots in order with a cursor on the current one,
/// so undo walks the cursor back and redo walks it forward. Saving after an
/// undo drops everything past the cursor, keeping the history branch-free.
use crate::config::HistoryConfig;

/// Caretaker contract between a state owner and its history.
///
/// `undo` and `redo` return `None` when there is nothing further in that
/// direction; callers must treat `None` as "state unchanged".
pub trait MementoManager<S> {
    /// Records a snapshot, discarding any redo targets.
    fn save(&mut self, snapshot: S);

    /// Steps back one snapshot and returns it.
    fn undo(&mut self) -> Option<S>;

    /// Steps forward one snapshot and returns it.
    fn redo(&mut self) -> Option<S>;
}

/// In-memory snapshot history with a cursor.
///
/// Invariants:
/// - `cursor` is `None` iff `entries` is empty, otherwise `< entries.len()`
/// - right after `save`, `cursor == entries.len() - 1`
pub struct InMemoryHistory<S> {
    /// Snapshots, oldest first.
    entries: Vec<S>,
    /// Index of the current snapshot.
    cursor: Option<usize>,
    config: HistoryConfig,
}

impl<S> std::fmt::Debug for InMemoryHistory<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryHistory")
            .field("len", &self.entries.len())
            .field("cursor", &self.cursor)
            .field("max_depth", &self.config.max_depth)
            .finish()
    }
}

impl<S> Default for InMemoryHistory<S> {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl<S> InMemoryHistory<S> {
    /// Creates an empty history.
    pub fn new(mut config: HistoryConfig) -> Self {
        config.sanitize();
        Self {
            entries: Vec::new(),
            cursor: None,
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Index of the current snapshot, `None` when empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of stored snapshots, including redo targets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The snapshot the cursor points at.
    pub fn current(&self) -> Option<&S> {
        self.cursor.and_then(|idx| self.entries.get(idx))
    }

    /// Whether `undo` would return a snapshot.
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(idx) if idx > 0)
    }

    /// Whether `redo` would return a snapshot.
    pub fn can_redo(&self) -> bool {
        self.next_index().is_some()
    }

    /// Drops every snapshot and resets the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Records a snapshot after the cursor.
    ///
    /// Anything past the cursor is discarded first. If the history then
    /// exceeds `max_depth`, the oldest snapshots are dropped from the front.
    pub fn push(&mut self, snapshot: S) {
        let keep = self.cursor.map_or(0, |idx| idx + 1);
        let discarded = self.entries.len() - keep;
        self.entries.truncate(keep);
        self.entries.push(snapshot);

        let evicted = self.entries.len().saturating_sub(self.config.max_depth);
        if evicted > 0 {
            self.entries.drain(..evicted);
        }
        self.cursor = Some(self.entries.len() - 1);

        tracing::debug!(
            len = self.entries.len(),
            discarded,
            evicted,
            "Saved history snapshot"
        );
    }

    /// Moves the cursor back and borrows the snapshot it lands on.
    pub fn step_back(&mut self) -> Option<&S> {
        let idx = self.cursor.filter(|&idx| idx > 0)? - 1;
        self.cursor = Some(idx);
        tracing::trace!(cursor = idx, "Undo");
        self.entries.get(idx)
    }

    /// Moves the cursor forward and borrows the snapshot it lands on.
    pub fn step_forward(&mut self) -> Option<&S> {
        let idx = self.next_index()?;
        self.cursor = Some(idx);
        tracing::trace!(cursor = idx, "Redo");
        self.entries.get(idx)
    }

    fn next_index(&self) -> Option<usize> {
        let next = self.cursor? + 1;
        (next < self.entries.len()).then_some(next)
    }
}

impl<S: Clone> MementoManager<S> for InMemoryHistory<S> {
    fn save(&mut self, snapshot: S) {
        self.push(snapshot);
    }

    fn undo(&mut self) -> Option<S> {
        self.step_back().cloned()
    }

    fn redo(&mut self) -> Option<S> {
        self.step_forward().cloned()
    }
}
