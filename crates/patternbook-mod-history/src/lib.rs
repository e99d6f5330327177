/// Snapshot-based undo/redo history.
///
/// Provides a `MementoManager` contract and an `InMemoryHistory` that keeps
/// a linear log of immutable snapshots plus a cursor into it. Owners save
/// their state before each mutation and ask the manager for earlier or later
/// snapshots on undo/redo.
pub mod config;
pub mod manager;
pub mod memento;

pub use config::HistoryConfig;
pub use manager::{InMemoryHistory, MementoManager};
pub use memento::TextMemento;
