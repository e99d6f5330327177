//! Domain models for the pattern demonstrations.
//!
//! - [`editor`]: a text editor whose undo/redo is driven by snapshots
//!   (Memento), on top of the rope-backed [`buffer`].
//! - [`builder`]: step-by-step city construction driven by a director.
//! - [`composite`]: items and nested bundles priced uniformly.
pub mod buffer;
pub mod builder;
pub mod composite;
pub mod editor;
pub mod history;

pub use buffer::TextBuffer;
pub use builder::{City, CityBuilder, CityDirector, Style, StyledCityBuilder};
pub use composite::{Bundle, ItemKind, Product};
pub use editor::{EditCommand, ErasePolicy, TextEditor};
