//! Drivers for each pattern. Every driver returns the lines to print.
use anyhow::Result;
use patternbook_core::history::HistoryConfig;
use patternbook_core::{
    Bundle, CityDirector, EditCommand, ErasePolicy, Product, Style, StyledCityBuilder, TextEditor,
};

/// Script used when `memento` is run without steps.
pub const DEFAULT_SCRIPT: [&str; 6] = [
    "write=Hello",
    "write= World",
    "undo",
    "redo",
    "erase=6",
    "undo",
];

/// Runs an editing script and records the text after every state change.
///
/// Undo/redo that restores nothing records nothing.
pub fn memento(
    steps: &[EditCommand],
    history: HistoryConfig,
    erase_policy: ErasePolicy,
) -> Result<Vec<String>> {
    let mut editor = TextEditor::with_config(history, erase_policy);
    let mut lines = Vec::new();
    for step in steps {
        let changed = match step {
            EditCommand::Undo => editor.undo(),
            EditCommand::Redo => editor.redo(),
            other => {
                editor.apply(other)?;
                true
            }
        };
        if changed {
            lines.push(editor.text());
        }
    }
    Ok(lines)
}

/// Parses the default script.
pub fn default_script() -> Result<Vec<EditCommand>> {
    DEFAULT_SCRIPT.iter().map(|step| step.parse()).collect()
}

/// Builds a city in `style` through the director.
pub fn builder(style: Style) -> Vec<String> {
    let mut director = CityDirector::new(StyledCityBuilder::new(style));
    director.construct_city();
    vec![director.into_city().to_string()]
}

/// Prices the sample entertainment bundle.
pub fn composite() -> Vec<String> {
    let bundle = Bundle::new(
        "Entertainment Bundle",
        [
            Product::book("The Lord of the Rings", 20.0),
            Product::music_cd("Abbey Road", 15.0),
            Product::video_dvd("The Godfather", 25.0),
        ],
    );
    vec![format!("Total price: {:.2}", bundle.price())]
}
