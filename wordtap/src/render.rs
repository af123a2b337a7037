use std::fmt::Write;

use crate::widget::LookupWidget;

pub const TITLE: &str = "WordTap";
pub const SUBTITLE: &str = "WORDS WORTH KNOWING";
pub const SYNONYM_LIMIT: usize = 5;

/// Draws the whole widget as plain text.
pub fn render(widget: &LookupWidget) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_widget(&mut out, widget);
    out
}

fn write_widget(out: &mut String, widget: &LookupWidget) -> std::fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{SUBTITLE}")?;
    writeln!(out)?;
    writeln!(out, "Search: {}", widget.word())?;

    if let Some(error) = widget.error() {
        writeln!(out)?;
        writeln!(out, "! {error}")?;
    }

    if let Some(word) = widget.definition() {
        writeln!(out)?;
        writeln!(out, "{}", word.word)?;
        if let Some(audio) = word.audio() {
            writeln!(out, "Audio: {audio}")?;
        }
        for meaning in &word.meanings {
            writeln!(out)?;
            writeln!(out, "  {}", meaning.part_of_speech)?;
            for definition in &meaning.definitions {
                writeln!(out, "    - {}", definition.definition)?;
            }
            if let Some(synonyms) = meaning.synonym_preview(SYNONYM_LIMIT) {
                writeln!(out, "  Synonyms: {synonyms}")?;
            }
        }
    }
    Ok(())
}
