//! Modifier stripping
//!
//! `:toggle` and `:dropdown` are presentation hints for the editor widget.
//! They are removed unconditionally before anything else looks at the string.

/// Suffixes removed from every tool token
pub const MODIFIERS: &[&str] = &[":toggle", ":dropdown"];

/// Remove every modifier occurrence from a toolbar string
///
/// Removing one modifier can close the gap around another (`:tog:togglegle`),
/// so removal repeats until nothing changes. Each pass that changes the
/// string shortens it, which bounds the loop.
pub fn strip_modifiers(source: &str) -> String {
    let mut text = source.to_string();
    loop {
        let stripped = MODIFIERS
            .iter()
            .fold(text.clone(), |text, modifier| text.replace(modifier, ""));
        if stripped == text {
            return text;
        }
        text = stripped;
    }
}
