//! Exclusion engine
//!
//! An [`ExclusionSet`] is an ordered list of bare tool names. It can be applied
//! to a parsed [`Toolbar`], where a tool is removed when its name equals an
//! excluded name, or to raw text via [`exclude_words`], where every whole-word
//! occurrence is cut out of the string. The text form leaves separator
//! artifacts behind (`{,italic}`, `||`); those are for repair to clean up.
//!
//! The word patterns for the text form are compiled once, when a name enters
//! the set.

use crate::toolbar::ast::Toolbar;
use crate::toolbar::pipeline::modifiers::strip_modifiers;
use regex::Regex;
use tracing::{trace, warn};

/// Ordered set of tool names to remove
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    names: Vec<String>,
    patterns: Vec<Regex>,
}

impl ExclusionSet {
    /// Build a set from tool names.
    ///
    /// Names are trimmed and stripped of modifiers, so `paragraphs:toggle`
    /// excludes `paragraphs`. Blank names and repeats are ignored.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = ExclusionSet::default();
        for name in names {
            set.push(name.as_ref());
        }
        set
    }

    fn push(&mut self, name: &str) {
        let name = strip_modifiers(name.trim());
        if name.is_empty() || self.contains(&name) {
            return;
        }
        if let Some(pattern) = word_pattern(&name) {
            self.patterns.push(pattern);
        }
        self.names.push(name);
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|excluded| excluded == name)
    }

    /// A new set holding this set's names followed by `other`'s
    pub fn chain(&self, other: &ExclusionSet) -> ExclusionSet {
        let mut chained = self.clone();
        for name in &other.names {
            chained.push(name);
        }
        chained
    }

    /// Remove every excluded tool from the toolbar.
    ///
    /// Groups and sections left empty stay in the structure; repair drops them.
    pub fn apply(&self, mut toolbar: Toolbar) -> Toolbar {
        if self.is_empty() {
            return toolbar;
        }

        for section in &mut toolbar.sections {
            for group in &mut section.groups {
                group.tools.retain(|tool| {
                    let excluded = self.contains(&tool.name);
                    if excluded {
                        trace!(tool = %tool.name, "excluding tool");
                    }
                    !excluded
                });
            }
        }

        toolbar
    }
}

impl PartialEq for ExclusionSet {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for ExclusionSet {}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ExclusionSet::new(iter)
    }
}

/// Remove every whole-word occurrence of each excluded name from raw text.
///
/// Names are applied in order, each one on the output of the previous.
pub fn exclude_words(source: &str, exclusions: &ExclusionSet) -> String {
    exclusions
        .patterns
        .iter()
        .fold(source.to_string(), |text, pattern| {
            pattern.replace_all(&text, "").into_owned()
        })
}

/// Build the match expression for one name.
///
/// The name is escaped; `\b` anchors are only added on edges that are word
/// characters, since `\b` next to `+` or `.` would never match.
fn word_pattern(name: &str) -> Option<Regex> {
    let first = name.chars().next()?;
    let last = name.chars().next_back()?;

    let mut pattern = String::new();
    if is_word_char(first) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(name));
    if is_word_char(last) {
        pattern.push_str(r"\b");
    }

    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(err) => {
            warn!(%name, error = %err, "skipping exclusion with invalid pattern");
            None
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
