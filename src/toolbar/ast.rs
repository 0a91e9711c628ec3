//! Toolbar structure
//!
//! A [`Toolbar`] is a list of [`Section`]s, each a list of [`Group`]s, each a
//! list of [`Tool`]s. Separators are not stored verbatim: every group records
//! how it attaches to the group before it ([`Joint`]) and every section records
//! the divider that opened it ([`Divider`]). The serializer derives the
//! separators from those, which is what keeps the output well-formed no matter
//! which groups and sections disappear.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single tool token, without modifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tool {
    pub name: String,
}

impl Tool {
    pub fn new(name: impl Into<String>) -> Self {
        Tool { name: name.into() }
    }

    /// A single lowercase ASCII letter, the only kind of tool fragment repair
    /// will glue back together.
    pub fn is_fragment(&self) -> bool {
        self.name.len() == 1 && self.name.bytes().all(|b| b.is_ascii_lowercase())
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// How a group attaches to the group before it in the same section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Joint {
    /// Written directly after the previous group: `{a}{b}`
    Adjacent,
    /// Separated by a pipe: `{a}|{b}`
    Pipe,
}

impl Joint {
    /// When the groups between two joints vanish, the pipe wins.
    pub fn merge(self, other: Joint) -> Joint {
        self.max(other)
    }
}

/// Top-level divider opening a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Divider {
    #[serde(rename = "#")]
    Hash,
    #[serde(rename = "/")]
    Slash,
}

impl Divider {
    pub fn as_char(self) -> char {
        match self {
            Divider::Hash => '#',
            Divider::Slash => '/',
        }
    }

    /// When a whole section vanishes, the row break (`/`) wins over `#`.
    pub fn merge(self, other: Divider) -> Divider {
        self.max(other)
    }
}

/// A `|`-delimited cluster of tools, optionally brace-wrapped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub braced: bool,
    pub joint: Joint,
    pub tools: Vec<Tool>,
}

impl Group {
    pub fn new(braced: bool, joint: Joint) -> Self {
        Group {
            braced,
            joint,
            tools: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A `/`- or `#`-delimited cluster of groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Divider written before this section. Meaningless on the first section.
    pub divider: Option<Divider>,
    pub groups: Vec<Group>,
}

impl Section {
    pub fn new(divider: Option<Divider>) -> Self {
        Section {
            divider,
            groups: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Group::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolbar {
    pub sections: Vec<Section>,
}

impl Toolbar {
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }

    /// Iterate over every tool in document order
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.sections
            .iter()
            .flat_map(|section| section.groups.iter())
            .flat_map(|group| group.tools.iter())
    }

    pub fn tool_count(&self) -> usize {
        self.tools().count()
    }

    /// Drop empty groups and sections, folding their separators into the
    /// next survivor, and merge bare groups that ended up side by side.
    ///
    /// The result has no empty groups, no empty sections, a `Pipe` joint on
    /// the first group of each section and no divider on the first section.
    pub fn compact(self) -> Toolbar {
        let mut sections: Vec<Section> = Vec::new();
        let mut pending_divider: Option<Divider> = None;

        for section in self.sections {
            pending_divider = merge_divider(pending_divider, section.divider);

            let groups = compact_groups(section.groups);
            if groups.is_empty() {
                continue;
            }

            let divider = if sections.is_empty() {
                None
            } else {
                pending_divider
            };
            pending_divider = None;
            sections.push(Section { divider, groups });
        }

        Toolbar { sections }
    }
}

fn merge_divider(current: Option<Divider>, next: Option<Divider>) -> Option<Divider> {
    match (current, next) {
        (Some(a), Some(b)) => Some(a.merge(b)),
        (a, b) => a.or(b),
    }
}

fn compact_groups(groups: Vec<Group>) -> Vec<Group> {
    let mut kept: Vec<Group> = Vec::new();
    let mut pending_joint = Joint::Adjacent;

    for group in groups {
        pending_joint = pending_joint.merge(group.joint);
        if group.is_empty() {
            continue;
        }

        // Two bare lists with nothing between them are one list
        let extends_previous = pending_joint == Joint::Adjacent
            && !group.braced
            && kept.last().is_some_and(|previous| !previous.braced);

        if extends_previous {
            if let Some(previous) = kept.last_mut() {
                previous.tools.extend(group.tools);
            }
        } else {
            let joint = if kept.is_empty() {
                Joint::Pipe
            } else {
                pending_joint
            };
            kept.push(Group { joint, ..group });
        }
        pending_joint = Joint::Adjacent;
    }

    kept
}
