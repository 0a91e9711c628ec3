//! Output formats for toolbar structures
//!
//! - [`serialize`] emits the canonical toolbar string consumed by the editor.
//! - [`to_json`] emits the structure itself, for inspection.
//!
//! The canonical form has no whitespace, `,` between tools, `|` between
//! groups, braces only around groups that were braced and still hold tools,
//! and the original `/` or `#` between sections.

use crate::toolbar::ast::{Group, Joint, Toolbar};
use crate::ToolbarError;
use std::fmt;

/// Serialize a toolbar into its canonical string form.
///
/// Empty groups and sections are skipped, so any structure serializes to a
/// well-formed string, possibly empty.
pub fn serialize(toolbar: &Toolbar) -> String {
    toolbar.to_string()
}

impl fmt::Display for Toolbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Compaction folds separators of vanished groups and sections
        let canonical = self.clone().compact();

        for (index, section) in canonical.sections.iter().enumerate() {
            if index > 0 {
                if let Some(divider) = section.divider {
                    write!(f, "{}", divider.as_char())?;
                }
            }

            let mut previous: Option<&Group> = None;
            for group in &section.groups {
                if let Some(previous) = previous {
                    match group.joint {
                        Joint::Pipe => f.write_str("|")?,
                        Joint::Adjacent if !previous.braced && !group.braced => f.write_str(",")?,
                        Joint::Adjacent => {}
                    }
                }
                write_group(f, group)?;
                previous = Some(group);
            }
        }

        Ok(())
    }
}

fn write_group(f: &mut fmt::Formatter<'_>, group: &Group) -> fmt::Result {
    if group.braced {
        f.write_str("{")?;
    }
    for (index, tool) in group.tools.iter().enumerate() {
        if index > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", tool)?;
    }
    if group.braced {
        f.write_str("}")?;
    }
    Ok(())
}

/// Serialize the toolbar structure as pretty-printed JSON
pub fn to_json(toolbar: &Toolbar) -> Result<String, ToolbarError> {
    Ok(serde_json::to_string_pretty(toolbar)?)
}
