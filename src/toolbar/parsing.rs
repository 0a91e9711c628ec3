//! Lenient toolbar parser
//!
//! Turns the token stream into a [`Toolbar`]. The parser never fails; every
//! input produces some structure:
//!
//! - runs of `,` and `|` collapse, since empty items are never materialized
//! - separators next to braces (`{,` `|}`) vanish for the same reason
//! - `{}` produces no group at all, though a `|` around it still counts
//! - a `|` inside braces closes the braced group and opens another one
//! - `}` without a matching `{` just ends the current group
//! - a divider (`/`, `#`) closes any open brace and starts a new section
//! - an unclosed `{` is closed at the end of its section
//!
//! Empty groups and sections are still recorded when a separator surrounds
//! them so that [`Toolbar::compact`] can fold their separators correctly.

use crate::toolbar::ast::{Divider, Group, Joint, Section, Tool, Toolbar};
use crate::toolbar::lexing::{tokenize, Token};

/// Parse a toolbar string into its structure
pub fn parse(source: &str) -> Toolbar {
    let mut builder = ToolbarBuilder::new();

    for token in tokenize(source) {
        match token {
            Token::Tool(name) => builder.push_tool(name),
            // Consecutive tools are distinct already, commas carry no extra meaning
            Token::Comma => {}
            Token::Pipe => builder.pipe(),
            Token::OpenBrace => builder.open_brace(),
            Token::CloseBrace => builder.close_brace(),
            Token::Slash => builder.divide(Divider::Slash),
            Token::Hash => builder.divide(Divider::Hash),
        }
    }

    builder.finish()
}

struct ToolbarBuilder {
    sections: Vec<Section>,
    section: Section,
    group: Option<Group>,
    in_brace: bool,
    pending_joint: Joint,
}

impl ToolbarBuilder {
    fn new() -> Self {
        ToolbarBuilder {
            sections: Vec::new(),
            section: Section::new(None),
            group: None,
            in_brace: false,
            pending_joint: Joint::Pipe,
        }
    }

    fn push_tool(&mut self, name: String) {
        let in_brace = self.in_brace;
        let pending_joint = &mut self.pending_joint;
        let group = self.group.get_or_insert_with(|| {
            Group::new(in_brace, std::mem::replace(pending_joint, Joint::Adjacent))
        });
        group.tools.push(Tool::new(name));
    }

    fn pipe(&mut self) {
        self.close_group();
        self.pending_joint = Joint::Pipe;
    }

    fn open_brace(&mut self) {
        self.close_group();
        self.in_brace = true;
    }

    fn close_brace(&mut self) {
        self.close_group();
        self.in_brace = false;
    }

    fn divide(&mut self, divider: Divider) {
        self.close_group();
        self.in_brace = false;
        let section = std::mem::replace(&mut self.section, Section::new(Some(divider)));
        self.sections.push(section);
        self.pending_joint = Joint::Pipe;
    }

    fn close_group(&mut self) {
        if let Some(group) = self.group.take() {
            self.section.groups.push(group);
        } else if self.pending_joint == Joint::Pipe {
            // Keep the pipe of a group that never materialized
            self.section.groups.push(Group::new(self.in_brace, Joint::Pipe));
            self.pending_joint = Joint::Adjacent;
        }
    }

    fn finish(mut self) -> Toolbar {
        self.close_group();
        self.sections.push(self.section);
        Toolbar {
            sections: self.sections,
        }
    }
}
