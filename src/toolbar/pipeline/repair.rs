//! Structural repair
//!
//! Restores a well-formed toolbar after destructive edits. Separator artifacts
//! (doubled `,` or `|`, separators hugging braces, `{}`, stray whitespace) are
//! absorbed by the lenient parser and by [`Toolbar::compact`]. What is left
//! for this module is damage to the tool names themselves:
//!
//! - **Fragment runs**: a tool spelled out as single letters (`b,o,l,d`) is
//!   rejoined into one tool. Only runs of at least
//!   [`RepairOptions::min_fragment_run`] letters qualify, so short lists of
//!   genuine one-letter tools survive.
//! - **Concatenated names**: two tools glued together (`outdentsuperscript`)
//!   are split again. This relies on the fixed [`KNOWN_ADJACENT_PAIRS`] table;
//!   new tool names that can end up glued need an entry there.

use crate::toolbar::ast::{Tool, Toolbar};
use crate::toolbar::formats::serialize;
use crate::toolbar::parsing::parse;
use once_cell::sync::Lazy;
use tracing::trace;

/// Shortest run of single-letter tools that is treated as a broken name
pub const MIN_FRAGMENT_RUN: usize = 3;

/// Tool names known to end up glued together, as (left name, right prefix).
pub const KNOWN_ADJACENT_PAIRS: &[(&str, &str)] = &[
    ("fontname", "fontsize"),
    ("fontsize", "inlinestyle"),
    ("inlinestyle", "lineheight"),
    ("paragraphs", "fontname"),
    ("paragraphstyle", "menu_"),
    ("underline", "fore"),
    ("forecolor", "back"),
    ("outdent", "superscript"),
    ("insertlink", "un"),
    ("unlink", "insert"),
];

// (glued form, length of the left name)
static GLUED_PAIRS: Lazy<Vec<(String, usize)>> = Lazy::new(|| {
    KNOWN_ADJACENT_PAIRS
        .iter()
        .map(|(left, right)| (format!("{}{}", left, right), left.len()))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairOptions {
    /// Runs shorter than this are left alone. Values below 2 disable rejoining.
    pub min_fragment_run: usize,
}

impl Default for RepairOptions {
    fn default() -> Self {
        RepairOptions {
            min_fragment_run: MIN_FRAGMENT_RUN,
        }
    }
}

/// Repair a raw toolbar string with the default options
pub fn repair(source: &str) -> String {
    repair_with(source, &RepairOptions::default())
}

pub fn repair_with(source: &str, options: &RepairOptions) -> String {
    serialize(&repair_toolbar(parse(source), options))
}

/// Drop everything left empty, then repair tool names group by group.
///
/// Compacting first matters: bare groups merged by compaction can form a new
/// fragment run.
pub fn repair_toolbar(toolbar: Toolbar, options: &RepairOptions) -> Toolbar {
    let mut toolbar = toolbar.compact();
    for section in &mut toolbar.sections {
        for group in &mut section.groups {
            let tools = std::mem::take(&mut group.tools);
            let tools = rejoin_fragments(tools, options.min_fragment_run);
            group.tools = split_concatenated(tools);
        }
    }

    toolbar
}

/// Rejoin runs of single-letter tools until nothing changes.
///
/// The loop is capped at the number of tools so adversarial input cannot keep
/// it spinning.
pub fn rejoin_fragments(tools: Vec<Tool>, min_run: usize) -> Vec<Tool> {
    if min_run < 2 {
        return tools;
    }

    let max_passes = tools.len() + 1;
    let mut current = tools;
    for _ in 0..max_passes {
        let next = rejoin_pass(&current, min_run);
        if next == current {
            break;
        }
        trace!(before = current.len(), after = next.len(), "rejoined fragments");
        current = next;
    }
    current
}

fn rejoin_pass(tools: &[Tool], min_run: usize) -> Vec<Tool> {
    let mut rejoined = Vec::with_capacity(tools.len());
    let mut run: Vec<&Tool> = Vec::new();

    for tool in tools {
        if tool.is_fragment() {
            run.push(tool);
        } else {
            flush_run(&mut rejoined, &mut run, min_run);
            rejoined.push(tool.clone());
        }
    }
    flush_run(&mut rejoined, &mut run, min_run);

    rejoined
}

fn flush_run(rejoined: &mut Vec<Tool>, run: &mut Vec<&Tool>, min_run: usize) {
    if run.len() >= min_run {
        let name: String = run.iter().map(|tool| tool.name.as_str()).collect();
        rejoined.push(Tool::new(name));
    } else {
        rejoined.extend(run.iter().map(|tool| (*tool).clone()));
    }
    run.clear();
}

/// Split every tool that contains a known glued pair.
pub fn split_concatenated(tools: Vec<Tool>) -> Vec<Tool> {
    tools
        .into_iter()
        .flat_map(|tool| split_name(&tool.name))
        .collect()
}

fn split_name(name: &str) -> Vec<Tool> {
    let mut parts = Vec::new();
    let mut rest = name;

    while let Some(at) = split_point(rest) {
        trace!(tool = %name, part = &rest[..at], "splitting glued tool name");
        parts.push(Tool::new(&rest[..at]));
        rest = &rest[at..];
    }
    parts.push(Tool::new(rest));

    parts
}

// Earliest boundary between a known left name and its right neighbour
fn split_point(name: &str) -> Option<usize> {
    GLUED_PAIRS
        .iter()
        .filter_map(|(glued, left_len)| name.find(glued.as_str()).map(|at| at + left_len))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools(names: &[&str]) -> Vec<Tool> {
        names.iter().map(|name| Tool::new(*name)).collect()
    }

    fn names(tools: &[Tool]) -> Vec<&str> {
        tools.iter().map(|tool| tool.name.as_str()).collect()
    }

    #[test]
    fn test_repair_collapses_separator_runs() {
        assert_eq!(repair("bold,,,italic|||underline"), "bold,italic|underline");
    }

    #[test]
    fn test_repair_strips_separators_next_to_braces() {
        assert_eq!(repair("{,bold,}|{|italic|}"), "{bold}|{italic}");
    }

    #[test]
    fn test_repair_removes_empty_groups() {
        assert_eq!(repair("{ }|{forecolor,backcolor}|{}"), "{forecolor,backcolor}");
    }

    #[test]
    fn test_repair_trims_whitespace() {
        assert_eq!(repair("  { bold , italic }  |  code  "), "{bold,italic}|code");
    }

    #[test]
    fn test_repair_rejoins_fragments() {
        assert_eq!(repair("b,o,l,d,italic"), "bold,italic");
    }

    #[test]
    fn test_repair_only_rejoins_letters() {
        assert_eq!(repair("h,1,2"), "h,1,2");
        assert_eq!(repair("b,o,l,d,1,2,3"), "bold,1,2,3");

        let once = repair(":,t,o,g,g,l,e");
        assert_eq!(once, ":,toggle");
        assert_eq!(repair(&once), once);
    }

    #[test]
    fn test_repair_keeps_short_single_letter_lists() {
        assert_eq!(repair("a,b/d#e,f"), "a,b/d#e,f");
    }

    #[test]
    fn test_repair_splits_glued_names() {
        assert_eq!(
            repair("{insertorderedlist,outdentsuperscript,subscript}"),
            "{insertorderedlist,outdent,superscript,subscript}"
        );
        assert_eq!(
            repair("paragraphsfontnamefontsize,inlinestyle"),
            "paragraphs,fontname,fontsize,inlinestyle"
        );
    }

    #[test]
    fn test_repair_trims_dividers() {
        assert_eq!(repair("/#a|b#/"), "a|b");
        assert_eq!(repair("a//b##c"), "a/b#c");
    }

    #[test]
    fn test_repair_of_nothing() {
        assert_eq!(repair(""), "");
        assert_eq!(repair("{}|{,}/#,"), "");
    }

    #[test]
    fn test_repair_rejoins_across_vanished_groups() {
        let once = repair("a,b{}c");
        assert_eq!(once, "abc");
        assert_eq!(repair(&once), once);
    }

    #[test]
    fn test_rejoin_respects_min_run() {
        let rejoined = rejoin_fragments(tools(&["x", "y", "bold", "c", "o", "d", "e"]), 3);
        assert_eq!(names(&rejoined), vec!["x", "y", "bold", "code"]);
    }

    #[test]
    fn test_rejoin_disabled_below_two() {
        let source = tools(&["b", "o", "l", "d"]);
        assert_eq!(rejoin_fragments(source.clone(), 0), source);
        assert_eq!(rejoin_fragments(source.clone(), 1), source);
    }

    #[test]
    fn test_split_chooses_earliest_boundary() {
        let split = split_concatenated(tools(&["boldunderlineforecolorbackcolor"]));
        assert_eq!(names(&split), vec!["boldunderline", "forecolor", "backcolor"]);
    }

    #[test]
    fn test_split_leaves_known_names_alone() {
        let source = tools(&["paragraphstyle", "backcolor", "unlink", "insertlink"]);
        assert_eq!(split_concatenated(source.clone()), source);
    }

    #[test]
    fn test_repair_is_idempotent_on_damaged_input() {
        let once = repair("{ ,u,n,d,o , }||{insertlinkunlink}#/");
        assert_eq!(once, "{undo}|{insertlink,unlink}");
        assert_eq!(repair(&once), once);
    }
}
