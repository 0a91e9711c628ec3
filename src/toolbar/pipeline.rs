//! Toolbar normalization pipeline
//!
//! Each stage is a pure function from value to value, so every stage can be
//! tested on its own:
//!
//! ```text
//! strip_modifiers -> parse -> ExclusionSet::apply -> repair_toolbar -> serialize
//! ```
//!
//! The [`Normalizer`] runs the stages in order. Two strategies exist:
//!
//! - [`Strategy::Structural`] (default) excludes on the parsed structure.
//! - [`Strategy::Textual`] cuts excluded words out of the raw string with
//!   word-boundary regexes and leaves the separator artifacts to repair.
//!
//! Both produce the same output on the built-in presets.

pub mod exclusion;
pub mod modifiers;
pub mod repair;

pub use exclusion::{exclude_words, ExclusionSet};
pub use modifiers::strip_modifiers;
pub use repair::{repair, repair_toolbar, repair_with, RepairOptions};

use crate::settings::NormalizeSettings;
use crate::toolbar::ast::Toolbar;
use crate::toolbar::formats::serialize;
use crate::toolbar::parsing::parse;
use crate::toolbar::presets::Preset;
use crate::ToolbarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, debug_span, trace, warn};

/// Where exclusion happens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Remove tools from the parsed structure
    #[default]
    Structural,
    /// Remove whole words from the raw string, then repair
    Textual,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Structural => "structural",
            Strategy::Textual => "textual",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ToolbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structural" => Ok(Strategy::Structural),
            "textual" => Ok(Strategy::Textual),
            _ => Err(ToolbarError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Runs the normalization pipeline with a fixed strategy and fallback
#[derive(Debug, Clone)]
pub struct Normalizer {
    strategy: Strategy,
    repair: RepairOptions,
    fallback: String,
}

impl Normalizer {
    /// Structural strategy, default repair options, `BASIC` as fallback
    pub fn new() -> Self {
        Normalizer {
            strategy: Strategy::default(),
            repair: RepairOptions::default(),
            fallback: Preset::Basic.toolbar().to_string(),
        }
    }

    pub fn from_settings(settings: &NormalizeSettings) -> Self {
        Normalizer {
            strategy: settings.strategy,
            repair: RepairOptions {
                min_fragment_run: settings.min_fragment_run,
            },
            fallback: settings.fallback_preset.toolbar().to_string(),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_repair_options(mut self, options: RepairOptions) -> Self {
        self.repair = options;
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Normalize a toolbar string, removing the excluded tools.
    ///
    /// Never fails. An empty result means nothing survived; see
    /// [`Normalizer::normalize_or_fallback`].
    pub fn normalize(&self, toolbar: &str, exclusions: &ExclusionSet) -> String {
        let span = debug_span!("normalize", strategy = %self.strategy, exclusions = exclusions.len());
        let _enter = span.enter();

        // Rejoined fragments can spell an excluded name, so exclusion and
        // repair alternate until the output stops changing.
        let stripped = strip_modifiers(toolbar);
        let output = match self.strategy {
            Strategy::Structural => {
                let step = |current: &Toolbar| {
                    repair_toolbar(exclusions.apply(current.clone()), &self.repair)
                };
                let first = step(&parse(&stripped));
                let max_passes = first.tool_count() + 1;
                serialize(&settle(first, max_passes, step))
            }
            Strategy::Textual => {
                let step = |current: &String| {
                    let remaining = exclude_words(current, exclusions);
                    trace!(%remaining, "after exclusion");
                    repair_with(&remaining, &self.repair)
                };
                let first = step(&stripped);
                let max_passes = first.len() + 1;
                settle(first, max_passes, step)
            }
        };

        debug!(input = toolbar, %output, "normalized toolbar");
        output
    }

    /// Like [`Normalizer::normalize`], but an empty result is replaced by the
    /// (normalized) fallback toolbar.
    pub fn normalize_or_fallback(&self, toolbar: &str, exclusions: &ExclusionSet) -> String {
        let output = self.normalize(toolbar, exclusions);
        if !output.is_empty() {
            return output;
        }

        warn!(fallback = %self.fallback, "toolbar normalized to nothing, using fallback");
        self.normalize(&self.fallback, &ExclusionSet::default())
    }
}

/// Apply `step` until the value stops changing, at most `max_passes` times.
fn settle<T, F>(mut current: T, max_passes: usize, step: F) -> T
where
    T: PartialEq,
    F: Fn(&T) -> T,
{
    for _ in 0..max_passes {
        let next = step(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize `toolbar` without the `excluded` tools, using the default
/// [`Normalizer`].
///
/// An empty result means every tool was excluded; callers must substitute a
/// default toolbar.
pub fn normalize<S: AsRef<str>>(toolbar: &str, excluded: &[S]) -> String {
    let exclusions = ExclusionSet::new(excluded);
    Normalizer::default().normalize(toolbar, &exclusions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_EXCLUSIONS: &[&str] = &[];

    #[test]
    fn test_normalize_excludes_single_tool() {
        assert_eq!(
            normalize("bold,italic,underline|fontname,fontsize", &["italic"]),
            "bold,underline|fontname,fontsize"
        );
    }

    #[test]
    fn test_normalize_removes_emptied_braced_group() {
        assert_eq!(
            normalize("{bold,italic}|{forecolor,backcolor}", &["bold", "italic"]),
            "{forecolor,backcolor}"
        );
    }

    #[test]
    fn test_normalize_strips_modifiers() {
        assert_eq!(
            normalize("paragraphs:toggle,fontname:toggle", NO_EXCLUSIONS),
            "paragraphs,fontname"
        );
    }

    #[test]
    fn test_normalize_everything_excluded() {
        assert_eq!(
            normalize("bold,italic,underline", &["bold", "italic", "underline"]),
            ""
        );
    }

    #[test]
    fn test_normalize_keeps_dividers() {
        assert_eq!(normalize("a,b / c,d # e,f", &["c"]), "a,b/d#e,f");
    }

    #[test]
    fn test_textual_strategy_matches_structural() {
        let textual = Normalizer::new().with_strategy(Strategy::Textual);
        let exclusions = ExclusionSet::new(["c"]);
        assert_eq!(textual.normalize("a,b / c,d # e,f", &exclusions), "a,b/d#e,f");
    }

    #[test]
    fn test_fallback_applies_only_when_empty() {
        let normalizer = Normalizer::new().with_fallback("{undo,redo}");
        let all = ExclusionSet::new(["bold"]);

        assert_eq!(normalizer.normalize_or_fallback("bold", &all), "{undo,redo}");
        assert_eq!(normalizer.normalize_or_fallback("bold,code", &all), "code");
    }

    #[test]
    fn test_default_fallback_is_basic_preset() {
        let normalizer = Normalizer::default();
        let all = ExclusionSet::new(["bold"]);
        assert_eq!(
            normalizer.normalize_or_fallback("bold", &all),
            Preset::Basic.toolbar()
        );
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("Textual".parse::<Strategy>().ok(), Some(Strategy::Textual));
        assert_eq!(" structural ".parse::<Strategy>().ok(), Some(Strategy::Structural));
        assert!("regex".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_rejoined_fragments_are_excluded_too() {
        let exclusions = ExclusionSet::new(["bold"]);
        for strategy in [Strategy::Structural, Strategy::Textual] {
            let normalizer = Normalizer::new().with_strategy(strategy);
            assert_eq!(normalizer.normalize("b,o,l,d|italic", &exclusions), "italic");
        }
    }

    #[test]
    fn test_only_letters_are_rejoined() {
        for strategy in [Strategy::Structural, Strategy::Textual] {
            let normalizer = Normalizer::new().with_strategy(strategy);
            assert_eq!(normalizer.normalize("h,1,2", &ExclusionSet::default()), "h,1,2");

            let once = normalizer.normalize(":,t,o,g,g,l,e", &ExclusionSet::default());
            assert_eq!(once, ":,toggle");
            assert_eq!(normalizer.normalize(&once, &ExclusionSet::default()), once);
        }
    }

    #[test]
    fn test_modifiers_revealed_by_stripping_are_stripped() {
        assert_eq!(normalize("x:tog:togglegle", NO_EXCLUSIONS), "x");
        assert_eq!(normalize("{bold:drop:dropdowndown,italic}", NO_EXCLUSIONS), "{bold,italic}");
    }

    #[test]
    fn test_repair_options_are_honoured() {
        let normalizer = Normalizer::new().with_repair_options(RepairOptions {
            min_fragment_run: 2,
        });
        assert_eq!(normalizer.normalize("a,b|c", &ExclusionSet::default()), "ab|c");
    }
}
