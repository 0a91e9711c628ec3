//! Mobile "more" toolbar
//!
//! On small screens the editor shows a basic toolbar plus an expandable "more"
//! toolbar. The "more" toolbar is derived from a preset by removing the tools
//! the basic toolbar already has, then the caller's exclusions, then repairing.
//! When nothing survives, a fixed default toolbar is used instead.

use crate::settings::MobileSettings;
use crate::toolbar::pipeline::{ExclusionSet, Normalizer};
use crate::toolbar::presets::Preset;
use tracing::debug;

/// Tools already present on the mobile basic toolbar
pub const BASIC_MOBILE_TOOLS: &[&str] = &[
    "paragraphs:dropdown",
    "paragraphs:toggle",
    "fontname:toggle",
    "fontsize:toggle",
    "bold",
    "italic",
    "underline",
    "fontname",
    "fontsize",
    "insertlink",
    "insertemoji",
    "insertimage",
    "insertvideo",
    "removeformat",
    "code",
    "toggleborder",
    "fullscreenenter",
    "fullscreenexit",
    "undo",
    "redo",
    "togglemore",
    "fontname:dropdown",
    "fontsize:dropdown",
];

pub const DEFAULT_MOBILE_TOOLBAR: &str = concat!(
    "{strike,subscript,superscript}|{forecolor,backcolor}|",
    "{justifyleft,justifycenter,justifyright,justifyfull}|",
    "{insertorderedlist,insertunorderedlist}|{outdent,indent}|",
    "{inserthorizontalrule,insertblockquote,inserttable}|",
    "{cut,copy,paste,pastetext,pasteword}|",
    "{find,replace}|{selectall,print,spellcheck}|{help}",
);

/// Derives the mobile "more" toolbar
#[derive(Debug, Clone)]
pub struct MobileToolbar {
    basic_tools: ExclusionSet,
    default_toolbar: String,
}

impl MobileToolbar {
    pub fn new() -> Self {
        MobileToolbar {
            basic_tools: ExclusionSet::new(BASIC_MOBILE_TOOLS),
            default_toolbar: DEFAULT_MOBILE_TOOLBAR.to_string(),
        }
    }

    pub fn from_settings(settings: &MobileSettings) -> Self {
        MobileToolbar {
            basic_tools: ExclusionSet::new(&settings.basic_tools),
            default_toolbar: settings.default_toolbar.clone(),
        }
    }

    /// Derive the toolbar for `preset`, or the default one without a preset.
    pub fn derive(
        &self,
        normalizer: &Normalizer,
        preset: Option<Preset>,
        excluded: &ExclusionSet,
    ) -> String {
        let Some(preset) = preset else {
            return self.default_toolbar(normalizer);
        };

        let exclusions = self.basic_tools.chain(excluded);
        let derived = normalizer.normalize(preset.toolbar(), &exclusions);
        if derived.is_empty() {
            debug!(%preset, "mobile toolbar is empty, using default");
            return self.default_toolbar(normalizer);
        }
        derived
    }

    /// The default toolbar in canonical form
    pub fn default_toolbar(&self, normalizer: &Normalizer) -> String {
        normalizer.normalize(&self.default_toolbar, &ExclusionSet::default())
    }
}

impl Default for MobileToolbar {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the mobile "more" toolbar with the default normalizer and tool list
pub fn derive_mobile_toolbar(preset: Option<Preset>, excluded: &ExclusionSet) -> String {
    MobileToolbar::new().derive(&Normalizer::default(), preset, excluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolbar::parsing::parse;

    #[test]
    fn test_basic_tools_are_removed() {
        let toolbar = derive_mobile_toolbar(Some(Preset::Standard), &ExclusionSet::default());
        assert_eq!(toolbar, "strikethrough|forecolor,backcolor");
    }

    #[test]
    fn test_caller_exclusions_apply_after_basic_tools() {
        let excluded = ExclusionSet::new(["backcolor"]);
        let toolbar = derive_mobile_toolbar(Some(Preset::Standard), &excluded);
        assert_eq!(toolbar, "strikethrough|forecolor");
    }

    #[test]
    fn test_empty_result_falls_back_to_default() {
        let excluded = ExclusionSet::new(["forecolor", "backcolor"]);
        let toolbar = derive_mobile_toolbar(Some(Preset::Basic), &excluded);
        assert_eq!(toolbar, DEFAULT_MOBILE_TOOLBAR);
    }

    #[test]
    fn test_no_preset_uses_default() {
        assert_eq!(
            derive_mobile_toolbar(None, &ExclusionSet::default()),
            DEFAULT_MOBILE_TOOLBAR
        );
    }

    #[test]
    fn test_full_preset_loses_every_basic_tool() {
        let toolbar = derive_mobile_toolbar(Some(Preset::Full), &ExclusionSet::default());
        let parsed = parse(&toolbar);

        let basic = ExclusionSet::new(BASIC_MOBILE_TOOLS);
        assert!(parsed.tools().all(|tool| !basic.contains(&tool.name)));
        assert!(parsed.tools().any(|tool| tool.name == "superscript"));
    }

    #[test]
    fn test_default_toolbar_is_normalized() {
        let settings = MobileSettings {
            basic_tools: vec!["bold".to_string()],
            default_toolbar: " {help} |\n {find , replace} ".to_string(),
        };
        let mobile = MobileToolbar::from_settings(&settings);

        assert_eq!(
            mobile.derive(&Normalizer::default(), None, &ExclusionSet::default()),
            "{help}|{find,replace}"
        );
        assert_eq!(
            mobile.derive(&Normalizer::default(), Some(Preset::Basic), &ExclusionSet::default()),
            "italic,underline|fontname,fontsize|forecolor,backcolor|removeformat"
        );
    }
}
