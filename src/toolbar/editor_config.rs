//! Editor configuration assembly
//!
//! Collects every toolbar-related key the editor reads into one serializable
//! value. Keys the editor should not see (no preset, no image tools) are
//! omitted from the output rather than written as empty strings.

use crate::settings::ToolbarSettings;
use crate::toolbar::image::{image_toolbar, ImageToolItem};
use crate::toolbar::mobile::MobileToolbar;
use crate::toolbar::pipeline::{ExclusionSet, Normalizer};
use crate::toolbar::presets::Preset;
use serde::Serialize;
use tracing::debug;

/// What the caller asks for
#[derive(Debug, Clone, Default)]
pub struct ToolbarOptions {
    pub preset: Option<Preset>,
    pub excluded: Vec<String>,
    pub image_tools: Option<Vec<ImageToolItem>>,
}

/// Toolbar keys of the editor configuration, named as the editor expects them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorToolbarConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolbar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolbar_custom: Option<String>,
    #[serde(rename = "toolbarMobile")]
    pub toolbar_mobile: String,
    pub subtoolbar_more_mobile: String,
    #[serde(rename = "controltoolbar_IMG", skip_serializing_if = "Option::is_none")]
    pub controltoolbar_img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagecontrolbar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_toolbar: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EditorConfigBuilder {
    normalizer: Normalizer,
    mobile: MobileToolbar,
    toolbar_mobile: String,
}

impl EditorConfigBuilder {
    pub fn new() -> Self {
        EditorConfigBuilder {
            normalizer: Normalizer::default(),
            mobile: MobileToolbar::default(),
            toolbar_mobile: "basic".to_string(),
        }
    }

    pub fn from_settings(settings: &ToolbarSettings) -> Self {
        EditorConfigBuilder {
            normalizer: Normalizer::from_settings(&settings.normalize),
            mobile: MobileToolbar::from_settings(&settings.mobile),
            toolbar_mobile: settings.editor.toolbar_mobile.clone(),
        }
    }

    /// Assemble the editor configuration.
    ///
    /// Without exclusions the preset string is handed over as written,
    /// modifiers included. With exclusions it is normalized, falling back to
    /// the configured default toolbar when nothing survives.
    pub fn build(&self, options: &ToolbarOptions) -> EditorToolbarConfig {
        let exclusions = ExclusionSet::new(&options.excluded);

        let toolbar_custom = options.preset.map(|preset| {
            if exclusions.is_empty() {
                preset.toolbar().to_string()
            } else {
                self.normalizer.normalize_or_fallback(preset.toolbar(), &exclusions)
            }
        });

        let image = options.image_tools.as_deref().map(image_toolbar);

        let config = EditorToolbarConfig {
            toolbar: options.preset.map(|_| "custom".to_string()),
            toolbar_custom,
            toolbar_mobile: self.toolbar_mobile.clone(),
            subtoolbar_more_mobile: self
                .mobile
                .derive(&self.normalizer, options.preset, &exclusions),
            controltoolbar_img: image.clone(),
            imagecontrolbar: image.clone(),
            image_toolbar: image,
        };

        debug!(preset = ?options.preset, excluded = ?exclusions.names(), "assembled editor config");
        config
    }
}

impl Default for EditorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolbar::image::ImageTool;
    use crate::toolbar::mobile::DEFAULT_MOBILE_TOOLBAR;

    #[test]
    fn test_preset_without_exclusions_passes_through() {
        let options = ToolbarOptions {
            preset: Some(Preset::Full),
            ..Default::default()
        };
        let config = EditorConfigBuilder::new().build(&options);

        assert_eq!(config.toolbar.as_deref(), Some("custom"));
        assert_eq!(config.toolbar_custom.as_deref(), Some(Preset::Full.toolbar()));
        assert_eq!(config.toolbar_mobile, "basic");
    }

    #[test]
    fn test_exclusions_are_normalized() {
        let options = ToolbarOptions {
            preset: Some(Preset::Basic),
            excluded: vec!["italic".to_string(), "removeformat".to_string()],
            image_tools: None,
        };
        let config = EditorConfigBuilder::new().build(&options);

        assert_eq!(
            config.toolbar_custom.as_deref(),
            Some("bold,underline|fontname,fontsize|forecolor,backcolor")
        );
        assert_eq!(config.subtoolbar_more_mobile, "forecolor,backcolor");
    }

    #[test]
    fn test_everything_excluded_uses_fallback() {
        let options = ToolbarOptions {
            preset: Some(Preset::Minimal),
            excluded: ["bold", "italic", "fontsize", "forecolor", "removeformat"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            image_tools: None,
        };
        let config = EditorConfigBuilder::new().build(&options);

        assert_eq!(config.toolbar_custom.as_deref(), Some(Preset::Basic.toolbar()));
        assert_eq!(config.subtoolbar_more_mobile, DEFAULT_MOBILE_TOOLBAR);
    }

    #[test]
    fn test_without_preset_only_mobile_keys_are_set() {
        let config = EditorConfigBuilder::new().build(&ToolbarOptions::default());

        assert_eq!(config.toolbar, None);
        assert_eq!(config.toolbar_custom, None);
        assert_eq!(config.subtoolbar_more_mobile, DEFAULT_MOBILE_TOOLBAR);
        assert_eq!(config.image_toolbar, None);
    }

    #[test]
    fn test_image_toolbar_aliases() {
        let options = ToolbarOptions {
            image_tools: Some(vec![
                ImageTool::Imagecaption.into(),
                ImageToolItem::RowBreak,
                ImageTool::Delete.into(),
            ]),
            ..Default::default()
        };
        let config = EditorConfigBuilder::new().build(&options);

        let expected = Some("{imagecaption}/{delete}".to_string());
        assert_eq!(config.controltoolbar_img, expected);
        assert_eq!(config.imagecontrolbar, expected);
        assert_eq!(config.image_toolbar, expected);
    }

    #[test]
    fn test_serialized_keys() {
        let options = ToolbarOptions {
            preset: Some(Preset::Minimal),
            excluded: Vec::new(),
            image_tools: Some(vec![ImageTool::Delete.into()]),
        };
        let config = EditorConfigBuilder::new().build(&options);
        let json = serde_json::to_value(&config).expect("config to serialize");

        assert_eq!(json["toolbar"], "custom");
        assert_eq!(json["toolbar_custom"], Preset::Minimal.toolbar());
        assert_eq!(json["toolbarMobile"], "basic");
        assert_eq!(json["subtoolbar_more_mobile"], "forecolor");
        assert_eq!(json["controltoolbar_IMG"], "{delete}");
        assert_eq!(json["imagecontrolbar"], "{delete}");
    }

    #[test]
    fn test_unset_keys_are_omitted() {
        let config = EditorConfigBuilder::new().build(&ToolbarOptions::default());
        let json = serde_json::to_value(&config).expect("config to serialize");

        let object = json.as_object().expect("config to be an object");
        assert!(!object.contains_key("toolbar_custom"));
        assert!(!object.contains_key("controltoolbar_IMG"));
        assert!(object.contains_key("subtoolbar_more_mobile"));
    }
}
