//! Settings loader for rte-toolbar.
//!
//! `defaults/rte-toolbar.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`ToolbarSettings`].

use crate::toolbar::pipeline::Strategy;
use crate::toolbar::presets::Preset;
use crate::ToolbarError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/rte-toolbar.default.toml");

/// Top-level settings consumed by the compiler and the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolbarSettings {
    pub normalize: NormalizeSettings,
    pub mobile: MobileSettings,
    pub editor: EditorSettings,
}

/// Knobs of the normalization pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeSettings {
    pub strategy: Strategy,
    pub fallback_preset: Preset,
    pub min_fragment_run: usize,
}

/// Mobile "more" toolbar derivation.
#[derive(Debug, Clone, Deserialize)]
pub struct MobileSettings {
    pub basic_tools: Vec<String>,
    pub default_toolbar: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorSettings {
    pub toolbar_mobile: String,
}

/// Builds [`ToolbarSettings`] from the embedded defaults, an optional
/// settings file and command-line overrides, applied in that order.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Loader {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML settings file. The file must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        let file = File::from(path.as_ref()).format(FileFormat::Toml);
        Loader {
            builder: self.builder.add_source(file),
        }
    }

    /// Force the normalization strategy, whatever the files say.
    pub fn with_strategy(self, strategy: Strategy) -> Result<Self, ToolbarError> {
        self.with_override("normalize.strategy", strategy.name())
    }

    /// Force the preset used when a toolbar normalizes to nothing.
    pub fn with_fallback_preset(self, preset: Preset) -> Result<Self, ToolbarError> {
        self.with_override("normalize.fallback_preset", preset.name())
    }

    fn with_override<V: Into<ValueKind>>(self, key: &str, value: V) -> Result<Self, ToolbarError> {
        Ok(Loader {
            builder: self.builder.set_override(key, value)?,
        })
    }

    pub fn build(self) -> Result<ToolbarSettings, ToolbarError> {
        let settings = self.builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in settings with nothing layered on top.
pub fn load_defaults() -> Result<ToolbarSettings, ToolbarError> {
    Loader::new().build()
}
