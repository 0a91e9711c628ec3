//! # rte-toolbar
//!
//! A compiler for rich-text-editor toolbar strings.
//!
//! Toolbar strings are a small grammar of tool names: commas join tools into
//! groups, `|` separates groups, braces mark visually grouped tools and `/` or
//! `#` split the toolbar into sections. This crate strips presentation
//! modifiers, removes excluded tools and re-emits a canonical, well-formed
//! string.
//!
//! ```rust
//! use rte_toolbar::normalize;
//!
//! let toolbar = normalize("{bold,italic}|{forecolor,backcolor}", &["bold", "italic"]);
//! assert_eq!(toolbar, "{forecolor,backcolor}");
//! ```
//!
//! See the [toolbar module](crate::toolbar) for the individual pipeline stages.

pub mod error;
pub mod settings;
pub mod toolbar;

pub use error::ToolbarError;
pub use toolbar::pipeline::{normalize, ExclusionSet, Normalizer, Strategy};
pub use toolbar::presets::Preset;
