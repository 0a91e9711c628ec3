//! Main module for toolbar compilation
//!
//! The compiler is an explicit pipeline of pure stages:
//!
//! 1. [`pipeline::strip_modifiers`] removes `:toggle` / `:dropdown` suffixes.
//! 2. [`parsing::parse`] turns the string into a [`ast::Toolbar`]. The parser is
//!    lenient: stray separators, empty groups and unbalanced braces never fail.
//! 3. [`pipeline::ExclusionSet`] removes the excluded tools.
//! 4. [`pipeline::repair_toolbar`] repairs corrupted tool names and drops
//!    whatever became empty.
//! 5. [`formats::serialize`] emits the canonical string.
//!
//! The policy layers ([`presets`], [`mobile`], [`image`], [`editor_config`])
//! build on top of that pipeline.

pub mod ast;
pub mod editor_config;
pub mod formats;
pub mod image;
pub mod lexing;
pub mod mobile;
pub mod parsing;
pub mod pipeline;
pub mod presets;
