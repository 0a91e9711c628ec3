//! Built-in toolbar presets
//!
//! The preset strings are fed to the editor as written, modifiers included,
//! when nothing is excluded. `FULL` is deliberately irregular (adjacent brace
//! groups, pipes inside braces, loose whitespace around dividers); it is the
//! main input the pipeline has to cope with.

use crate::ToolbarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BASIC: &str = "bold,italic,underline|fontname,fontsize|forecolor,backcolor|removeformat";

pub const STANDARD: &str =
    "bold,italic,underline,strikethrough|fontname,fontsize|forecolor,backcolor|removeformat|undo,redo";

pub const FULL: &str = concat!(
    "{bold,italic,underline,forecolor,backcolor}|{justifyleft,justifycenter,justifyright,justifyfull}",
    "|{insertorderedlist,insertunorderedlist,indent,outdent}{superscript,subscript}",
    " #{paragraphs:toggle,fontname:toggle,fontsize:toggle,inlinestyle,lineheight}",
    " / {removeformat,cut,copy,paste,delete,find}",
    "|{insertlink,unlink,insertblockquote,insertemoji,insertchars,inserttable,insertimage,insertgallery,insertvideo,insertdocument,insertcode}",
    "#{preview,code,selectall}",
    " /{paragraphs:dropdown | fontname:dropdown | fontsize:dropdown} {paragraphstyle,toggle_paragraphop,menu_paragraphop}",
    "#{toggleborder,fullscreenenter,fullscreenexit,undo,redo,togglemore}",
);

pub const MINIMAL: &str = "bold,italic|fontsize|forecolor|removeformat";

/// A named default toolbar layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Preset {
    Basic,
    Standard,
    Full,
    Minimal,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Basic, Preset::Standard, Preset::Full, Preset::Minimal];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Basic => "BASIC",
            Preset::Standard => "STANDARD",
            Preset::Full => "FULL",
            Preset::Minimal => "MINIMAL",
        }
    }

    /// The raw preset string, modifiers included
    pub fn toolbar(self) -> &'static str {
        match self {
            Preset::Basic => BASIC,
            Preset::Standard => STANDARD,
            Preset::Full => FULL,
            Preset::Minimal => MINIMAL,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ToolbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ToolbarError::UnknownPreset(s.to_string()))
    }
}
