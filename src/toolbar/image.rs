//! Image control toolbar
//!
//! The editor shows a separate control bar when an image is selected. Its
//! content is a plain toolbar string built from a list of [`ImageToolItem`]s:
//! tools between row breaks form one braced group, rows are joined with `/`.

use crate::ToolbarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tools the editor supports on the image control bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageTool {
    MenuControlsize,
    Imagecaption,
    Controlalt,
    Controlinsertlink,
    Controleditlink,
    Controlopenlink,
    Controlunlink,
    MenuControljustify,
    Imagestyle,
    Delete,
}

impl ImageTool {
    pub const ALL: [ImageTool; 10] = [
        ImageTool::MenuControlsize,
        ImageTool::Imagecaption,
        ImageTool::Controlalt,
        ImageTool::Controlinsertlink,
        ImageTool::Controleditlink,
        ImageTool::Controlopenlink,
        ImageTool::Controlunlink,
        ImageTool::MenuControljustify,
        ImageTool::Imagestyle,
        ImageTool::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ImageTool::MenuControlsize => "menu_controlsize",
            ImageTool::Imagecaption => "imagecaption",
            ImageTool::Controlalt => "controlalt",
            ImageTool::Controlinsertlink => "controlinsertlink",
            ImageTool::Controleditlink => "controleditlink",
            ImageTool::Controlopenlink => "controlopenlink",
            ImageTool::Controlunlink => "controlunlink",
            ImageTool::MenuControljustify => "menu_controljustify",
            ImageTool::Imagestyle => "imagestyle",
            ImageTool::Delete => "delete",
        }
    }
}

impl fmt::Display for ImageTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImageTool {
    type Err = ToolbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ImageTool::ALL
            .into_iter()
            .find(|tool| tool.name() == wanted)
            .ok_or_else(|| ToolbarError::UnknownImageTool(s.to_string()))
    }
}

/// One entry of the image toolbar: a tool or a row break (`/`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageToolItem {
    Tool(ImageTool),
    RowBreak,
}

impl From<ImageTool> for ImageToolItem {
    fn from(tool: ImageTool) -> Self {
        ImageToolItem::Tool(tool)
    }
}

impl FromStr for ImageToolItem {
    type Err = ToolbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "/" {
            Ok(ImageToolItem::RowBreak)
        } else {
            s.parse().map(ImageToolItem::Tool)
        }
    }
}

/// Build the image control toolbar string
pub fn image_toolbar(items: &[ImageToolItem]) -> String {
    items
        .split(|item| *item == ImageToolItem::RowBreak)
        .filter_map(|row| {
            let names: Vec<&str> = row
                .iter()
                .filter_map(|item| match item {
                    ImageToolItem::Tool(tool) => Some(tool.name()),
                    ImageToolItem::RowBreak => None,
                })
                .collect();
            (!names.is_empty()).then(|| format!("{{{}}}", names.join(",")))
        })
        .collect::<Vec<_>>()
        .join("/")
}
