use crate::paint::model::{clamp_width, Color, Tool};
use serde::{Deserialize, Serialize};

/// Toolbar preferences persisted across sessions. Canvas contents are never
/// part of this; only the brush state and the quick palette survive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaintSettings {
    #[serde(default = "default_last_tool")]
    pub last_tool: Tool,
    #[serde(default = "default_last_color")]
    pub last_color: Color,
    #[serde(default = "default_last_width")]
    pub last_width: u32,
    #[serde(default = "default_quick_colors")]
    pub quick_colors: Vec<Color>,
}

impl PaintSettings {
    /// Clamp loaded values into the ranges the toolbar offers. Old or
    /// hand-edited files may carry anything.
    pub fn sanitize(&mut self) {
        self.last_width = clamp_width(self.last_width);
    }
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            last_tool: default_last_tool(),
            last_color: default_last_color(),
            last_width: default_last_width(),
            quick_colors: default_quick_colors(),
        }
    }
}

fn default_last_tool() -> Tool {
    Tool::Pencil
}

fn default_last_color() -> Color {
    Color::rgba(0, 0, 0, 255)
}

fn default_last_width() -> u32 {
    2
}

fn default_quick_colors() -> Vec<Color> {
    vec![
        Color::rgba(0, 0, 0, 255),
        Color::rgba(255, 0, 0, 255),
        Color::rgba(0, 128, 0, 255),
        Color::rgba(0, 0, 255, 255),
        Color::rgba(255, 255, 0, 255),
    ]
}
