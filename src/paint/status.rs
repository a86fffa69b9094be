use crate::paint::model::{Brush, Tool};
use crate::paint::surface::PaintSurface;

pub fn tool_label(tool: Tool) -> &'static str {
    match tool {
        Tool::Pencil => "Pencil",
        Tool::Eraser => "Eraser",
    }
}

/// Left half of the status bar: current tool, line width and whether undo
/// history is non-empty.
pub fn status_line(brush: Brush, undo_available: bool) -> String {
    let undo = if undo_available {
        "Undo Available (Ctrl+Z)"
    } else {
        "No Undo Available"
    };
    format!(
        "Ready | Tool: {} | Size: {}px | {}",
        tool_label(brush.tool),
        brush.width,
        undo
    )
}

/// Right half of the status bar: surface resolution and cursor position.
pub fn resolution_line(surface: &PaintSurface, cursor: (f32, f32)) -> String {
    format!(
        "{} x {}px | Position: {}, {}",
        surface.width(),
        surface.height(),
        cursor.0.round() as i32,
        cursor.1.round() as i32
    )
}
