use crate::paint::history::SnapshotHistory;
use crate::paint::input::{
    undo_shortcut, EventDisposition, KeyEvent, PaintCommand, PointerEvent, SurfaceOrigin,
    TouchEvent,
};
use crate::paint::model::{clamp_width, Brush, Color, Tool};
use crate::paint::resize::ResizeCoordinator;
use crate::paint::settings::PaintSettings;
use crate::paint::status;
use crate::paint::stroke::StrokeGesture;
use crate::paint::surface::PaintSurface;

/// One paint window's engine: exclusively owns the surface, undo history,
/// resize coordinator and brush. Every method runs synchronously on the
/// host's event thread; events for one gesture are handled strictly in
/// delivery order.
#[derive(Debug)]
pub struct PaintApplet {
    surface: PaintSurface,
    history: SnapshotHistory,
    resize: ResizeCoordinator,
    brush: Brush,
    gesture: Option<StrokeGesture>,
    origin: SurfaceOrigin,
    cursor: (f32, f32),
}

impl PaintApplet {
    /// The surface starts with no area; the host sizes it via
    /// [`mount`](Self::mount) once its layout has settled.
    pub fn new() -> Self {
        Self {
            surface: PaintSurface::new(0, 0),
            history: SnapshotHistory::default(),
            resize: ResizeCoordinator::new(),
            brush: Brush::default(),
            gesture: None,
            origin: SurfaceOrigin::default(),
            cursor: (-50.0, -50.0),
        }
    }

    pub fn with_settings(settings: &PaintSettings) -> Self {
        let mut applet = Self::new();
        applet.apply_settings(settings);
        applet
    }

    /// Initial resize plus the one-time initial snapshot capture, so the
    /// first undo lands back on the blank canvas.
    pub fn mount(&mut self, container_w: u32, container_h: u32) {
        self.resize.apply(&mut self.surface, container_w, container_h);
        if let Err(err) = self.history.capture(&self.surface) {
            tracing::warn!(error = %err, "initial snapshot capture failed");
        }
        self.resize.refresh_cache(&self.surface);
    }

    /// The host reports where the canvas sits on screen so raw event
    /// coordinates can be translated to surface-local ones.
    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = SurfaceOrigin { x, y };
    }

    pub fn pointer_down(&mut self, event: PointerEvent) -> EventDisposition {
        let point = event.to_surface(self.origin);
        self.cursor = point;
        // State is captured before the stroke's first mark; a failed capture
        // is logged and drawing proceeds without the undo boundary.
        if let Err(err) = self.history.capture(&self.surface) {
            tracing::warn!(error = %err, "snapshot capture before stroke failed");
        }
        self.gesture = Some(StrokeGesture::begin(&mut self.surface, point, self.brush));
        EventDisposition::Consumed
    }

    pub fn pointer_move(&mut self, event: PointerEvent) -> EventDisposition {
        let point = event.to_surface(self.origin);
        self.cursor = point;
        match self.gesture.as_mut() {
            Some(gesture) => {
                gesture.extend(&mut self.surface, point);
                EventDisposition::Consumed
            }
            None => EventDisposition::Ignored,
        }
    }

    /// Ends the gesture: no drawing, no snapshot. Already-drawn pixels stay.
    pub fn pointer_up(&mut self) -> EventDisposition {
        match self.gesture.take() {
            Some(gesture) => {
                gesture.end();
                self.resize.refresh_cache(&self.surface);
                EventDisposition::Consumed
            }
            None => EventDisposition::Ignored,
        }
    }

    /// Leaving the canvas mid-gesture just stops future drawing.
    pub fn pointer_leave(&mut self) {
        let _ = self.pointer_up();
    }

    pub fn touch_start(&mut self, event: &TouchEvent) -> EventDisposition {
        match event.first_touch() {
            Some(pointer) => self.pointer_down(pointer),
            None => EventDisposition::Ignored,
        }
    }

    pub fn touch_move(&mut self, event: &TouchEvent) -> EventDisposition {
        match event.first_touch() {
            Some(pointer) => self.pointer_move(pointer),
            None => EventDisposition::Ignored,
        }
    }

    pub fn touch_end(&mut self) {
        let _ = self.pointer_up();
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.brush.tool = tool;
    }

    /// Picking a color while erasing switches back to the pencil, matching
    /// the toolbar behavior.
    pub fn set_color(&mut self, color: Color) {
        self.brush.color = color;
        if self.brush.tool == Tool::Eraser {
            self.brush.tool = Tool::Pencil;
        }
    }

    pub fn set_width(&mut self, width: u32) {
        self.brush.width = clamp_width(width);
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    /// Captures an undo boundary, then wipes the canvas to background.
    pub fn clear(&mut self) {
        if let Err(err) = self.history.capture(&self.surface) {
            tracing::warn!(error = %err, "snapshot capture before clear failed");
        }
        self.surface.fill(crate::paint::model::BACKGROUND);
        self.resize.refresh_cache(&self.surface);
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.surface);
        if undone {
            self.resize.refresh_cache(&self.surface);
        }
        undone
    }

    /// Keyboard entry point for the undo chord.
    pub fn handle_key(&mut self, event: KeyEvent, text_input_focused: bool) -> bool {
        if undo_shortcut(text_input_focused, event) {
            self.undo()
        } else {
            false
        }
    }

    pub fn command(&mut self, command: PaintCommand) {
        match command {
            PaintCommand::Undo => {
                let _ = self.undo();
            }
            PaintCommand::Clear => self.clear(),
        }
    }

    /// Both resize-observation and window-resize notifications land here.
    pub fn handle_resize(&mut self, container_w: u32, container_h: u32) {
        self.resize.apply(&mut self.surface, container_w, container_h);
    }

    pub fn surface(&self) -> &PaintSurface {
        &self.surface
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn undo_available(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn status_line(&self) -> String {
        status::status_line(self.brush, self.undo_available())
    }

    pub fn resolution_line(&self) -> String {
        status::resolution_line(&self.surface, self.cursor)
    }

    pub fn apply_settings(&mut self, settings: &PaintSettings) {
        self.brush = Brush::new(settings.last_tool, settings.last_color, settings.last_width);
    }

    /// Snapshot of toolbar preferences for the host to persist on close.
    /// Canvas pixels never persist.
    pub fn settings_snapshot(&self, previous: &PaintSettings) -> PaintSettings {
        PaintSettings {
            last_tool: self.brush.tool,
            last_color: self.brush.color,
            last_width: self.brush.width,
            quick_colors: previous.quick_colors.clone(),
        }
    }
}

impl Default for PaintApplet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::model::BACKGROUND;

    const BLACK: Color = Color::rgba(0, 0, 0, 255);

    fn mounted_applet() -> PaintApplet {
        let mut applet = PaintApplet::new();
        // 200x162 container leaves a 200x100 canvas after chrome insets.
        applet.mount(200, 162);
        applet
    }

    #[test]
    fn mount_captures_exactly_one_snapshot() {
        let applet = mounted_applet();
        assert_eq!(applet.history_len(), 1);
        assert_eq!(applet.surface().width(), 200);
        assert_eq!(applet.surface().height(), 100);
    }

    #[test]
    fn drawing_consumes_events_so_the_window_never_drags() {
        let mut applet = mounted_applet();
        assert_eq!(
            applet.pointer_down(PointerEvent::new(50.0, 50.0)),
            EventDisposition::Consumed
        );
        assert_eq!(
            applet.pointer_move(PointerEvent::new(60.0, 50.0)),
            EventDisposition::Consumed
        );
        assert_eq!(applet.pointer_up(), EventDisposition::Consumed);

        // Hover without a pressed button is not drawing.
        assert_eq!(
            applet.pointer_move(PointerEvent::new(70.0, 50.0)),
            EventDisposition::Ignored
        );
        assert_eq!(applet.pointer_up(), EventDisposition::Ignored);
    }

    #[test]
    fn stroke_then_two_undos_lands_on_blank_with_empty_history() {
        let mut applet = mounted_applet();
        applet.pointer_down(PointerEvent::new(50.0, 50.0));
        applet.pointer_up();
        assert_eq!(applet.history_len(), 2);

        assert!(applet.undo());
        assert_eq!(applet.surface().pixel(50, 50), BACKGROUND);
        assert!(applet.undo());
        assert!(!applet.undo_available());
        assert!(!applet.undo());
    }

    #[test]
    fn selecting_a_color_while_erasing_switches_to_pencil() {
        let mut applet = mounted_applet();
        applet.set_tool(Tool::Eraser);
        applet.set_color(Color::rgba(200, 0, 0, 255));
        assert_eq!(applet.brush().tool, Tool::Pencil);
        assert_eq!(applet.brush().color, Color::rgba(200, 0, 0, 255));
    }

    #[test]
    fn origin_offsets_are_subtracted_before_drawing() {
        let mut applet = mounted_applet();
        applet.set_origin(300.0, 200.0);
        applet.pointer_down(PointerEvent::new(310.0, 220.0));
        applet.pointer_up();
        assert_eq!(applet.surface().pixel(10, 20), BLACK);
    }

    #[test]
    fn undo_chord_is_refused_while_typing_elsewhere() {
        let mut applet = mounted_applet();
        applet.pointer_down(PointerEvent::new(10.0, 10.0));
        applet.pointer_up();

        let chord = KeyEvent {
            key: 'z',
            modifiers: crate::paint::input::KeyModifiers {
                ctrl: true,
                meta: false,
            },
        };
        assert!(!applet.handle_key(chord, true));
        assert_eq!(applet.history_len(), 2);
        assert!(applet.handle_key(chord, false));
        assert_eq!(applet.history_len(), 1);
    }
}
