//! Adapts host pointer/touch/keyboard events to surface-local coordinates
//! and engine commands. Mouse and touch share one coordinate mapping.

/// On-screen position of the surface's top-left corner, in the same
/// coordinate space the host reports events in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceOrigin {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client_x: f32,
    pub client_y: f32,
}

impl PointerEvent {
    pub fn new(client_x: f32, client_y: f32) -> Self {
        Self { client_x, client_y }
    }

    pub fn to_surface(self, origin: SurfaceOrigin) -> (f32, f32) {
        (self.client_x - origin.x, self.client_y - origin.y)
    }
}

/// A touch event carries every active touch; drawing follows the first one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchEvent {
    pub touches: Vec<(f32, f32)>,
}

impl TouchEvent {
    pub fn first_touch(&self) -> Option<PointerEvent> {
        self.touches
            .first()
            .map(|&(x, y)| PointerEvent::new(x, y))
    }
}

/// Whether an input event was used for drawing. Consumed events must not
/// propagate to the host's window-drag handlers, so drawing never moves the
/// containing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    Consumed,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: char,
    pub modifiers: KeyModifiers,
}

/// Explicit commands the hosting toolbar or shortcut layer can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintCommand {
    Undo,
    Clear,
}

/// Recognizes the platform undo chord (Ctrl+Z or Cmd+Z). Refused while a
/// text-input control holds focus so typing in the notes window never
/// reaches the canvas.
pub fn undo_shortcut(text_input_focused: bool, event: KeyEvent) -> bool {
    if text_input_focused {
        return false;
    }
    (event.modifiers.ctrl || event.modifiers.meta) && event.key.eq_ignore_ascii_case(&'z')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_coordinates_are_origin_relative() {
        let origin = SurfaceOrigin { x: 120.0, y: 64.0 };
        let event = PointerEvent::new(130.0, 70.0);
        assert_eq!(event.to_surface(origin), (10.0, 6.0));
    }

    #[test]
    fn first_touch_drives_drawing() {
        let touch = TouchEvent {
            touches: vec![(200.0, 150.0), (400.0, 300.0)],
        };
        let pointer = touch.first_touch().expect("first touch");
        assert_eq!((pointer.client_x, pointer.client_y), (200.0, 150.0));

        assert_eq!(TouchEvent::default().first_touch(), None);
    }

    #[test]
    fn undo_chord_accepts_ctrl_and_meta() {
        let ctrl_z = KeyEvent {
            key: 'z',
            modifiers: KeyModifiers {
                ctrl: true,
                meta: false,
            },
        };
        let cmd_shift_z = KeyEvent {
            key: 'Z',
            modifiers: KeyModifiers {
                ctrl: false,
                meta: true,
            },
        };
        assert!(undo_shortcut(false, ctrl_z));
        assert!(undo_shortcut(false, cmd_shift_z));
    }

    #[test]
    fn undo_chord_requires_a_modifier() {
        let bare_z = KeyEvent {
            key: 'z',
            modifiers: KeyModifiers::default(),
        };
        assert!(!undo_shortcut(false, bare_z));
    }

    #[test]
    fn undo_chord_is_ignored_while_text_input_has_focus() {
        let ctrl_z = KeyEvent {
            key: 'z',
            modifiers: KeyModifiers {
                ctrl: true,
                meta: false,
            },
        };
        assert!(!undo_shortcut(true, ctrl_z));
    }
}
