pub mod applet;
pub mod export;
pub mod history;
pub mod input;
pub mod model;
pub mod resize;
pub mod settings;
pub mod settings_store;
pub mod status;
pub mod stroke;
pub mod surface;

pub use applet::PaintApplet;
pub use history::{SnapshotHistory, HISTORY_CAPACITY};
pub use input::{EventDisposition, KeyEvent, KeyModifiers, PaintCommand, PointerEvent, TouchEvent};
pub use model::{Brush, Color, Tool};
pub use resize::ResizeCoordinator;
pub use stroke::StrokeGesture;
pub use surface::{PaintSurface, Snapshot};
