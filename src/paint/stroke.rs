use crate::paint::model::{Brush, Color};
use crate::paint::surface::PaintSurface;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;

/// Movement beyond this many pixels on either axis switches from straight
/// segments to quadratic smoothing; tiny movements stay linear to avoid
/// curve artifacts.
const SMOOTHING_THRESHOLD: f32 = 2.0;

/// Widths at or above this use the precomputed circular row mask.
const BRUSH_MASK_MIN_WIDTH: u32 = 4;

/// One freehand gesture from press to release. Rasterizes incrementally as
/// the pointer moves; `end` draws nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeGesture {
    brush: Brush,
    /// Last raw pointer position delivered by the host.
    prev: (f32, f32),
    /// Where the rendered stroke currently ends. Trails `prev` by half a
    /// step while smoothing, which is what rounds the joints.
    anchor: (f32, f32),
}

impl StrokeGesture {
    /// Stamps a filled dot of the brush width at `point` and starts the
    /// gesture there.
    pub fn begin(surface: &mut PaintSurface, point: (f32, f32), brush: Brush) -> Self {
        draw_brush(surface, round_point(point), brush.paint_color(), brush.width);
        Self {
            brush,
            prev: point,
            anchor: point,
        }
    }

    pub fn extend(&mut self, surface: &mut PaintSurface, point: (f32, f32)) {
        let color = self.brush.paint_color();
        let width = self.brush.width;
        let dx = (point.0 - self.prev.0).abs();
        let dy = (point.1 - self.prev.1).abs();

        if dx > SMOOTHING_THRESHOLD || dy > SMOOTHING_THRESHOLD {
            let mid = midpoint(self.prev, point);
            draw_quadratic(surface, self.anchor, self.prev, mid, color, width);
            self.anchor = mid;
        } else {
            draw_segment(
                surface,
                round_point(self.prev),
                round_point(point),
                color,
                width,
            );
            self.anchor = point;
        }
        self.prev = point;
    }

    pub fn end(self) {}

    pub fn brush(&self) -> Brush {
        self.brush
    }
}

fn midpoint(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

fn round_point(point: (f32, f32)) -> (i32, i32) {
    (point.0.round() as i32, point.1.round() as i32)
}

/// Flatten a quadratic curve into brush-stamped segments. Sampling is one
/// step per pixel of control-polygon length, so consecutive samples stay
/// adjacent and the stroke has no gaps.
pub fn draw_quadratic(
    surface: &mut PaintSurface,
    start: (f32, f32),
    control: (f32, f32),
    end: (f32, f32),
    color: Color,
    width: u32,
) {
    let length = distance(start, control) + distance(control, end);
    let steps = length.ceil().max(1.0) as u32;
    let mut last: Option<(i32, i32)> = None;
    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        let inv = 1.0 - t;
        let x = inv * inv * start.0 + 2.0 * inv * t * control.0 + t * t * end.0;
        let y = inv * inv * start.1 + 2.0 * inv * t * control.1 + t * t * end.1;
        let point = (x.round() as i32, y.round() as i32);
        if last == Some(point) {
            continue;
        }
        match last {
            Some(prev) => draw_segment(surface, prev, point, color, width),
            None => draw_brush(surface, point, color, width),
        }
        last = Some(point);
    }
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// Bresenham walk stamping the brush at every step. Round caps and joins
/// fall out of the disc stamp.
pub fn draw_segment(
    surface: &mut PaintSurface,
    start: (i32, i32),
    end: (i32, i32),
    color: Color,
    width: u32,
) {
    let mut x0 = start.0;
    let mut y0 = start.1;
    let x1 = end.0;
    let y1 = end.1;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        draw_brush(surface, (x0, y0), color, width);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Filled disc stamp of the brush width centered at `center`.
pub fn draw_brush(surface: &mut PaintSurface, center: (i32, i32), color: Color, width: u32) {
    let width = width.max(1);
    if width >= BRUSH_MASK_MIN_WIDTH {
        draw_brush_mask(surface, center, color, width);
        return;
    }
    let radius = (width.saturating_sub(1) / 2) as i32;
    for y in (center.1 - radius)..=(center.1 + radius) {
        for x in (center.0 - radius)..=(center.0 + radius) {
            let dx = x - center.0;
            let dy = y - center.1;
            if dx * dx + dy * dy <= radius * radius {
                surface.set_pixel(x, y, color);
            }
        }
    }
}

#[derive(Clone)]
struct BrushMask {
    rows: Vec<BrushMaskRow>,
}

#[derive(Clone)]
struct BrushMaskRow {
    dy: i32,
    min_dx: i32,
    max_dx: i32,
}

static BRUSH_MASK_CACHE: Lazy<Mutex<HashMap<u32, BrushMask>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn get_brush_mask(width: u32) -> BrushMask {
    if let Ok(guard) = BRUSH_MASK_CACHE.lock() {
        if let Some(mask) = guard.get(&width) {
            return mask.clone();
        }
    }

    let radius = (width.saturating_sub(1) / 2) as i32;
    let mut rows = Vec::with_capacity((radius * 2 + 1) as usize);
    for dy in -radius..=radius {
        let mut max_dx = radius;
        while max_dx >= 0 && max_dx * max_dx + dy * dy > radius * radius {
            max_dx -= 1;
        }
        if max_dx >= 0 {
            rows.push(BrushMaskRow {
                dy,
                min_dx: -max_dx,
                max_dx,
            });
        }
    }
    let mask = BrushMask { rows };
    if let Ok(mut guard) = BRUSH_MASK_CACHE.lock() {
        let _ = guard.insert(width, mask.clone());
    }
    mask
}

fn draw_brush_mask(surface: &mut PaintSurface, center: (i32, i32), color: Color, width: u32) {
    let mask = get_brush_mask(width);
    for row in &mask.rows {
        let y = center.1 + row.dy;
        for x in (center.0 + row.min_dx)..=(center.0 + row.max_dx) {
            surface.set_pixel(x, y, color);
        }
    }
}
