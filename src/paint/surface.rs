use crate::paint::model::{Color, BACKGROUND};
use anyhow::{anyhow, Result};

/// The single mutable drawing target: a 2-D grid of RGBA pixels with explicit
/// dimensions in device pixels. One surface exists per open paint window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Immutable full copy of surface pixel data, tagged with the surface
/// dimensions at capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl PaintSurface {
    /// A freshly opened surface is filled with the canvas background.
    pub fn new(width: u32, height: u32) -> Self {
        let mut surface = Self {
            width,
            height,
            pixels: vec![0u8; (width as usize) * (height as usize) * 4],
        };
        surface.fill(BACKGROUND);
        surface
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn fill(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color.to_rgba_array());
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let idx = ((y * self.width + x) * 4) as usize;
        Color::from_rgba_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Out-of-bounds writes are silently dropped; strokes may run off the
    /// canvas edge.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[idx] = color.r;
        self.pixels[idx + 1] = color.g;
        self.pixels[idx + 2] = color.b;
        self.pixels[idx + 3] = color.a;
    }

    /// Changing dimensions discards the pixel grid, so the surface comes back
    /// filled with the background. Callers that want the old content must
    /// capture it first.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0u8; (width as usize) * (height as usize) * 4];
        self.fill(BACKGROUND);
    }

    /// Full-frame pixel read-back. Fails when the surface has no area yet
    /// (the host has not sized it), which callers treat as a recoverable
    /// condition.
    pub fn read_back(&self) -> Result<Snapshot> {
        if self.width == 0 || self.height == 0 {
            return Err(anyhow!(
                "surface has no readable pixels at {}x{}",
                self.width,
                self.height
            ));
        }
        Ok(Snapshot {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        })
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.width == self.width && snapshot.height == self.height {
            self.pixels.copy_from_slice(&snapshot.pixels);
            return;
        }
        self.fill(BACKGROUND);
        let fit = fit_transform(snapshot.width, snapshot.height, self.width, self.height);
        self.blit_scaled(snapshot, fit);
    }

    /// Nearest-neighbor draw of a snapshot at the given fit transform.
    /// Smoothing is never applied so rescaled pixels keep crisp edges.
    pub fn blit_scaled(&mut self, src: &Snapshot, fit: FitTransform) {
        if fit.scale <= 0.0 || src.width == 0 || src.height == 0 {
            return;
        }
        let scaled_w = (src.width as f32 * fit.scale).round() as i32;
        let scaled_h = (src.height as f32 * fit.scale).round() as i32;
        for dy in 0..scaled_h {
            let sy = (((dy as f32 + 0.5) / fit.scale) as u32).min(src.height - 1);
            for dx in 0..scaled_w {
                let sx = (((dx as f32 + 0.5) / fit.scale) as u32).min(src.width - 1);
                let idx = ((sy * src.width + sx) * 4) as usize;
                self.set_pixel(
                    fit.offset_x + dx,
                    fit.offset_y + dy,
                    Color::from_rgba_array([
                        src.pixels[idx],
                        src.pixels[idx + 1],
                        src.pixels[idx + 2],
                        src.pixels[idx + 3],
                    ]),
                );
            }
        }
    }
}

/// Placement of a source raster inside a destination surface: shrink-to-fit
/// (never upscale past 1:1) and center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub scale: f32,
    pub offset_x: i32,
    pub offset_y: i32,
}

pub fn fit_transform(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> FitTransform {
    if src_w == 0 || src_h == 0 {
        return FitTransform {
            scale: 0.0,
            offset_x: 0,
            offset_y: 0,
        };
    }
    let scale_x = dst_w as f32 / src_w as f32;
    let scale_y = dst_h as f32 / src_h as f32;
    let scale = scale_x.min(scale_y).min(1.0);
    let scaled_w = src_w as f32 * scale;
    let scaled_h = src_h as f32 * scale;
    FitTransform {
        scale,
        offset_x: ((dst_w as f32 - scaled_w) / 2.0) as i32,
        offset_y: ((dst_h as f32 - scaled_h) / 2.0) as i32,
    }
}
