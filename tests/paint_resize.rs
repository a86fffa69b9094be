use retropaint::paint::model::{Color, BACKGROUND};
use retropaint::paint::resize::ResizeCoordinator;
use retropaint::paint::surface::PaintSurface;

const INK: Color = Color::rgba(0, 0, 0, 255);

fn ink_block(surface: &mut PaintSurface, x0: u32, y0: u32, x1: u32, y1: u32) {
    for y in y0..y1 {
        for x in x0..x1 {
            surface.set_pixel(x as i32, y as i32, INK);
        }
    }
}

#[test]
fn shrink_and_grow_roundtrip_restores_original_scale() {
    let mut surface = PaintSurface::new(600, 400);
    ink_block(&mut surface, 200, 100, 400, 300);
    let original = surface.clone();

    let mut coordinator = ResizeCoordinator::new();
    coordinator.refresh_cache(&surface);

    // Shrink to half: content scales by 0.5 and stays centered.
    coordinator.apply_content(&mut surface, 300, 200);
    assert_eq!(surface.pixel(150, 100), INK);
    assert_eq!(surface.pixel(99, 49), BACKGROUND);
    assert_eq!(surface.pixel(201, 151), BACKGROUND);

    // Grow back: the high-resolution cache restores 1:1 content, not a
    // re-scale of the degraded 300x200 buffer.
    coordinator.apply_content(&mut surface, 600, 400);
    assert_eq!(surface.pixels(), original.pixels());
}

#[test]
fn without_cache_the_degraded_buffer_is_all_there_is() {
    let mut surface = PaintSurface::new(400, 400);
    ink_block(&mut surface, 100, 100, 300, 300);

    let mut coordinator = ResizeCoordinator::new();
    coordinator.apply_content(&mut surface, 200, 200);
    coordinator.apply_content(&mut surface, 400, 400);

    // The round trip went through the 200x200 buffer, so the restored block
    // is the shrunk copy centered at 1:1, not the original-resolution ink.
    assert_eq!(surface.pixel(200, 200), INK);
    assert_eq!(surface.pixel(120, 120), BACKGROUND);
}

#[test]
fn resize_events_route_through_container_insets() {
    let mut surface = PaintSurface::new(0, 0);
    let mut coordinator = ResizeCoordinator::new();

    coordinator.apply(&mut surface, 640, 480);
    assert_eq!(surface.width(), 640);
    assert_eq!(surface.height(), 480 - 40 - 22);
}

#[test]
fn failed_capture_leaves_a_blank_canvas_not_a_crash() {
    let mut surface = PaintSurface::new(0, 0);
    let mut coordinator = ResizeCoordinator::new();

    coordinator.apply_content(&mut surface, 64, 64);
    for y in 0..64 {
        for x in 0..64 {
            assert_eq!(surface.pixel(x, y), BACKGROUND);
        }
    }
}
