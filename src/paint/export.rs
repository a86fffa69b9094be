use crate::paint::surface::PaintSurface;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

pub const PAINT_EXPORT_SUBDIR: &str = "paint_exports";

pub fn exe_relative_output_folder_from_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(PAINT_EXPORT_SUBDIR))
}

pub fn ensure_output_folder() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("resolve current executable")?;
    let output = exe_relative_output_folder_from_path(&exe_path)?;
    fs::create_dir_all(&output)
        .with_context(|| format!("create paint output folder {}", output.display()))?;
    Ok(output)
}

pub fn timestamped_filename(now: chrono::DateTime<Local>) -> String {
    format!("paint_{}.png", now.format("%Y%m%d_%H%M%S"))
}

/// Encode the surface as a PNG at `path`. Zero-area surfaces have nothing to
/// encode and error out with context.
pub fn write_png(surface: &PaintSurface, path: &Path) -> Result<()> {
    let image = image::RgbaImage::from_raw(
        surface.width(),
        surface.height(),
        surface.pixels().to_vec(),
    )
    .ok_or_else(|| {
        anyhow!(
            "surface {}x{} has no encodable pixel data",
            surface.width(),
            surface.height()
        )
    })?;
    image
        .save(path)
        .with_context(|| format!("write canvas PNG {}", path.display()))
}

/// Export into `output_dir` under a timestamped name, returning the path
/// written.
pub fn export_surface(
    surface: &PaintSurface,
    output_dir: &Path,
    now: chrono::DateTime<Local>,
) -> Result<PathBuf> {
    let path = output_dir.join(timestamped_filename(now));
    write_png(surface, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::{exe_relative_output_folder_from_path, timestamped_filename, PAINT_EXPORT_SUBDIR};
    use chrono::{Local, TimeZone};
    use std::path::Path;

    #[test]
    fn output_folder_is_sibling_of_exe() {
        let exe = Path::new("/tmp/myapp/bin/retropaint");
        let output = exe_relative_output_folder_from_path(exe).expect("output path");
        assert_eq!(output, Path::new("/tmp/myapp/bin").join(PAINT_EXPORT_SUBDIR));
    }

    #[test]
    fn filename_carries_the_timestamp() {
        let dt = Local
            .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .expect("date time");
        assert_eq!(timestamped_filename(dt), "paint_20260102_030405.png");
    }
}
