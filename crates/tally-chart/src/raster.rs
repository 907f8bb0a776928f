//! PNG output through resvg.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::{ChartError, ChartResult};

/// Rasterize `markup` and write it to `path` as an RGBA PNG.
pub(crate) fn write_png(markup: &str, width: u32, height: u32, path: &Path) -> ChartResult<()> {
    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = Tree::from_str(markup, &options)
        .map_err(|e| ChartError::Render(format!("SVG parse failed: {e}")))?;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| ChartError::Render(format!("cannot allocate {width}x{height} pixmap")))?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    let file = File::create(path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    writer
        .write_image_data(pixmap.data())
        .map_err(|e| ChartError::Render(e.to_string()))?;
    writer.finish().map_err(|e| ChartError::Render(e.to_string()))?;

    Ok(())
}
