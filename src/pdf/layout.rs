use crate::fonts::Font;
use crate::model::Config;
use crate::symbol::SymbolImage;

use super::canvas::Canvas;

/// Where a cell's symbol and label ended up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellFootprint {
    /// Bottom-left corner of the drawn symbol.
    pub image_x: f32,
    pub image_y: f32,
    pub image_width: f32,
    pub image_height: f32,
    /// Center of the label baseline.
    pub label_x: f32,
    pub label_y: f32,
    pub label_font_size: f32,
}

/// Draw `symbol` scaled to the configured barcode width with its bottom edge
/// on `y`, then `label` centered below it.
///
/// The label is a separate text operation so its size can shrink with its
/// length while the bars keep a fixed width.
pub fn place_cell<C: Canvas>(
    canvas: &mut C,
    config: &Config,
    symbol: &SymbolImage,
    x: f32,
    y: f32,
    label: &str,
) -> CellFootprint {
    let image_width = config.barcode_width;
    let scale = image_width / symbol.width() as f32;
    let image_height = symbol.height() as f32 * scale;
    let image_y = y - image_height;

    canvas.draw_image(symbol, x, image_y, image_width, image_height);

    let label_font_size = config.label_sizing.size_for(label);
    let label_x = x + image_width / 2.0;
    let label_y = image_y - config.label_gap;
    canvas.draw_text(label, label_x, label_y, Font::Regular, label_font_size, true);

    CellFootprint {
        image_x: x,
        image_y,
        image_width,
        image_height,
        label_x,
        label_y,
        label_font_size,
    }
}

/// Section title, centered across the page at the header baseline.
pub fn draw_header<C: Canvas>(canvas: &mut C, config: &Config, title: &str) {
    canvas.draw_text(
        title,
        config.page_width / 2.0,
        config.header_y,
        Font::Bold,
        config.header_font_size,
        true,
    );
}
