//! Code128 symbol rasterisation.
//!
//! The bar pattern comes from `barcoders`; turning it into pixels is done
//! here, and this stage never draws text. Labels are drawn separately by the
//! cell placer so their size can follow the value length.

use std::path::Path;

use barcoders::sym::code128::Code128;
use image::{GrayImage, Luma};

use crate::error::{EncodeFailure, Error};

/// Prefix selecting Code128 character set B (printable ASCII).
const CHARSET_B: char = '\u{0181}';

const BAR: Luma<u8> = Luma([0]);
const SPACE: Luma<u8> = Luma([255]);

/// Raster settings, in millimetres at `dpi`.
#[derive(Clone, Debug)]
pub struct SymbolOptions {
    pub module_width_mm: f32,
    pub module_height_mm: f32,
    /// White space left and right of the bars.
    pub quiet_zone_mm: f32,
    /// White space above and below the bars.
    pub vertical_margin_mm: f32,
    pub dpi: u32,
    /// Human-readable text inside the symbol. Never honoured: `SymbolRenderer::new`
    /// forces this off.
    pub write_text: bool,
}

impl Default for SymbolOptions {
    fn default() -> Self {
        SymbolOptions {
            module_width_mm: 0.2,
            module_height_mm: 18.0,
            quiet_zone_mm: 2.0,
            vertical_margin_mm: 1.0,
            dpi: 300,
            write_text: false,
        }
    }
}

fn mm_to_px(mm: f32, dpi: u32) -> u32 {
    ((mm * dpi as f32 / 25.4).round() as u32).max(1)
}

/// Bars-only raster for one cell value.
pub struct SymbolImage {
    pixels: GrayImage,
    modules: usize,
}

impl SymbolImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Number of Code128 modules in the bar pattern (quiet zones excluded).
    pub fn module_count(&self) -> usize {
        self.modules
    }

    pub fn pixels(&self) -> &GrayImage {
        &self.pixels
    }

    pub fn save_png(&self, path: &Path) -> Result<(), Error> {
        self.pixels
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(Error::Image)
    }
}

pub struct SymbolRenderer {
    options: SymbolOptions,
}

impl SymbolRenderer {
    pub fn new(mut options: SymbolOptions) -> Self {
        if options.write_text {
            log::warn!("embedded symbol text requested; labels are drawn separately, ignoring");
            options.write_text = false;
        }
        SymbolRenderer { options }
    }

    /// Always false.
    pub fn writes_text(&self) -> bool {
        self.options.write_text
    }

    pub fn options(&self) -> &SymbolOptions {
        &self.options
    }

    pub fn render(&self, value: &str) -> Result<SymbolImage, EncodeFailure> {
        if value.is_empty() {
            return Err(EncodeFailure::Empty);
        }
        // Checked here rather than left to barcoders, which would read the
        // charset-switch characters as control codes.
        if let Some(bad) = value.chars().find(|c| !(' '..='~').contains(c)) {
            return Err(EncodeFailure::UnsupportedChar(bad));
        }

        let code = Code128::new(format!("{CHARSET_B}{value}"))
            .map_err(|e| EncodeFailure::Rejected(format!("{e:?}")))?;
        let modules = code.encode();
        Ok(self.rasterize(&modules))
    }

    fn rasterize(&self, modules: &[u8]) -> SymbolImage {
        let o = &self.options;
        let module_w = mm_to_px(o.module_width_mm, o.dpi);
        let bar_h = mm_to_px(o.module_height_mm, o.dpi);
        let quiet = mm_to_px(o.quiet_zone_mm, o.dpi);
        let margin = mm_to_px(o.vertical_margin_mm, o.dpi);

        let width = 2 * quiet + modules.len() as u32 * module_w;
        let height = bar_h + 2 * margin;

        let pixels = GrayImage::from_fn(width, height, |x, y| {
            if y < margin || y >= margin + bar_h || x < quiet || x >= width - quiet {
                return SPACE;
            }
            let module = ((x - quiet) / module_w) as usize;
            if modules[module] == 1 { BAR } else { SPACE }
        });

        SymbolImage {
            pixels,
            modules: modules.len(),
        }
    }
}
