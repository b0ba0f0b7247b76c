mod canvas;
mod grid;
mod layout;

pub use canvas::{Canvas, PdfCanvas};
pub use grid::{CellSlot, GridCursor, SectionSummary, paginate_section};
pub use layout::{CellFootprint, draw_header, place_cell};

use crate::error::Error;
use crate::model::{Config, Table};
use crate::symbol::SymbolRenderer;

/// Lay out every column of `table` onto `canvas` and seal it.
///
/// Each column after the first starts on a fresh page. If any cell fails to
/// encode, the error is returned and the canvas is dropped unfinished.
pub fn render<C: Canvas>(table: &Table, config: &Config, mut canvas: C) -> Result<C::Output, Error> {
    config.validate()?;
    let renderer = SymbolRenderer::new(config.symbol.clone());

    let mut pages = 0;
    for (col_idx, column) in table.columns.iter().enumerate() {
        if col_idx > 0 {
            canvas.new_page();
        }
        let summary = paginate_section(&mut canvas, config, &renderer, column)?;
        pages += summary.pages;
    }

    log::info!(
        "Laid out {} columns, {} cells, {} pages",
        table.columns.len(),
        table.cell_count(),
        pages.max(1),
    );
    canvas.finish()
}
