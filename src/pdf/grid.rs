use crate::error::Error;
use crate::model::{Column, Config};
use crate::symbol::SymbolRenderer;

use super::canvas::Canvas;
use super::layout::{draw_header, place_cell};

/// Position assigned to one value of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSlot {
    /// Index of the value within its column.
    pub index: usize,
    /// Row on the current page, restarting at 0 after each break.
    pub row: usize,
    pub column: usize,
    pub x: f32,
    /// Row start; the symbol's bottom edge sits here.
    pub y: f32,
    /// The value opens a continuation page.
    pub page_break: bool,
}

/// Row bookkeeping for one section. The grid column is derived from the
/// value index, so only the row needs state.
pub struct GridCursor<'a> {
    config: &'a Config,
    row: usize,
}

impl<'a> GridCursor<'a> {
    pub fn new(config: &'a Config) -> Self {
        GridCursor { config, row: 0 }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Slot for value `index`. A row starting below the bottom margin resets
    /// the cursor and reports a page break; the value then goes first on the
    /// new page. Only the row start is checked, never the symbol height.
    pub fn slot(&mut self, index: usize) -> CellSlot {
        let cfg = self.config;
        let column = index % cfg.columns_per_row;
        let x = cfg.left_margin + column as f32 * cfg.column_pitch();
        let y = cfg.grid_start_y - self.row as f32 * cfg.row_height;

        if y < cfg.bottom_margin {
            self.row = 0;
            return CellSlot {
                index,
                row: 0,
                column: 0,
                x: cfg.left_margin,
                y: cfg.grid_start_y,
                page_break: true,
            };
        }

        CellSlot {
            index,
            row: self.row,
            column,
            x,
            y,
            page_break: false,
        }
    }

    /// Move to the next row once the last column of a row is filled.
    pub fn advance(&mut self, slot: &CellSlot) {
        if slot.column == self.config.columns_per_row - 1 {
            self.row += 1;
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionSummary {
    pub cells: usize,
    /// Physical pages the section spans, continuation pages included.
    pub pages: usize,
}

/// Lay out one column as a section: header, then every value in reading
/// order, breaking pages (and redrawing the header) when rows run out.
///
/// The first value that cannot be encoded aborts the section.
pub fn paginate_section<C: Canvas>(
    canvas: &mut C,
    config: &Config,
    renderer: &SymbolRenderer,
    column: &Column,
) -> Result<SectionSummary, Error> {
    draw_header(canvas, config, &column.name);
    let mut cursor = GridCursor::new(config);
    let mut summary = SectionSummary { cells: 0, pages: 1 };

    for (i, value) in column.values.iter().enumerate() {
        let slot = cursor.slot(i);
        if slot.page_break {
            log::debug!(
                "section {:?}: page full at value {i}, continuing on a new page",
                column.name
            );
            canvas.new_page();
            draw_header(canvas, config, &column.name);
            summary.pages += 1;
        }

        let symbol = renderer.render(value).map_err(|reason| Error::Encoding {
            value: value.clone(),
            column: column.name.clone(),
            row: i + 1,
            reason,
        })?;
        let footprint = place_cell(canvas, config, &symbol, slot.x, slot.y, value);
        log::trace!(
            "cell {i} ({}, {}) at ({:.1}, {:.1}) h={:.1} label={}pt",
            slot.row,
            slot.column,
            slot.x,
            slot.y,
            footprint.image_height,
            footprint.label_font_size,
        );

        cursor.advance(&slot);
        summary.cells += 1;
    }

    log::debug!(
        "section {:?}: {} cells on {} page(s)",
        column.name,
        summary.cells,
        summary.pages
    );
    Ok(summary)
}
