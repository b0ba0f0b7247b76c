mod error;
mod fonts;
pub mod input;
mod model;
mod pdf;
mod symbol;

pub use error::{EncodeFailure, Error};
pub use fonts::Font;
pub use input::InputOptions;
pub use model::{Column, Config, LabelSizing, PageSize, Table};
pub use pdf::{
    Canvas, CellFootprint, CellSlot, GridCursor, PdfCanvas, SectionSummary, draw_header,
    paginate_section, place_cell, render,
};
pub use symbol::{SymbolImage, SymbolOptions, SymbolRenderer};

use std::path::Path;
use std::time::Instant;

/// Render `table` to PDF bytes: one section per column, continuation pages
/// as needed. Nothing is returned unless every cell encoded.
pub fn generate_pdf(table: &Table, config: &Config) -> Result<Vec<u8>, Error> {
    let canvas =
        PdfCanvas::new(config.page_width, config.page_height).with_title(config.title.clone());
    pdf::render(table, config, canvas)
}

pub fn convert_csv_to_pdf(
    input: &Path,
    output: &Path,
    input_options: &InputOptions,
    config: &Config,
) -> Result<(), Error> {
    let t0 = Instant::now();

    let table = input::parse(input, input_options)?;
    let t_parse = t0.elapsed();

    write_pdf(&table, output, config, t0, t_parse)
}

pub fn convert_csv_bytes_to_pdf(
    input: &[u8],
    output: &Path,
    input_options: &InputOptions,
    config: &Config,
) -> Result<(), Error> {
    let t0 = Instant::now();

    let table = input::parse_bytes(input, input_options)?;
    let t_parse = t0.elapsed();

    write_pdf(&table, output, config, t0, t_parse)
}

fn write_pdf(
    table: &Table,
    output: &Path,
    config: &Config,
    t0: Instant,
    t_parse: std::time::Duration,
) -> Result<(), Error> {
    let bytes = generate_pdf(table, config)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: parse={:.1}ms, render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_parse.as_secs_f64() * 1000.0,
        (t_render - t_parse).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}
