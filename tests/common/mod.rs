#![allow(dead_code)]

use barsheet::{Canvas, Column, Config, Error, Font, SymbolImage, Table};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        pixel_width: u32,
        pixel_height: u32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        centered: bool,
    },
    NewPage,
}

/// Canvas that records every call instead of drawing.
#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl Canvas for RecordingCanvas {
    type Output = Vec<DrawOp>;

    fn draw_image(&mut self, image: &SymbolImage, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::Image {
            x,
            y,
            width,
            height,
            pixel_width: image.width(),
            pixel_height: image.height(),
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: Font, size: f32, centered: bool) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            font,
            size,
            centered,
        });
    }

    fn new_page(&mut self) {
        self.ops.push(DrawOp::NewPage);
    }

    fn finish(self) -> Result<Vec<DrawOp>, Error> {
        Ok(self.ops)
    }
}

pub fn table(columns: Vec<(&str, Vec<&str>)>) -> Table {
    Table::new(
        columns
            .into_iter()
            .map(|(name, values)| {
                Column::new(name, values.into_iter().map(String::from).collect())
            })
            .collect(),
    )
}

/// `n` distinct encodable values: V0, V1, ...
pub fn values(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("V{i}")).collect()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn render_ops(table: &Table, config: &Config) -> Result<Vec<DrawOp>, Error> {
    init_logging();
    barsheet::render(table, config, RecordingCanvas::default())
}

/// Split recorded ops at page boundaries.
pub fn pages(ops: &[DrawOp]) -> Vec<Vec<DrawOp>> {
    ops.split(|op| *op == DrawOp::NewPage)
        .map(|p| p.to_vec())
        .collect()
}

pub fn headers(page: &[DrawOp]) -> Vec<String> {
    page.iter()
        .filter_map(|op| match op {
            DrawOp::Text {
                text,
                font: Font::Bold,
                ..
            } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

pub fn labels(page: &[DrawOp]) -> Vec<String> {
    page.iter()
        .filter_map(|op| match op {
            DrawOp::Text {
                text,
                font: Font::Regular,
                ..
            } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

/// Bottom-left corners of the images, plus their height, in draw order.
pub fn images(page: &[DrawOp]) -> Vec<(f32, f32, f32)> {
    page.iter()
        .filter_map(|op| match op {
            DrawOp::Image { x, y, height, .. } => Some((*x, *y, *height)),
            _ => None,
        })
        .collect()
}

/// Config with round grid numbers: rows start at 600, 450, 300, 150; row 4 breaks.
pub fn compact_config(columns_per_row: usize) -> Config {
    let mut config = Config::default().with_columns_per_row(columns_per_row);
    config.grid_start_y = 600.0;
    config.row_height = 150.0;
    config.bottom_margin = 120.0;
    config
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
