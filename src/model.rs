use crate::error::Error;
use crate::symbol::SymbolOptions;

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }
}

/// Named columns in input order. Names need not be unique.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Table { columns }
    }

    pub fn cell_count(&self) -> usize {
        self.columns.iter().map(|c| c.values.len()).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSize {
    Letter,
    A4,
}

impl PageSize {
    /// (width, height) in points.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.276, 841.89),
        }
    }
}

/// Step function from label length (in chars) to font size.
#[derive(Clone, Debug)]
pub struct LabelSizing {
    /// `(max_len, font_size)` pairs, ascending by `max_len`.
    pub steps: Vec<(usize, f32)>,
    pub fallback: f32,
}

impl Default for LabelSizing {
    fn default() -> Self {
        LabelSizing {
            steps: vec![(15, 12.0), (25, 10.0), (35, 8.0)],
            fallback: 6.0,
        }
    }
}

impl LabelSizing {
    pub fn size_for(&self, value: &str) -> f32 {
        let len = value.chars().count();
        self.steps
            .iter()
            .find(|&&(max_len, _)| len <= max_len)
            .map(|&(_, size)| size)
            .unwrap_or(self.fallback)
    }
}

/// Page geometry and symbol settings for one generation run.
/// All lengths are PDF points, y measured upward from the page bottom.
#[derive(Clone, Debug)]
pub struct Config {
    pub page_width: f32,
    pub page_height: f32,
    pub left_margin: f32,
    pub row_height: f32,
    pub columns_per_row: usize,
    /// A row whose start y falls below this triggers a page break.
    pub bottom_margin: f32,
    pub grid_start_y: f32,
    pub header_y: f32,
    pub header_font_size: f32,
    /// Display width every symbol is scaled to.
    pub barcode_width: f32,
    /// Distance from the bottom of the symbol down to the label baseline.
    pub label_gap: f32,
    pub label_sizing: LabelSizing,
    pub symbol: SymbolOptions,
    pub title: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config::for_page_size(PageSize::Letter)
    }
}

impl Config {
    pub fn for_page_size(size: PageSize) -> Self {
        let (page_width, page_height) = size.dimensions();
        Config {
            page_width,
            page_height,
            left_margin: 40.0,
            row_height: 150.0,
            columns_per_row: 3,
            bottom_margin: 120.0,
            grid_start_y: page_height - 100.0,
            header_y: page_height - 80.0,
            header_font_size: 28.0,
            barcode_width: 160.0,
            label_gap: 12.0,
            label_sizing: LabelSizing::default(),
            symbol: SymbolOptions::default(),
            title: None,
        }
    }

    pub fn with_columns_per_row(mut self, columns_per_row: usize) -> Self {
        self.columns_per_row = columns_per_row;
        self
    }

    /// Horizontal distance between the left edges of adjacent grid columns.
    pub fn column_pitch(&self) -> f32 {
        (self.page_width - 2.0 * self.left_margin) / self.columns_per_row as f32
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.columns_per_row == 0 {
            return Err(Error::Config("columns_per_row must be at least 1".into()));
        }
        if self.page_width <= 0.0 || self.page_height <= 0.0 {
            return Err(Error::Config(format!(
                "page size must be positive, got {}x{}",
                self.page_width, self.page_height
            )));
        }
        if self.row_height <= 0.0 {
            return Err(Error::Config(format!(
                "row_height must be positive, got {}",
                self.row_height
            )));
        }
        if self.barcode_width <= 0.0 {
            return Err(Error::Config(format!(
                "barcode_width must be positive, got {}",
                self.barcode_width
            )));
        }
        // Otherwise every section would break before its first cell.
        if self.grid_start_y < self.bottom_margin {
            return Err(Error::Config(format!(
                "grid_start_y ({}) is below bottom_margin ({})",
                self.grid_start_y, self.bottom_margin
            )));
        }
        Ok(())
    }
}
