use std::io;

use thiserror::Error;

/// Why a single cell value could not be turned into a barcode symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeFailure {
    #[error("value is empty")]
    Empty,

    #[error("unsupported character {0:?} (Code128 set B covers printable ASCII only)")]
    UnsupportedChar(char),

    #[error("symbology rejected value: {0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum Error {
    /// A cell value could not be encoded. Fatal for the whole document.
    /// `row` is the 1-based data row, header excluded.
    #[error("cannot encode {value:?} in column {column:?}, row {row}: {reason}")]
    Encoding {
        value: String,
        column: String,
        row: usize,
        reason: EncodeFailure,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("record on line {line} has {found} fields, header has {expected}")]
    RaggedRecord {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid configuration: {0}")]
    Config(String),
}
