//! CSV to [`Table`]: the header row names the columns, every later record
//! contributes one value to each column. Values are kept verbatim.

use std::io::Read;
use std::path::Path;

use crate::error::Error;
use crate::model::{Column, Table};

#[derive(Clone, Debug)]
pub struct InputOptions {
    pub delimiter: u8,
}

impl Default for InputOptions {
    fn default() -> Self {
        InputOptions { delimiter: b',' }
    }
}

pub fn parse(path: &Path, options: &InputOptions) -> Result<Table, Error> {
    let file = std::fs::File::open(path)?;
    read_table(file, options)
}

pub fn parse_bytes(data: &[u8], options: &InputOptions) -> Result<Table, Error> {
    read_table(data, options)
}

pub fn read_table<R: Read>(reader: R, options: &InputOptions) -> Result<Table, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut records = reader.records();
    let Some(header) = records.next().transpose()? else {
        log::warn!("CSV input has no header row");
        return Ok(Table::default());
    };

    let mut columns: Vec<Column> = header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let name = if i == 0 {
                name.trim_start_matches('\u{feff}')
            } else {
                name
            };
            Column::new(name, Vec::new())
        })
        .collect();
    let expected = columns.len();

    let mut padded = 0usize;
    for record in records {
        let record = record?;
        if record.len() > expected {
            return Err(Error::RaggedRecord {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected,
                found: record.len(),
            });
        }
        if record.len() < expected {
            padded += 1;
        }
        for (i, column) in columns.iter_mut().enumerate() {
            column.values.push(record.get(i).unwrap_or("").to_string());
        }
    }

    if padded > 0 {
        log::warn!("{padded} record(s) shorter than the header; missing cells are empty");
    }
    log::debug!(
        "read {} columns x {} rows",
        columns.len(),
        columns.first().map(|c| c.values.len()).unwrap_or(0)
    );
    Ok(Table::new(columns))
}
