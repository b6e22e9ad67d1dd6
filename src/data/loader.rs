use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::LoadError;

use super::model::Record;

const DATE_COLUMN: &str = "date";
const FILE_NAME_COLUMN: &str = "file_name";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How the data file is tokenised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    pub delimiter: u8,
    /// Strip surrounding whitespace from headers and fields.
    pub trim: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            trim: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every record from a semicolon-delimited CSV, in file order.
pub fn load(path: &Path) -> Result<Vec<Record>, LoadError> {
    load_with(path, &LoaderOptions::default())
}

/// Same as [`load`] with explicit tokenising options.
pub fn load_with(path: &Path, options: &LoaderOptions) -> Result<Vec<Record>, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let records = read_records(file, options)?;
    log::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse records from any reader. The first row must be the header.
pub fn read_records<R: io::Read>(
    source: R,
    options: &LoaderOptions,
) -> Result<Vec<Record>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| LoadError::Csv { row: 0, source })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let date_idx = column_index(&headers, DATE_COLUMN)?;
    let name_idx = column_index(&headers, FILE_NAME_COLUMN)?;

    let mut records = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let row = result.map_err(|source| LoadError::Csv { row: i + 1, source })?;

        // Short rows read as empty cells.
        let cell = |idx: usize| row.get(idx).unwrap_or("").to_string();

        let mut extra = BTreeMap::new();
        for (col_idx, column) in headers.iter().enumerate() {
            if column == DATE_COLUMN || column == FILE_NAME_COLUMN {
                continue;
            }
            extra.insert(column.clone(), cell(col_idx));
        }

        records.push(Record {
            date: cell(date_idx),
            file_name: cell(name_idx),
            extra,
        });
    }

    Ok(records)
}

/// Last column with this name; a repeated column overrides earlier ones.
fn column_index(headers: &[String], column: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .rposition(|h| h == column)
        .ok_or(LoadError::MissingColumn { column })
}
