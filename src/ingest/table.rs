//! In-memory view of one uploaded sheet: a header row plus typed cells.
//!
//! Workbooks (xlsx, xlsm, xlsb, xls, ods) are read through calamine, CSV
//! exports through the csv crate. Only the first worksheet is used.

use crate::core::normalize::clean_text;
use crate::errors::{AppError, AppResult};
use crate::utils::path::extension_of;
use calamine::{Data, Reader, open_workbook_auto};
use std::fs;
use std::path::Path;

/// A cell as read from the source file.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Text rendering of the cell. Integral numbers lose their `.0`
    /// so that `12345.0` read from a numeric column joins with `"12345"`.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Bool(b) => Cell::Bool(*b),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("#ERROR: {e:?}")),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Role of the table in the report (used in error messages).
    pub label: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(label: &str, headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            label: label.to_string(),
            headers: headers.iter().map(|h| clean_text(h)).collect(),
            rows,
        }
    }

    /// Load the first sheet of a workbook or a CSV file, chosen by extension.
    pub fn from_path(path: &Path, label: &str) -> AppResult<Self> {
        let ext = extension_of(path);

        let table = match ext.as_str() {
            "csv" | "txt" => Self::from_csv_path(path, label)?,
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Self::from_workbook(path, label)?,
            _ => return Err(AppError::UnsupportedInput(path.display().to_string())),
        };

        tracing::debug!(
            table = label,
            path = %path.display(),
            columns = table.headers.len(),
            rows = table.rows.len(),
            "table loaded"
        );
        Ok(table)
    }

    pub fn from_workbook(path: &Path, label: &str) -> AppResult<Self> {
        let workbook_err = |e: calamine::Error| AppError::Workbook {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let mut workbook = open_workbook_auto(path).map_err(workbook_err)?;

        let first = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| AppError::EmptyWorkbook(path.display().to_string()))?;

        let range = workbook.worksheet_range(&first).map_err(workbook_err)?;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row.iter().map(|d| data_to_cell(d).as_text()).collect(),
            None => Vec::new(),
        };

        let data: Vec<Vec<Cell>> = rows
            .map(|row| row.iter().map(data_to_cell).collect::<Vec<_>>())
            .filter(|row: &Vec<Cell>| !row.iter().all(Cell::is_empty))
            .collect();

        Ok(Self::new(label, headers, data))
    }

    pub fn from_csv_path(path: &Path, label: &str) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_csv_str(&content, label)
    }

    /// Parse CSV text. French spreadsheet exports are often `;`-separated,
    /// so the delimiter is sniffed from the header line.
    pub fn from_csv_str(content: &str, label: &str) -> AppResult<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let delimiter = sniff_delimiter(content.lines().next().unwrap_or_default());

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row: Vec<Cell> = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect();

            if !row.iter().all(Cell::is_empty) {
                rows.push(row);
            }
        }

        Ok(Self::new(label, headers, rows))
    }

    /// Index of a column, matched on the cleaned header text.
    pub fn column(&self, name: &str) -> AppResult<usize> {
        let wanted = clean_text(name);
        self.headers
            .iter()
            .position(|h| *h == wanted)
            .ok_or_else(|| AppError::MissingColumn {
                table: self.label.clone(),
                column: name.to_string(),
            })
    }

    /// Cell at (row, col); short rows read as empty.
    pub fn cell<'a>(&self, row: &'a [Cell], col: usize) -> &'a Cell {
        const EMPTY: &Cell = &Cell::Empty;
        row.get(col).unwrap_or(EMPTY)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn sniff_delimiter(header_line: &str) -> u8 {
    let semicolons = header_line.matches(';').count();
    let commas = header_line.matches(',').count();
    let tabs = header_line.matches('\t').count();

    if tabs > semicolons && tabs > commas {
        b'\t'
    } else if semicolons > commas {
        b';'
    } else {
        b','
    }
}
