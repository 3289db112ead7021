//! Report Loader Module
//! Reads the first sheet of an ODS/XLSX/XLS workbook, or a CSV file, into a raw cell grid.
//!
//! Spreadsheets go through calamine, delimited text through the Polars CSV
//! reader with every column kept as text. No value is interpreted here;
//! typing happens in the extractor.

use crate::config::SourceConfig;
use crate::error::ReportError;
use calamine::{open_workbook_from_rs, Data, Ods, Range, Reader, Xls, Xlsx};
use log::{debug, info, warn};
use polars::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// A single untyped cell as it appeared in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

static EMPTY_CELL: RawCell = RawCell::Empty;

type ByteSource<'a> = Cursor<&'a [u8]>;

impl RawCell {
    /// Text rendering of the cell; empty cells become an empty string.
    pub fn as_text(&self) -> String {
        match self {
            RawCell::Empty => String::new(),
            RawCell::Number(v) => v.to_string(),
            RawCell::Text(s) => s.clone(),
            RawCell::Bool(b) => b.to_string(),
        }
    }
}

impl From<&Data> for RawCell {
    fn from(value: &Data) -> Self {
        match value {
            Data::Empty => RawCell::Empty,
            Data::Int(v) => RawCell::Number(*v as f64),
            Data::Float(v) => RawCell::Number(*v),
            Data::Bool(v) => RawCell::Bool(*v),
            Data::String(s) => RawCell::Text(s.clone()),
            // Dates, durations and cell errors keep their display form
            other => RawCell::Text(other.to_string()),
        }
    }
}

/// Ordered rows of untyped cells.
///
/// The first physical line of the source is kept apart as `labels`; row 0 of
/// `rows` is the sub-header line that the extractor skips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    labels: Vec<String>,
    rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    pub fn new(labels: Vec<String>, rows: Vec<Vec<RawCell>>) -> Self {
        Self { labels, rows }
    }

    /// Split a physical grid into the label line and the remaining rows.
    pub fn from_grid(grid: Vec<Vec<RawCell>>) -> Self {
        let mut lines = grid.into_iter();
        let labels = lines
            .next()
            .map(|line| line.iter().map(RawCell::as_text).collect())
            .unwrap_or_default();
        Self {
            labels,
            rows: lines.collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rows(&self) -> &[Vec<RawCell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row (or label line) in the table.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.labels.len()))
            .max()
            .unwrap_or(0)
    }

    /// Cell at (row, col); anything outside the grid reads as empty.
    pub fn cell(&self, row: usize, col: usize) -> &RawCell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }
}

/// Supported source formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Ods,
    Xlsx,
    Xls,
    Csv,
}

impl SourceFormat {
    pub const SUPPORTED_EXTENSIONS: [&'static str; 4] = ["ods", "xlsx", "xls", "csv"];

    pub fn from_file_name(file_name: &str) -> Result<Self, ReportError> {
        let extension = Path::new(file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "ods" => Ok(SourceFormat::Ods),
            "xlsx" => Ok(SourceFormat::Xlsx),
            "xls" => Ok(SourceFormat::Xls),
            "csv" => Ok(SourceFormat::Csv),
            _ => Err(ReportError::UnsupportedFormat {
                file_name: file_name.to_string(),
            }),
        }
    }
}

/// A user-supplied file: its name (for format detection) and raw bytes.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file picked from disk.
    pub fn from_path(path: &Path) -> Result<Self, ReportError> {
        let bytes = fs::read(path).map_err(|e| ReportError::io(path, e))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { file_name, bytes })
    }
}

/// A parsed source together with a display name for the status line.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub source: String,
    pub table: RawTable,
}

/// Resolves the report source (upload or fallback) and parses it.
#[derive(Debug, Clone, Default)]
pub struct ReportLoader {
    config: SourceConfig,
}

impl ReportLoader {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Load an upload if given, otherwise the first fallback file that exists.
    pub fn load(&self, upload: Option<&Upload>) -> Result<LoadedTable, ReportError> {
        match upload {
            Some(upload) => {
                let format = SourceFormat::from_file_name(&upload.file_name)?;
                info!("Loading uploaded report '{}' as {:?}", upload.file_name, format);
                let table = Self::parse(format, &upload.bytes)?;
                Ok(LoadedTable {
                    source: upload.file_name.clone(),
                    table,
                })
            }
            None => self.load_fallback(),
        }
    }

    /// Try each configured fallback path in order.
    pub fn load_fallback(&self) -> Result<LoadedTable, ReportError> {
        for path in &self.config.fallback_paths {
            if !path.is_file() {
                debug!("Fallback report {} not found", path.display());
                continue;
            }

            let format = SourceFormat::from_file_name(&path.to_string_lossy())?;
            info!("Loading fallback report {} as {:?}", path.display(), format);
            let bytes = fs::read(path).map_err(|e| ReportError::io(path, e))?;
            let table = Self::parse(format, &bytes)?;
            return Ok(LoadedTable {
                source: path.display().to_string(),
                table,
            });
        }

        warn!("No report uploaded and no fallback file present");
        Err(ReportError::NoSourceAvailable {
            searched: self.config.fallback_paths.clone(),
        })
    }

    /// Parse raw bytes of a known format into a table (first sheet only).
    pub fn parse(format: SourceFormat, bytes: &[u8]) -> Result<RawTable, ReportError> {
        let grid = match format {
            SourceFormat::Ods => read_workbook::<Ods<ByteSource<'_>>>(bytes)?,
            SourceFormat::Xlsx => read_workbook::<Xlsx<ByteSource<'_>>>(bytes)?,
            SourceFormat::Xls => read_workbook::<Xls<ByteSource<'_>>>(bytes)?,
            SourceFormat::Csv => read_csv(bytes)?,
        };

        let table = RawTable::from_grid(grid);
        debug!(
            "Parsed {} rows x {} columns (plus label line)",
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }
}

fn read_workbook<'a, R>(bytes: &'a [u8]) -> Result<Vec<Vec<RawCell>>, ReportError>
where
    R: Reader<ByteSource<'a>>,
    calamine::Error: From<R::Error>,
{
    let mut workbook: R =
        open_workbook_from_rs(Cursor::new(bytes)).map_err(calamine::Error::from)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ReportError::EmptyWorkbook)?
        .map_err(calamine::Error::from)?;
    Ok(grid_from_range(&range))
}

/// Lay the used range out as a grid.
///
/// Columns keep their absolute sheet position (a range starting in column C
/// still puts C at index 2); leading blank rows are dropped.
fn grid_from_range(range: &Range<Data>) -> Vec<Vec<RawCell>> {
    let (Some((_, first_col)), Some((_, last_col))) = (range.start(), range.end()) else {
        return Vec::new();
    };
    let first_col = first_col as usize;
    let width = last_col as usize + 1;
    let (height, _) = range.get_size();

    let mut grid = vec![vec![RawCell::Empty; width]; height];
    for (row, col, value) in range.cells() {
        grid[row][first_col + col] = RawCell::from(value);
    }
    grid
}

fn read_csv(bytes: &[u8]) -> Result<Vec<Vec<RawCell>>, ReportError> {
    let width = widest_record(bytes);
    if width == 0 {
        return Ok(Vec::new());
    }

    // Every column as text, as wide as the widest line, so no cell is cut off
    let schema = Schema::from_iter(
        (1..=width).map(|i| Field::new(format!("column_{i}").into(), DataType::String)),
    );
    let df = CsvReadOptions::default()
        .with_has_header(false)
        .with_schema(Some(Arc::new(schema)))
        .with_ignore_errors(true)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    let height = df.height();
    let mut grid = vec![Vec::with_capacity(df.width()); height];

    for column in df.get_columns() {
        let values = column.as_materialized_series().str()?;
        for (row, value) in values.into_iter().enumerate() {
            let cell = match value {
                Some(text) => RawCell::Text(text.to_string()),
                None => RawCell::Empty,
            };
            grid[row].push(cell);
        }
    }

    Ok(grid)
}

/// Field count of the widest record, honouring quoted commas and newlines.
fn widest_record(bytes: &[u8]) -> usize {
    let mut widest = 0;
    let mut fields = 1;
    let mut in_record = false;
    let mut quoted = false;

    for &b in bytes {
        match b {
            b'"' => {
                quoted = !quoted;
                in_record = true;
            }
            b',' if !quoted => {
                fields += 1;
                in_record = true;
            }
            b'\n' if !quoted => {
                if in_record {
                    widest = widest.max(fields);
                }
                fields = 1;
                in_record = false;
            }
            b'\r' if !quoted => {}
            _ => in_record = true,
        }
    }
    if in_record {
        widest = widest.max(fields);
    }
    widest
}
