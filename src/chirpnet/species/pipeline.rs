use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::chirpnet::species::clean::clean_table;
use crate::chirpnet::species::error::Result;
use crate::chirpnet::species::io::{csv_read, csv_write, excel_read, excel_write};
use crate::chirpnet::species::model::DEFAULT_HEADER_ROWS;

/// Serialisation used for the cleaned list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Xlsx,
}

/// Picks the output format from the file extension, defaulting to CSV.
pub fn detect_format(path: &Path) -> OutputFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("xlsx") => OutputFormat::Xlsx,
        _ => OutputFormat::Csv,
    }
}

/// Parameters of a single cleaning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanRequest {
    pub workbook: PathBuf,
    pub sheet: String,
    pub output: PathBuf,
    pub header_rows: usize,
    pub format: OutputFormat,
}

impl CleanRequest {
    pub fn new(
        workbook: impl Into<PathBuf>,
        sheet: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        let output = output.into();
        let format = detect_format(&output);
        Self {
            workbook: workbook.into(),
            sheet: sheet.into(),
            output,
            header_rows: DEFAULT_HEADER_ROWS,
            format,
        }
    }

    pub fn with_header_rows(mut self, header_rows: usize) -> Self {
        self.header_rows = header_rows;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    pub record_count: usize,
    pub output: PathBuf,
    pub format: OutputFormat,
}

/// Loads the workbook sheet, keeps the two species columns sorted by common
/// name, and persists the list. Nothing is written when any step fails.
#[instrument(
    level = "info",
    skip_all,
    fields(
        input = %request.workbook.display(),
        sheet = %request.sheet,
        output = %request.output.display()
    )
)]
pub fn clean_species_list(request: &CleanRequest) -> Result<CleanSummary> {
    let table = excel_read::read_sheet(&request.workbook, &request.sheet, request.header_rows)?;
    info!(row_count = table.rows.len(), "read rows from workbook");

    let records = clean_table(&table)?;
    debug!(record_count = records.len(), "species list cleaned");

    match request.format {
        OutputFormat::Csv => csv_write::write_csv(&request.output, &records)?,
        OutputFormat::Xlsx => excel_write::write_species_workbook(&request.output, &records)?,
    }
    info!(record_count = records.len(), format = ?request.format, "species list written");

    Ok(CleanSummary {
        record_count: records.len(),
        output: request.output.clone(),
        format: request.format,
    })
}

/// Reads the common names from a cleaned list, keeping at most `limit`.
#[instrument(level = "info", skip_all, fields(input = %path.display(), ?limit))]
pub fn species_names(path: &Path, limit: Option<usize>) -> Result<Vec<String>> {
    let mut names = csv_read::read_common_names(path)?;
    info!(species_count = names.len(), "read species list");
    if let Some(limit) = limit {
        names.truncate(limit);
    }
    Ok(names)
}
