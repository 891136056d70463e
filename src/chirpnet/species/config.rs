//! File based defaults for the `clean` command.
//!
//! The config is a JSON object that may share a file with the downloader
//! settings, so unrecognised keys are ignored:
//!
//! ```json
//! {
//!     "workbook_path": "resources/ERLoB2021_categories.xlsx",
//!     "sheet_name": "ERLoB2021",
//!     "output_path": "resources/species_list.csv",
//!     "header_rows": 2
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::chirpnet::species::error::{Result, SpeciesError};
use crate::chirpnet::species::model::DEFAULT_HEADER_ROWS;
use crate::chirpnet::species::pipeline::{CleanRequest, OutputFormat};

/// Settings for a cleaning run. Every field is optional so command line flags
/// and a config file can each supply part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    pub workbook_path: Option<PathBuf>,
    pub sheet_name: Option<String>,
    pub output_path: Option<PathBuf>,
    pub header_rows: Option<usize>,
}

impl CleanerConfig {
    /// Reads a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SpeciesError::FileNotFound(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Keeps the values set on `self` and takes the rest from `fallback`.
    pub fn or(self, fallback: CleanerConfig) -> Self {
        Self {
            workbook_path: self.workbook_path.or(fallback.workbook_path),
            sheet_name: self.sheet_name.or(fallback.sheet_name),
            output_path: self.output_path.or(fallback.output_path),
            header_rows: self.header_rows.or(fallback.header_rows),
        }
    }

    /// Builds a request, failing on the first required setting still unset.
    pub fn into_request(self, format: Option<OutputFormat>) -> Result<CleanRequest> {
        let workbook = self
            .workbook_path
            .ok_or(SpeciesError::MissingSetting("workbook_path"))?;
        let sheet = self
            .sheet_name
            .ok_or(SpeciesError::MissingSetting("sheet_name"))?;
        let output = self
            .output_path
            .ok_or(SpeciesError::MissingSetting("output_path"))?;

        let mut request = CleanRequest::new(workbook, sheet, output)
            .with_header_rows(self.header_rows.unwrap_or(DEFAULT_HEADER_ROWS));
        if let Some(format) = format {
            request = request.with_format(format);
        }
        Ok(request)
    }
}
