use serde::{Deserialize, Serialize};

/// Header of the column holding the English species name.
pub const COMMON_NAME_COLUMN: &str = "Common Name";
/// Header of the column holding the binomial species name.
pub const SCIENTIFIC_NAME_COLUMN: &str = "Scientific Name";
/// Number of title/clarification rows that precede the header row in the
/// Red List workbook.
pub const DEFAULT_HEADER_ROWS: usize = 2;

/// One entry of the cleaned species list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    #[serde(rename = "Common Name")]
    pub common_name: String,
    #[serde(rename = "Scientific Name")]
    pub scientific_name: String,
}

impl SpeciesRecord {
    pub fn new(common_name: impl Into<String>, scientific_name: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            scientific_name: scientific_name.into(),
        }
    }
}

/// A worksheet loaded into memory with its title rows already removed.
///
/// Every row holds exactly `columns.len()` cells; short rows are padded with
/// empty strings when the sheet is read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetTable {
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Returns the index of the first column whose header equals `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}
