use std::cmp::Ordering;

use crate::chirpnet::species::error::{Result, SpeciesError};
use crate::chirpnet::species::model::{
    COMMON_NAME_COLUMN, SCIENTIFIC_NAME_COLUMN, SheetTable, SpeciesRecord,
};

/// Projects the loaded sheet onto the two species columns and orders the
/// result by common name.
pub fn clean_table(table: &SheetTable) -> Result<Vec<SpeciesRecord>> {
    let mut records = project(table)?;
    sort_by_common_name(&mut records);
    Ok(records)
}

/// Keeps only the `Common Name` and `Scientific Name` columns. Every row of
/// the table yields exactly one record.
pub fn project(table: &SheetTable) -> Result<Vec<SpeciesRecord>> {
    let common_idx = required_column(table, COMMON_NAME_COLUMN)?;
    let scientific_idx = required_column(table, SCIENTIFIC_NAME_COLUMN)?;

    let records = table
        .rows
        .iter()
        .map(|row| SpeciesRecord {
            common_name: row.get(common_idx).cloned().unwrap_or_default(),
            scientific_name: row.get(scientific_idx).cloned().unwrap_or_default(),
        })
        .collect();

    Ok(records)
}

/// Stable ascending sort on the common name. Records without a common name
/// are placed after all named ones, so the pairwise `a <= b` order holds
/// among non-empty names only.
pub fn sort_by_common_name(records: &mut [SpeciesRecord]) {
    records.sort_by(|lhs, rhs| compare_common_names(&lhs.common_name, &rhs.common_name));
}

fn compare_common_names(lhs: &str, rhs: &str) -> Ordering {
    match (lhs.is_empty(), rhs.is_empty()) {
        (false, false) => lhs.cmp(rhs),
        (lhs_empty, rhs_empty) => lhs_empty.cmp(&rhs_empty),
    }
}

fn required_column(table: &SheetTable, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| SpeciesError::MissingColumn(name.to_string()))
}
