use std::path::Path;

use rust_xlsxwriter::{Table, Workbook};

use crate::chirpnet::species::error::Result;
use crate::chirpnet::species::io::atomic::write_atomic;
use crate::chirpnet::species::model::{COMMON_NAME_COLUMN, SCIENTIFIC_NAME_COLUMN, SpeciesRecord};

/// Name of the single worksheet in an exported species list.
pub const SPECIES_SHEET: &str = "Species";

/// Writes the records to a one-sheet workbook at `path`, with the same header
/// row as the CSV export.
pub fn write_species_workbook(path: &Path, records: &[SpeciesRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SPECIES_SHEET)?;

    worksheet.write_string(0, 0, COMMON_NAME_COLUMN)?;
    worksheet.write_string(0, 1, SCIENTIFIC_NAME_COLUMN)?;

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        worksheet.write_string(row, 0, &record.common_name)?;
        worksheet.write_string(row, 1, &record.scientific_name)?;
    }

    // Excel tables need at least one data row.
    if !records.is_empty() {
        let mut table = Table::new();
        table.set_autofilter(true);
        worksheet.add_table(0, 0, records.len() as u32, 1, &table)?;
    }

    let buffer = workbook.save_to_buffer()?;
    write_atomic(path, &buffer)
}
