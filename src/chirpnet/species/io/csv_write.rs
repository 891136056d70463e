use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::chirpnet::species::error::Result;
use crate::chirpnet::species::io::atomic::write_atomic;
use crate::chirpnet::species::model::{COMMON_NAME_COLUMN, SCIENTIFIC_NAME_COLUMN, SpeciesRecord};

/// Serialises the records as comma separated text with a header row and `\n`
/// line endings.
pub fn write_species_csv<W: Write>(writer: W, records: &[SpeciesRecord]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    // Written explicitly so an empty list still carries its header.
    csv_writer.write_record([COMMON_NAME_COLUMN, SCIENTIFIC_NAME_COLUMN])?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the records to `path`, replacing any existing file only once the
/// whole list has been serialised.
pub fn write_csv(path: &Path, records: &[SpeciesRecord]) -> Result<()> {
    let mut buffer = Vec::new();
    write_species_csv(&mut buffer, records)?;
    write_atomic(path, &buffer)
}
