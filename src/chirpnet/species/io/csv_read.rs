use std::path::Path;

use crate::chirpnet::species::error::{Result, SpeciesError};
use crate::chirpnet::species::model::{COMMON_NAME_COLUMN, SCIENTIFIC_NAME_COLUMN, SpeciesRecord};

const REQUIRED_HEADERS: [&str; 2] = [COMMON_NAME_COLUMN, SCIENTIFIC_NAME_COLUMN];

/// Loads a cleaned species list, checking that both species columns are
/// present. Additional columns are ignored.
pub fn read_species_list(path: &Path) -> Result<Vec<SpeciesRecord>> {
    if !path.exists() {
        return Err(SpeciesError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    for required in REQUIRED_HEADERS {
        if !headers.iter().any(|header| header == required) {
            return Err(SpeciesError::MissingColumn(required.to_string()));
        }
    }

    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<SpeciesRecord>, csv::Error>>()?;
    Ok(records)
}

/// Common names in list order, as handed to the recording downloader.
pub fn read_common_names(path: &Path) -> Result<Vec<String>> {
    Ok(read_species_list(path)?
        .into_iter()
        .map(|record| record.common_name)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn loads_records_in_file_order() {
        let file = create_test_csv(
            "Common Name,Scientific Name\nAlbatross,Diomedea exulans\nRobin,Erithacus rubecula",
        );

        let records = read_species_list(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], SpeciesRecord::new("Albatross", "Diomedea exulans"));
        assert_eq!(records[1].scientific_name, "Erithacus rubecula");
    }

    #[test]
    fn tolerates_extra_columns() {
        let file = create_test_csv("Scientific Name,Status,Common Name\nPica pica,LC,Magpie");

        let names = read_common_names(file.path()).unwrap();

        assert_eq!(names, vec!["Magpie"]);
    }

    #[test]
    fn missing_header_is_reported() {
        let file = create_test_csv("Common Name\nRobin");

        let result = read_species_list(file.path());

        assert!(
            matches!(result, Err(SpeciesError::MissingColumn(column)) if column == "Scientific Name")
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let result = read_species_list(Path::new("/definitely/not/here.csv"));

        assert!(matches!(result, Err(SpeciesError::FileNotFound(_))));
    }
}
