use std::path::Path;

use calamine::{DataType, Range, Reader, Xlsx, open_workbook};
use tracing::{debug, warn};

use crate::chirpnet::species::error::{Result, SpeciesError};
use crate::chirpnet::species::model::{COMMON_NAME_COLUMN, SCIENTIFIC_NAME_COLUMN, SheetTable};

/// Loads `sheet` from the workbook at `path`.
///
/// The first `header_rows` rows of the sheet are title and clarification rows
/// and are discarded. The row that follows supplies the column names and every
/// later row becomes a data row, padded or truncated to the header width.
pub fn read_sheet(path: &Path, sheet: &str, header_rows: usize) -> Result<SheetTable> {
    if !path.exists() {
        return Err(SpeciesError::FileNotFound(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = read_required_sheet(&mut workbook, sheet)?;
    let table = range_to_table(sheet, &range, header_rows);

    debug!(
        sheet = %table.sheet_name,
        columns = ?table.columns,
        row_count = table.rows.len(),
        "sheet loaded"
    );
    Ok(table)
}

fn read_required_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<Range<DataType>> {
    let Some(range_result) = workbook.worksheet_range(name) else {
        return Err(SpeciesError::SheetNotFound {
            sheet: name.to_string(),
            available: workbook.sheet_names().to_vec(),
        });
    };
    let range = range_result.map_err(SpeciesError::from)?;
    Ok(range)
}

fn range_to_table(sheet_name: &str, range: &Range<DataType>, header_rows: usize) -> SheetTable {
    // The range begins at the first non-empty cell, so blank leading rows
    // have already been consumed from the skip budget.
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let skip = header_rows.saturating_sub(first_row);

    let mut rows = range.rows();
    for (offset, row) in rows.by_ref().take(skip).enumerate() {
        warn_on_header_like_row(first_row + offset, row);
    }

    let columns: Vec<String> = match rows.next() {
        Some(header) => header
            .iter()
            .map(|cell| cell_to_string(Some(cell)).trim().to_string())
            .collect(),
        None => Vec::new(),
    };

    let width = columns.len();
    let rows = rows
        .map(|row| (0..width).map(|idx| cell_to_string(row.get(idx))).collect())
        .collect();

    SheetTable {
        sheet_name: sheet_name.to_string(),
        columns,
        rows,
    }
}

fn warn_on_header_like_row(row_index: usize, row: &[DataType]) {
    let header_like = row.iter().any(|cell| {
        let value = cell_to_string(Some(cell));
        let value = value.trim();
        value == COMMON_NAME_COLUMN || value == SCIENTIFIC_NAME_COLUMN
    });
    if header_like {
        warn!(
            row = row_index + 1,
            "skipped row contains a species column header; the header offset may have shifted"
        );
    }
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (result, output)
    }

    fn range_from(cells: &[(u32, u32, &str)]) -> Range<DataType> {
        let max_row = cells.iter().map(|(row, _, _)| *row).max().unwrap_or(0);
        let max_col = cells.iter().map(|(_, col, _)| *col).max().unwrap_or(0);
        let min_row = cells.iter().map(|(row, _, _)| *row).min().unwrap_or(0);
        let mut range = Range::new((min_row, 0), (max_row, max_col));
        for (row, col, value) in cells {
            range.set_value((*row, *col), DataType::String(value.to_string()));
        }
        range
    }

    #[test]
    fn skips_title_rows_before_header() {
        let range = range_from(&[
            (0, 0, "European Red List of Birds"),
            (1, 0, "Categories as of 2021"),
            (2, 0, "Common Name"),
            (2, 1, "Scientific Name"),
            (3, 0, "Robin"),
            (3, 1, "Erithacus rubecula"),
        ]);

        let table = range_to_table("Birds", &range, 2);

        assert_eq!(table.columns, vec!["Common Name", "Scientific Name"]);
        assert_eq!(table.rows, vec![vec!["Robin", "Erithacus rubecula"]]);
    }

    #[test]
    fn blank_leading_rows_count_toward_skip() {
        let range = range_from(&[
            (1, 0, "Categories as of 2021"),
            (2, 0, "Common Name"),
            (2, 1, "Scientific Name"),
            (3, 0, "Robin"),
        ]);
        assert_eq!(range.start(), Some((1, 0)));

        let table = range_to_table("Birds", &range, 2);

        assert_eq!(table.columns, vec!["Common Name", "Scientific Name"]);
        assert_eq!(table.rows, vec![vec!["Robin".to_string(), String::new()]]);
    }

    #[test]
    fn header_cells_are_trimmed() {
        let range = range_from(&[(0, 0, " Common Name "), (0, 1, "Scientific Name\t")]);

        let table = range_to_table("Birds", &range, 0);

        assert_eq!(table.columns, vec!["Common Name", "Scientific Name"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn numeric_cells_render_as_text() {
        assert_eq!(cell_to_string(Some(&DataType::Float(3.0))), "3");
        assert_eq!(cell_to_string(Some(&DataType::Float(2.5))), "2.5");
        assert_eq!(cell_to_string(Some(&DataType::Int(7))), "7");
        assert_eq!(cell_to_string(Some(&DataType::Bool(true))), "true");
        assert_eq!(cell_to_string(Some(&DataType::Empty)), "");
        assert_eq!(cell_to_string(None), "");
    }

    #[test]
    fn header_inside_skipped_rows_is_warned_about() {
        let range = range_from(&[
            (0, 0, "European Red List of Birds"),
            (1, 0, "Common Name"),
            (1, 1, "Scientific Name"),
            (2, 0, "Robin"),
        ]);

        let (table, logs) = with_captured_logs(|| range_to_table("Birds", &range, 2));

        assert_eq!(table.columns, vec!["Robin", ""]);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("the header offset may have shifted"));
        assert!(logs.contains("row=2"));
    }

    #[test]
    fn title_rows_alone_do_not_warn() {
        let range = range_from(&[
            (0, 0, "European Red List of Birds"),
            (1, 0, "Categories as of 2021"),
            (2, 0, "Common Name"),
            (2, 1, "Scientific Name"),
        ]);

        let (_, logs) = with_captured_logs(|| range_to_table("Birds", &range, 2));

        assert!(!logs.contains("header offset"));
    }

    #[test]
    fn sheet_loaded_event_names_the_sheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("birds.xlsx");
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Birds").unwrap();
        worksheet.write_string(0, 0, "Common Name").unwrap();
        worksheet.write_string(0, 1, "Scientific Name").unwrap();
        worksheet.write_string(1, 0, "Robin").unwrap();
        worksheet.write_string(1, 1, "Erithacus rubecula").unwrap();
        workbook.save(&path).unwrap();

        let (table, logs) = with_captured_logs(|| read_sheet(&path, "Birds", 0));

        assert_eq!(table.unwrap().sheet_name, "Birds");
        assert!(logs.contains("sheet loaded"));
        assert!(logs.contains("sheet=Birds"));
        assert!(logs.contains("row_count=1"));
    }
}
