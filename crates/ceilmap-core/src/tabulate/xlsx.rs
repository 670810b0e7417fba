use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::CeilmapError;
use crate::tabulate::{pivot, Row, RAW_COLUMNS};

pub const RAW_SHEET: &str = "Raw Data";
pub const MATRIX_SHEET: &str = "Matrix View";

/// File name offered for the exported workbook.
pub const DEFAULT_FILE_NAME: &str = "Ceiling_Heights_Extracted.xlsx";

/// Serialize rows into a two-sheet workbook ("Raw Data" and "Matrix View").
pub fn write_workbook(rows: &[Row]) -> Result<Vec<u8>, CeilmapError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let raw = workbook.add_worksheet();
    raw.set_name(RAW_SHEET)?;
    write_header(raw, &RAW_COLUMNS, &bold)?;
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in row.cells().into_iter().enumerate() {
            raw.write_string(r, col as u16, value)?;
        }
    }

    let view = pivot(rows);
    let matrix = workbook.add_worksheet();
    matrix.set_name(MATRIX_SHEET)?;
    write_header(matrix, &view.header(), &bold)?;
    for (i, record) in view.records.iter().enumerate() {
        let r = (i + 1) as u32;
        matrix.write_string(r, 0, &record.key.source_file)?;
        matrix.write_string(r, 1, &record.key.drawing_title)?;
        matrix.write_string(r, 2, &record.key.apartment_type)?;
        for (j, room) in view.rooms.iter().enumerate() {
            // Rooms a document does not have stay blank.
            if let Some(height) = record.heights.get(room) {
                matrix.write_string(r, (j + 3) as u16, height)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_header(sheet: &mut Worksheet, names: &[&str], bold: &Format) -> Result<(), CeilmapError> {
    for (col, name) in names.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, bold)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Reader, Xlsx};
    use std::io::Cursor;

    fn row(file: &str, room: &str, height: &str) -> Row {
        Row {
            drawing_title: "FLOOR PLAN".into(),
            apartment_type: "2 BED TYPE A".into(),
            room: room.into(),
            ceiling_height: height.into(),
            source_file: file.into(),
        }
    }

    fn cell(range: &calamine::Range<Data>, pos: (u32, u32)) -> String {
        match range.get_value(pos) {
            Some(Data::String(s)) => s.clone(),
            Some(Data::Empty) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    #[test]
    fn test_workbook_has_raw_and_matrix_sheets() {
        let rows = vec![
            row("a.pdf", "KITCHEN", "+2700"),
            row("a.pdf", "BEDROOM 1", "2400mm"),
            row("b.pdf", "KITCHEN", "N/A"),
        ];
        let bytes = write_workbook(&rows).unwrap();

        let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec![RAW_SHEET, MATRIX_SHEET]);

        let raw = workbook.worksheet_range(RAW_SHEET).unwrap();
        assert_eq!(cell(&raw, (0, 0)), "Drawing Title");
        assert_eq!(cell(&raw, (0, 4)), "Source File");
        assert_eq!(cell(&raw, (1, 2)), "KITCHEN");
        assert_eq!(cell(&raw, (1, 3)), "+2700");
        assert_eq!(cell(&raw, (3, 4)), "b.pdf");

        let matrix = workbook.worksheet_range(MATRIX_SHEET).unwrap();
        assert_eq!(cell(&matrix, (0, 3)), "BEDROOM 1");
        assert_eq!(cell(&matrix, (0, 4)), "KITCHEN");
        assert_eq!(cell(&matrix, (1, 0)), "a.pdf");
        assert_eq!(cell(&matrix, (1, 3)), "2400mm");
        assert_eq!(cell(&matrix, (1, 4)), "+2700");
        assert_eq!(cell(&matrix, (2, 0)), "b.pdf");
        assert_eq!(cell(&matrix, (2, 3)), "");
        assert_eq!(cell(&matrix, (2, 4)), "N/A");
    }
}
