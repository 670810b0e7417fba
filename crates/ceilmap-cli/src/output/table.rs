use ceilmap_core::tabulate::{MatrixView, Row, RAW_COLUMNS};

/// Format raw rows as an aligned plain-text table.
pub fn format_rows(rows: &[Row]) -> String {
    let body: Vec<Vec<&str>> = rows.iter().map(|r| r.cells().to_vec()).collect();
    let mut out = String::from("=== Raw Data ===\n\n");
    out.push_str(&format_grid(&RAW_COLUMNS, &body));
    out
}

/// Format the pivoted matrix view. Missing cells print as "-".
pub fn format_matrix(view: &MatrixView) -> String {
    let header = view.header();
    let body: Vec<Vec<&str>> = view
        .records
        .iter()
        .map(|record| {
            let mut line = vec![
                record.key.source_file.as_str(),
                record.key.drawing_title.as_str(),
                record.key.apartment_type.as_str(),
            ];
            line.extend(
                view.rooms
                    .iter()
                    .map(|room| record.heights.get(room).map(|h| h.as_str()).unwrap_or("-")),
            );
            line
        })
        .collect();

    let mut out = String::from("=== Matrix View ===\n\n");
    out.push_str(&format_grid(&header, &body));
    out
}

fn format_grid(header: &[&str], body: &[Vec<&str>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for line in body {
        for (i, cell) in line.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(header, &widths));
    let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&format!("  {}\n", "-".repeat(total)));
    for line in body {
        out.push_str(&format_line(line, &widths));
    }
    out
}

fn format_line(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect();
    format!("  {}\n", padded.join("  ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ceilmap_core::tabulate::pivot;

    fn row(file: &str, room: &str, height: &str) -> Row {
        Row {
            drawing_title: "FLOOR PLAN".into(),
            apartment_type: "2 BED TYPE A".into(),
            room: room.into(),
            ceiling_height: height.into(),
            source_file: file.into(),
        }
    }

    #[test]
    fn test_format_rows_aligns_columns() {
        let rows = vec![
            row("a.pdf", "MASTER BEDROOM", "+2700"),
            row("a.pdf", "BATH", "N/A"),
        ];
        let out = format_rows(&rows);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "=== Raw Data ===");
        assert!(lines[2].starts_with("  Drawing Title  Apartment Type  Room"));
        let col = lines[2].find("Ceiling Height").unwrap();
        assert_eq!(lines[4].find("+2700"), Some(col));
        assert_eq!(lines[5].find("N/A"), Some(col));
    }

    #[test]
    fn test_format_matrix_marks_missing_cells() {
        let rows = vec![row("a.pdf", "KITCHEN", "+2700"), row("b.pdf", "BATH", "2400mm")];
        let out = format_matrix(&pivot(&rows));
        let a_line = out.lines().find(|l| l.contains("a.pdf")).unwrap();
        assert!(a_line.contains('-'));
        assert!(a_line.contains("+2700"));
    }
}
