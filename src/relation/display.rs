//! Plain-text rendering of relations.
//!
//! ```text
//! Table: Student_projected
//! name  | age
//! ------+----
//! John  | 18
//! Alice | 18
//! ```

use super::Relation;
use std::fmt;

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Table: {} (Empty)", self.name);
        }

        // Columns come from the first row. Cells missing from later rows
        // render blank.
        let header = self.header();
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                header
                    .iter()
                    .map(|column| row.get(column).map(ToString::to_string).unwrap_or_default())
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|column| column.chars().count()).collect();
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        writeln!(f, "Table: {}", self.name)?;
        writeln!(f, "{}", render_line(header.iter().copied(), &widths))?;
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", separator.join("-+-"))?;
        for row in &cells {
            writeln!(f, "{}", render_line(row.iter().map(String::as_str), &widths))?;
        }

        Ok(())
    }
}

fn render_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, width)| format!("{:<width$}", value, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
}
