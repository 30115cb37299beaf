//! Column-aligned Markdown table rendering.
//!
//! A [`LogicalTable`] is the normalized shape of an HTML table: one header
//! line per column and body cells holding `\n`-joined lines. Rendering pads
//! every column to its widest line (never narrower than the `---` separator)
//! and expands multi-line body rows into several aligned table lines.
//!
//! Widths are character counts. Wide or combining characters can misalign
//! the pipes in a monospace view; the table is still valid Markdown.

use crate::utils::max_line_chars;

/// Narrowest column, wide enough for the `---` separator.
pub const MIN_COLUMN_WIDTH: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogicalTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl LogicalTable {
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Widest of the header row and every body row.
    ///
    /// Rows shorter than this are rendered with empty trailing cells.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    /// Per-column width: the longest header or body line, at least
    /// [`MIN_COLUMN_WIDTH`].
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![MIN_COLUMN_WIDTH; self.column_count()];

        for (col, header) in self.headers.iter().enumerate() {
            widths[col] = widths[col].max(header_line(header).chars().count());
        }
        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                widths[col] = widths[col].max(max_line_chars(cell));
            }
        }

        widths
    }

    /// Render as a pipe table wrapped in blank lines.
    ///
    /// A table without columns renders as the empty string.
    ///
    /// # Examples
    /// ```
    /// # use kodegen_tools_pastedown::markdown_converter::LogicalTable;
    /// let table = LogicalTable::new(
    ///     vec!["A".into(), "BB".into()],
    ///     vec![vec!["1".into(), "22".into()]],
    /// );
    /// assert_eq!(
    ///     table.render(),
    ///     "\n\n| A   | BB  |\n| --- | --- |\n| 1   | 22  |\n\n"
    /// );
    /// ```
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        if widths.is_empty() {
            return String::new();
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        let header: Vec<&str> = (0..widths.len())
            .map(|col| self.headers.get(col).map_or("", |h| h.as_str()))
            .collect();
        let header: Vec<String> = header.iter().map(|h| header_line(h)).collect();
        lines.push(format_line(header.iter().map(String::as_str), &widths));

        let separator: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        lines.push(format_line(separator.iter().map(String::as_str), &widths));

        for row in &self.rows {
            let cells: Vec<Vec<&str>> = (0..widths.len())
                .map(|col| row.get(col).map_or(vec![""], |c| c.split('\n').collect()))
                .collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);

            for line_idx in 0..height {
                let visual = cells
                    .iter()
                    .map(|lines| lines.get(line_idx).copied().unwrap_or(""));
                lines.push(format_line(visual, &widths));
            }
        }

        format!("\n\n{}\n\n", lines.join("\n"))
    }
}

/// Headers render on one line.
fn header_line(header: &str) -> String {
    header.split('\n').collect::<Vec<_>>().join(" ")
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    format!("| {} |", padded.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> LogicalTable {
        LogicalTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_minimum_width_is_three() {
        let rendered = table(&["A", "BB"], &[&["1", "22"]]).render();
        assert_eq!(rendered, "\n\n| A   | BB  |\n| --- | --- |\n| 1   | 22  |\n\n");
    }

    #[test]
    fn test_width_follows_longest_line() {
        let t = table(&["Name", "Qty"], &[&["Widgets", "4"], &["Nuts", "12000"]]);
        assert_eq!(t.column_widths(), vec![7, 5]);
        assert_eq!(
            t.render(),
            "\n\n| Name    | Qty   |\n\
             | ------- | ----- |\n\
             | Widgets | 4     |\n\
             | Nuts    | 12000 |\n\n"
        );
    }

    #[test]
    fn test_multi_line_cells_expand_into_visual_rows() {
        let t = table(&["Step", "Notes"], &[&["1", "first line\nsecond"], &["2", "done"]]);
        assert_eq!(
            t.render(),
            "\n\n| Step | Notes      |\n\
             | ---- | ---------- |\n\
             | 1    | first line |\n\
             |      | second     |\n\
             | 2    | done       |\n\n"
        );
    }

    #[test]
    fn test_short_rows_are_padded() {
        let t = table(&["a", "b", "c"], &[&["1"]]);
        assert_eq!(
            t.render(),
            "\n\n| a   | b   | c   |\n| --- | --- | --- |\n| 1   |     |     |\n\n"
        );
    }

    #[test]
    fn test_long_rows_widen_the_header() {
        let t = table(&["a"], &[&["1", "2"]]);
        assert_eq!(t.column_count(), 2);
        assert!(t.render().contains("| a   |     |"));
    }

    #[test]
    fn test_multi_line_header_is_flattened() {
        let t = table(&["Unit\nprice"], &[]);
        assert_eq!(t.render(), "\n\n| Unit price |\n| ---------- |\n\n");
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        assert_eq!(LogicalTable::default().render(), "");
    }

    #[test]
    fn test_widths_count_chars_not_bytes() {
        let t = table(&["ünï"], &[&["çødé"]]);
        assert_eq!(t.column_widths(), vec![4]);
    }
}
