//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub min_width: usize,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: &str, min_width: usize) -> Self {
        Self {
            header: header.to_string(),
            min_width,
            right_align: false,
        }
    }

    pub fn right(header: &str, min_width: usize) -> Self {
        Self {
            header: header.to_string(),
            min_width,
            right_align: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| cell.chars().count())
                    .chain([col.header.chars().count(), col.min_width])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let cell = |text: &str, i: usize| -> String {
            let w = widths[i];
            if self.columns[i].right_align {
                format!("{:>w$} ", text)
            } else {
                format!("{:<w$} ", text)
            }
        };

        // Header
        for (i, col) in self.columns.iter().enumerate() {
            out.push_str(&cell(&col.header, i));
        }
        out.push('\n');
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for i in 0..self.columns.len() {
                let text = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&cell(text, i));
            }
            out.push('\n');
        }

        out
    }
}
