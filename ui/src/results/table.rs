use dioxus::prelude::*;

/// Rows of a rendered table. Tables with a header keep it as a fixed first
/// row; re-rendering only replaces the rows below it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableModel {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Table without a header (offset 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with one fixed header row (offset 1).
    pub fn with_header<S: Into<String>>(cells: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: cells.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn header_offset(&self) -> usize {
        usize::from(!self.header.is_empty())
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Header plus body rows, as a DOM table would count them.
    pub fn total_rows(&self) -> usize {
        self.header_offset() + self.rows.len()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn append_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Clear everything below the header, then append one row per record.
    pub fn render<R, S>(&mut self, records: impl IntoIterator<Item = R>)
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clear();
        for record in records {
            self.append_row(record);
        }
    }
}

#[component]
pub fn DataTable(id: String, table: TableModel) -> Element {
    rsx! {
        table { id: "{id}", class: "data-table",
            if !table.header().is_empty() {
                thead {
                    tr {
                        for cell in table.header().iter() {
                            th { "{cell}" }
                        }
                    }
                }
            }
            tbody {
                for (index, row) in table.rows().iter().enumerate() {
                    tr { key: "{index}",
                        for cell in row.iter() {
                            td { class: "data-table__cell", "{cell}" }
                        }
                    }
                }
            }
        }
    }
}
