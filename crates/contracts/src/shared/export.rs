//! Table model for PDF export
//!
//! Rasterization happens in the browser; this module only shapes the data
//! (headers, rows, pages) so the export is testable without a DOM.

/// Record kinds that can be written as a PDF table
pub trait PdfExportable {
    /// Column headers
    fn headers() -> Vec<&'static str>;

    /// One cell per header
    fn to_pdf_row(&self) -> Vec<String>;
}

/// Maximum characters kept in one cell before truncation
pub const MAX_CELL_CHARS: usize = 40;

/// Rows per A4 portrait page at the default font size
pub const DEFAULT_ROWS_PER_PAGE: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct PdfTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PdfTable {
    pub fn build<T: PdfExportable>(title: &str, data: &[T]) -> Result<Self, String> {
        if data.is_empty() {
            return Err("No hay datos para exportar".to_string());
        }
        let headers: Vec<String> = T::headers().into_iter().map(str::to_string).collect();
        let rows = data
            .iter()
            .map(|item| item.to_pdf_row().iter().map(|c| truncate_cell(c)).collect())
            .collect();
        Ok(Self {
            title: title.to_string(),
            headers,
            rows,
        })
    }

    /// Split rows into pages of at most `rows_per_page` rows (at least one per page)
    pub fn pages(&self, rows_per_page: usize) -> Vec<&[Vec<String>]> {
        self.rows.chunks(rows_per_page.max(1)).collect()
    }
}

/// Cut a cell to [`MAX_CELL_CHARS`] characters, ending with "..." when cut
pub fn truncate_cell(cell: &str) -> String {
    let cell = cell.trim();
    if cell.chars().count() <= MAX_CELL_CHARS {
        return cell.to_string();
    }
    let kept: String = cell.chars().take(MAX_CELL_CHARS - 3).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, u32);

    impl PdfExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Nombre", "Valor"]
        }

        fn to_pdf_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_build_and_paginate() {
        let data: Vec<Row> = (0..7).map(|n| Row("fila", n)).collect();
        let table = PdfTable::build("Listado", &data).unwrap();

        assert_eq!(table.headers, vec!["Nombre", "Valor"]);
        let pages = table.pages(3);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].len(), 1);
        assert_eq!(pages[2][0], vec!["fila", "6"]);
    }

    #[test]
    fn test_empty_data_is_rejected() {
        assert!(PdfTable::build::<Row>("Listado", &[]).is_err());
    }

    #[test]
    fn test_truncate_cell_counts_chars() {
        let long = "ñ".repeat(50);
        let cut = truncate_cell(&long);
        assert_eq!(cut.chars().count(), MAX_CELL_CHARS);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_cell(" corto "), "corto");
    }
}
