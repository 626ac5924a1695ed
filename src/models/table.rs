use crate::error::{AppError, Result};

/// Column order of the lookup worksheet: three selector columns followed by
/// the two output columns.
pub const LOOKUP_COLUMNS: [&str; 5] = ["NAMA", "BULAN", "JUMAT KE", "TANGGUNGAN", "TOTAL SETAHUN"];

/// Rows fetched from one worksheet, header row (if any) already stripped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetTable {
    rows: Vec<Vec<String>>,
}

impl SheetTable {
    pub fn new(mut rows: Vec<Vec<String>>) -> Self {
        if rows.first().is_some_and(|row| is_header_row(row)) {
            rows.remove(0);
        }
        Self { rows }
    }

    /// Parse a delimited-text export. The sheet may or may not carry a header
    /// row; when the first row spells out the known column names it is mapped
    /// and dropped, otherwise columns are taken positionally.
    pub fn from_csv(body: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(body.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| AppError::Zoho(format!("Failed to parse worksheet CSV: {}", e)))?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(Self::new(rows))
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether any row is wide enough to carry both selector and output
    /// columns. A table failing this check can only ever yield the not-found
    /// sentinel.
    pub fn has_lookup_columns(&self) -> bool {
        self.rows.iter().any(|row| row.len() >= LOOKUP_COLUMNS.len())
    }
}

fn is_header_row(row: &[String]) -> bool {
    row.len() >= LOOKUP_COLUMNS.len()
        && row
            .iter()
            .zip(LOOKUP_COLUMNS)
            .all(|(cell, name)| cell.trim().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_csv_without_header() {
        let body = "SUMARNO,JANUARI,1,LUNAS,Rp -20000\nSANTUN,JANUARI,1,Rp -87000,Rp 1500000\n";
        let table = SheetTable::from_csv(body).unwrap();

        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0][0], "SUMARNO");
        assert_eq!(table.rows()[1][4], "Rp 1500000");
        assert!(table.has_lookup_columns());
    }

    #[test]
    fn test_from_csv_strips_header_row() {
        let body = "NAMA,BULAN,JUMAT KE,TANGGUNGAN,TOTAL SETAHUN\nSUMARNO,JANUARI,1,LUNAS,Rp -20000\n";
        let table = SheetTable::from_csv(body).unwrap();

        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0][0], "SUMARNO");
    }

    #[test]
    fn test_from_csv_header_detection_is_case_insensitive() {
        let body = "nama,bulan,jumat ke,tanggungan,total setahun\nSUMARNO,JANUARI,1,LUNAS,Rp -20000\n";
        let table = SheetTable::from_csv(body).unwrap();

        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn test_from_csv_empty_body() {
        let table = SheetTable::from_csv("").unwrap();
        assert!(table.is_empty());
        assert!(!table.has_lookup_columns());
    }

    #[test]
    fn test_from_csv_tolerates_ragged_rows() {
        let body = "SUMARNO,JANUARI\nSANTUN,JANUARI,1,Rp -87000,Rp 1500000\n";
        let table = SheetTable::from_csv(body).unwrap();

        assert_eq!(table.rows().len(), 2);
        assert!(table.has_lookup_columns());
    }

    #[test]
    fn test_narrow_table_has_no_lookup_columns() {
        let table = SheetTable::new(vec![vec!["SUMARNO".to_string(), "JANUARI".to_string()]]);
        assert!(!table.has_lookup_columns());
    }

    #[test]
    fn test_data_row_resembling_names_is_kept() {
        // Only an exact match on all five column names counts as a header.
        let body = "NAMA,BULAN,JUMAT KE,LUNAS,Rp -20000\n";
        let table = SheetTable::from_csv(body).unwrap();
        assert_eq!(table.rows().len(), 1);
    }
}
