use crate::models::table::LOOKUP_COLUMNS;
use crate::models::{LookupResult, Selector, SheetTable};

/// Scan the table in order and return the first row whose selector columns
/// match, or the not-found sentinel. Absence of a match is a normal result,
/// never an error.
///
/// Both sides of each comparison are string-normalized (trimmed,
/// ASCII-case-insensitive); the numeric week index compares via its string
/// form to tolerate mixed typing in the source sheet.
pub fn lookup(table: &SheetTable, selector: &Selector) -> LookupResult {
    let week = selector.week_index.to_string();

    for row in table.rows() {
        // Rows too narrow to carry both output columns cannot match.
        if row.len() < LOOKUP_COLUMNS.len() {
            continue;
        }

        if cell_matches(&row[0], &selector.name)
            && cell_matches(&row[1], &selector.month)
            && cell_matches(&row[2], &week)
        {
            return LookupResult {
                tanggungan: row[3].trim().to_string(),
                total_setahun: row[4].trim().to_string(),
            };
        }
    }

    LookupResult::not_found()
}

fn cell_matches(cell: &str, wanted: &str) -> bool {
    cell.trim().eq_ignore_ascii_case(wanted.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> SheetTable {
        SheetTable::new(vec![
            row(&["SUMARNO", "JANUARI", "1", "LUNAS", "Rp -20000"]),
            row(&["SANTUN", "JANUARI", "1", "Rp -87000", "Rp 1500000"]),
        ])
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn selector(name: &str, month: &str, week_index: u8) -> Selector {
        Selector {
            name: name.to_string(),
            month: month.to_string(),
            week_index,
        }
    }

    #[test]
    fn test_match_extracts_output_columns() {
        let result = lookup(&sample_table(), &selector("SUMARNO", "JANUARI", 1));
        assert_eq!(result.tanggungan, "LUNAS");
        assert_eq!(result.total_setahun, "Rp -20000");
    }

    #[test]
    fn test_no_match_returns_sentinel() {
        let result = lookup(&sample_table(), &selector("UNKNOWN", "JANUARI", 1));
        assert_eq!(result, LookupResult::not_found());
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let table = sample_table();
        let sel = selector("SANTUN", "JANUARI", 1);
        assert_eq!(lookup(&table, &sel), lookup(&table, &sel));
    }

    #[test]
    fn test_first_match_wins() {
        let table = SheetTable::new(vec![
            row(&["SUMARNO", "JANUARI", "1", "FIRST", "Rp 1"]),
            row(&["SUMARNO", "JANUARI", "1", "SECOND", "Rp 2"]),
        ]);
        let result = lookup(&table, &selector("SUMARNO", "JANUARI", 1));
        assert_eq!(result.tanggungan, "FIRST");
    }

    #[test]
    fn test_comparison_ignores_case_and_whitespace() {
        let table = SheetTable::new(vec![row(&[
            " sumarno ",
            "Januari",
            " 1",
            "LUNAS",
            "Rp -20000",
        ])]);
        let result = lookup(&table, &selector("SUMARNO", "JANUARI", 1));
        assert_eq!(result.tanggungan, "LUNAS");
    }

    #[test]
    fn test_week_index_compares_as_string() {
        let table = SheetTable::new(vec![row(&["SUMARNO", "JANUARI", "3", "LUNAS", "Rp 0"])]);
        assert!(lookup(&table, &selector("SUMARNO", "JANUARI", 3)).is_found());
        assert!(!lookup(&table, &selector("SUMARNO", "JANUARI", 2)).is_found());
    }

    #[test]
    fn test_narrow_rows_are_skipped_not_fatal() {
        let table = SheetTable::new(vec![
            row(&["SUMARNO", "JANUARI", "1"]),
            row(&["SUMARNO", "JANUARI", "1", "LUNAS", "Rp -20000"]),
        ]);
        let result = lookup(&table, &selector("SUMARNO", "JANUARI", 1));
        assert_eq!(result.tanggungan, "LUNAS");
    }

    #[test]
    fn test_empty_table_returns_sentinel() {
        let result = lookup(&SheetTable::default(), &selector("SUMARNO", "JANUARI", 1));
        assert_eq!(result, LookupResult::not_found());
    }
}
