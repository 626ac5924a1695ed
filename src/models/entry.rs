use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shown in both result fields when no row matches the selector.
pub const NOT_FOUND: &str = "TIDAK DITEMUKAN";

/// One lookup request: who, which month, which Friday of that month.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    pub name: String,
    pub month: String,
    pub week_index: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub tanggungan: String,
    pub total_setahun: String,
}

impl LookupResult {
    pub fn not_found() -> Self {
        Self {
            tanggungan: NOT_FOUND.to_string(),
            total_setahun: NOT_FOUND.to_string(),
        }
    }

    pub fn is_found(&self) -> bool {
        *self != Self::not_found()
    }
}

/// A new payment row for the entry worksheet.
///
/// `to_row` fixes the column order expected by the destination sheet; that
/// order is unconfirmed against the real workbook, which is why submission
/// stays behind the entry feature flag.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRow {
    pub name: String,
    pub month: String,
    pub week_index: u8,
    pub amount_paid: Decimal,
    pub amount_infaq: Decimal,
    pub tanggungan: String,
    pub input_value: Decimal,
}

impl EntryRow {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.month.clone(),
            self.week_index.to_string(),
            self.amount_paid.to_string(),
            self.amount_infaq.to_string(),
            self.tanggungan.clone(),
            self.input_value.to_string(),
        ]
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use super::*;
    use rust_decimal::prelude::dec;

    pub(crate) fn mock_selector(name: &str) -> Selector {
        Selector {
            name: name.to_string(),
            month: "JANUARI".to_string(),
            week_index: 1,
        }
    }

    pub(crate) fn mock_entry() -> EntryRow {
        EntryRow {
            name: "SUMARNO".to_string(),
            month: "JANUARI".to_string(),
            week_index: 1,
            amount_paid: dec!(20000),
            amount_infaq: dec!(5000),
            tanggungan: "LUNAS".to_string(),
            input_value: dec!(25000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_sentinel_is_fixed() {
        let result = LookupResult::not_found();
        assert_eq!(result.tanggungan, "TIDAK DITEMUKAN");
        assert_eq!(result.total_setahun, "TIDAK DITEMUKAN");
        assert!(!result.is_found());
    }

    #[test]
    fn test_found_result_is_found() {
        let result = LookupResult {
            tanggungan: "LUNAS".to_string(),
            total_setahun: "Rp -20000".to_string(),
        };
        assert!(result.is_found());
    }

    #[test]
    fn test_entry_row_column_order() {
        let row = test_helpers::mock_entry().to_row();
        assert_eq!(
            row,
            vec!["SUMARNO", "JANUARI", "1", "20000", "5000", "LUNAS", "25000"]
        );
    }
}
