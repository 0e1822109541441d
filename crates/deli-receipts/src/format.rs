//! # Receipt Layout
//!
//! Wraps a rendered order summary in the store header and footer.
//!
//! ## Layout
//! ```text
//! ╔════════════════════════════════════════════════╗
//! ║          DELI-cious Sandwiches                 ║
//! ║          Official Receipt                      ║
//! ╚════════════════════════════════════════════════╝
//!
//! Date: 03/15/2024 02:30:52 PM
//!
//! Order Summary:
//! ...
//! Total: $13.00
//!
//! ══════════════════════════════════════════════════
//! Thank you for your order!
//! We hope you enjoy your meal!
//! ```

use chrono::NaiveDateTime;

/// Store name printed when none is configured.
pub const DEFAULT_STORE_NAME: &str = "DELI-cious Sandwiches";

/// Inner width of the header box.
const BOX_WIDTH: usize = 48;

/// Left margin inside the header box.
const BOX_INDENT: usize = 10;

/// Room left for text on a header line.
const BOX_TEXT_WIDTH: usize = BOX_WIDTH - BOX_INDENT;

const FOOTER_RULE_WIDTH: usize = 50;

/// `03/15/2024 02:30:52 PM`
const DATE_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Text printed in the receipt header box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptHeader {
    pub store_name: String,
}

impl ReceiptHeader {
    pub fn new(store_name: impl Into<String>) -> Self {
        ReceiptHeader {
            store_name: store_name.into(),
        }
    }
}

impl Default for ReceiptHeader {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_NAME)
    }
}

/// Builds the full receipt text for an already rendered order.
///
/// Store names longer than the box are cut to fit.
pub fn format_receipt(header: &ReceiptHeader, rendered_order: &str, timestamp: NaiveDateTime) -> String {
    let top = "═".repeat(BOX_WIDTH);
    let mut receipt = String::new();

    receipt.push_str(&format!("╔{}╗\n", top));
    receipt.push_str(&box_line(&header.store_name));
    receipt.push_str(&box_line("Official Receipt"));
    receipt.push_str(&format!("╚{}╝\n\n", top));

    receipt.push_str(&format!("Date: {}\n\n", timestamp.format(DATE_FORMAT)));

    receipt.push_str(rendered_order);

    receipt.push('\n');
    receipt.push_str(&"═".repeat(FOOTER_RULE_WIDTH));
    receipt.push('\n');
    receipt.push_str("Thank you for your order!\n");
    receipt.push_str("We hope you enjoy your meal!\n");
    receipt
}

fn box_line(text: &str) -> String {
    let text: String = text.chars().take(BOX_TEXT_WIDTH).collect();
    format!(
        "║{:indent$}{:<width$}║\n",
        "",
        text,
        indent = BOX_INDENT,
        width = BOX_TEXT_WIDTH
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn afternoon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 52)
            .unwrap()
    }

    #[test]
    fn test_default_header_matches_store_box() {
        let receipt = format_receipt(&ReceiptHeader::default(), "Order Summary:\n", afternoon());
        let lines: Vec<&str> = receipt.lines().collect();

        assert_eq!(lines[0], format!("╔{}╗", "═".repeat(48)));
        assert_eq!(lines[1], "║          DELI-cious Sandwiches                 ║");
        assert_eq!(lines[2], "║          Official Receipt                      ║");
        assert_eq!(lines[3], format!("╚{}╝", "═".repeat(48)));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Date: 03/15/2024 02:30:52 PM");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Order Summary:");
    }

    #[test]
    fn test_footer() {
        let receipt = format_receipt(&ReceiptHeader::default(), "Total: $1.50\n", afternoon());
        let expected_tail = format!(
            "Total: $1.50\n\n{}\nThank you for your order!\nWe hope you enjoy your meal!\n",
            "═".repeat(50)
        );
        assert!(receipt.ends_with(&expected_tail));
    }

    #[test]
    fn test_morning_timestamp_uses_am() {
        let morning = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();
        let receipt = format_receipt(&ReceiptHeader::default(), "", morning);
        assert!(receipt.contains("\nDate: 01/02/2024 09:05:07 AM\n"));
    }

    #[test]
    fn test_long_store_name_truncated() {
        let header = ReceiptHeader::new("X".repeat(60));
        let receipt = format_receipt(&header, "", afternoon());
        let name_line = receipt.lines().nth(1).unwrap();

        assert_eq!(name_line.chars().count(), 50);
        assert!(name_line.ends_with(&format!("{}║", "X".repeat(38))));
    }

    #[test]
    fn test_box_lines_share_width() {
        let header = ReceiptHeader::new("Café Übermaß");
        let receipt = format_receipt(&header, "", afternoon());
        let widths: Vec<usize> = receipt.lines().take(4).map(|l| l.chars().count()).collect();
        assert_eq!(widths, [50, 50, 50, 50]);
    }
}
