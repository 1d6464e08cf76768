use std::fs;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use crate::error::{PlanError, Result};
use crate::models::GroceryItem;

pub const CSV_HEADER: [&str; 2] = ["Item", "Times used (approx)"];

/// Serialize a grocery list as CSV text.
///
/// Every field is double-quoted with embedded quotes doubled. Rows are separated by
/// `\n` with no trailing newline.
pub fn grocery_to_csv(items: &[GroceryItem]) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;
    for item in items {
        let count = item.count.to_string();
        wtr.write_record([item.item.as_str(), count.as_str()])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| PlanError::Io(e.into_error()))?;
    let mut text =
        String::from_utf8(bytes).map_err(|e| PlanError::InvalidInput(e.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Write a grocery list to a CSV file.
pub fn write_grocery_csv<P: AsRef<Path>>(path: P, items: &[GroceryItem]) -> Result<()> {
    let csv = grocery_to_csv(items)?;
    fs::write(path.as_ref(), csv)?;
    info!(path = %path.as_ref().display(), items = items.len(), "wrote grocery csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_header_only() {
        let csv = grocery_to_csv(&[]).unwrap();
        assert_eq!(csv, "\"Item\",\"Times used (approx)\"");
    }

    #[test]
    fn test_quotes_are_doubled() {
        let csv = grocery_to_csv(&[GroceryItem::new("Greek \"Yogurt\"", 3)]).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "\"Greek \"\"Yogurt\"\"\",\"3\"");
    }

    #[test]
    fn test_commas_stay_in_field() {
        let csv = grocery_to_csv(&[GroceryItem::new("salt, pepper", 1)]).unwrap();
        assert!(csv.ends_with("\"salt, pepper\",\"1\""));
    }

    #[test]
    fn test_write_grocery_csv() {
        let file = NamedTempFile::new().unwrap();
        let items = vec![GroceryItem::new("olive oil", 14), GroceryItem::new("banana", 7)];
        write_grocery_csv(file.path(), &items).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, grocery_to_csv(&items).unwrap());
        assert_eq!(written.lines().count(), 3);
    }
}
