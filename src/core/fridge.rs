use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Items expiring within this many days count as near-expiry
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 3;

#[derive(Error, Debug)]
pub enum FridgeError {
    #[error("Failed to read fridge contents: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse fridge contents: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A product currently available. Only the name takes part in matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FridgeItem {
    pub name: String,

    #[serde(default, alias = "expiry_date")]
    pub expiry_date: Option<NaiveDate>,
}

impl FridgeItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expiry_date: None,
        }
    }

    #[must_use]
    pub fn expiring_on(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }

    /// Days from `today` to the expiry date; negative once expired
    #[must_use]
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.expiry_date.map(|d| (d - today).num_days())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FridgeEntry {
    Name(String),
    Item(FridgeItem),
}

/// Parse a JSON array of product names and/or `{name, expiryDate}` objects.
///
/// Blank names are dropped.
///
/// # Errors
///
/// Returns [`FridgeError::ParseError`] if the text is not such an array.
pub fn parse_fridge_json(json: &str) -> Result<Vec<FridgeItem>, FridgeError> {
    let entries: Vec<FridgeEntry> = serde_json::from_str(json)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            FridgeEntry::Name(name) => FridgeItem::new(name),
            FridgeEntry::Item(item) => item,
        })
        .filter(|item| !item.name.trim().is_empty())
        .collect())
}

/// Load fridge contents from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_fridge_file(path: &Path) -> Result<Vec<FridgeItem>, FridgeError> {
    let content = std::fs::read_to_string(path)?;
    parse_fridge_json(&content)
}

/// Names of the items whose expiry date falls at most `window_days` after
/// `today`, past-due items included, in input order.
#[must_use]
pub fn near_expiry_names(items: &[FridgeItem], today: NaiveDate, window_days: i64) -> Vec<String> {
    items
        .iter()
        .filter(|item| {
            item.days_until_expiry(today)
                .is_some_and(|days| days <= window_days)
        })
        .map(|item| item.name.clone())
        .collect()
}

/// Names of all items, in input order
#[must_use]
pub fn item_names(items: &[FridgeItem]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_mixed_entries() {
        let items = parse_fridge_json(
            r#"["tomates", {"name": "yaourt", "expiryDate": "2024-05-03"}, "  ", {"name": "lait", "expiry_date": null}]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0], FridgeItem::new("tomates"));
        assert_eq!(items[1].expiry_date, Some(date("2024-05-03")));
        assert_eq!(items[2], FridgeItem::new("lait"));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_fridge_json(r#"{"name": "lait"}"#).is_err());
    }

    #[test]
    fn test_near_expiry_window() {
        let today = date("2024-05-01");
        let items = vec![
            FridgeItem::new("yaourt").expiring_on(date("2024-05-04")),
            FridgeItem::new("jambon").expiring_on(date("2024-05-05")),
            FridgeItem::new("creme").expiring_on(date("2024-04-28")),
            FridgeItem::new("riz"),
        ];

        assert_eq!(
            near_expiry_names(&items, today, DEFAULT_EXPIRY_WINDOW_DAYS),
            vec!["yaourt", "creme"]
        );
        assert_eq!(items[2].days_until_expiry(today), Some(-3));
        assert_eq!(items[3].days_until_expiry(today), None);
    }
}
