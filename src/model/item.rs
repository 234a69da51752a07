use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// All three fields are required in the persisted form — a record missing
/// one of them (or carrying a wrong-typed value) fails deserialization,
/// which the gateway treats as "no valid data" for the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Creation-time key, unique and stable for the item's lifetime
    pub key: i64,
    /// User-supplied label (immutable after creation)
    pub text: String,
    /// Completion flag
    pub complete: bool,
}

impl Item {
    /// Create a new, not-yet-complete item
    pub fn new(key: i64, text: String) -> Self {
        Item {
            key,
            text,
            complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_new_starts_incomplete() {
        let item = Item::new(42, "buy milk".into());
        assert_eq!(item.key, 42);
        assert_eq!(item.text, "buy milk");
        assert!(!item.complete);
    }

    #[test]
    fn serde_round_trip() {
        let item = Item {
            key: 1_700_000_000_000,
            text: "water plants".into(),
            complete: true,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn missing_field_is_rejected() {
        // `complete` absent — required fields have no serde defaults
        let result: Result<Item, _> =
            serde_json::from_str(r#"{"key": 1, "text": "stretch"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result: Result<Item, _> =
            serde_json::from_str(r#"{"key": "one", "text": "stretch", "complete": false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let item: Item = serde_json::from_str(
            r#"{"key": 1, "text": "stretch", "complete": false, "color": "red"}"#,
        )
        .unwrap();
        assert_eq!(item.key, 1);
    }
}
