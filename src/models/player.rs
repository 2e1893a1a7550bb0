//! Player save summary
//!
//! The fields of `Players/Local/Player.json` shown by the detail view.

/// Best-effort summary of an archived player save
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerSummary {
    /// In-save display name
    pub name: String,
    /// Player friend code
    pub code: i64,
    /// Gem currency balance
    pub gems: i64,
}

impl PlayerSummary {
    /// Extract a summary from a parsed save document.
    ///
    /// Missing or mistyped fields fall back to defaults; only a document that
    /// is not an object yields `None`.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            name: obj
                .get("Name")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            code: obj.get("Code").and_then(|v| v.as_i64()).unwrap_or_default(),
            gems: obj.get("Gems").and_then(|v| v.as_i64()).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_full_value() {
        let value = json!({"Name": "Tester", "Code": 123456789, "Gems": 3000});
        let summary = PlayerSummary::from_value(&value).unwrap();
        assert_eq!(summary.name, "Tester");
        assert_eq!(summary.code, 123456789);
        assert_eq!(summary.gems, 3000);
    }

    #[test]
    fn test_missing_fields_default() {
        let value = json!({"Name": "Tester"});
        let summary = PlayerSummary::from_value(&value).unwrap();
        assert_eq!(summary.name, "Tester");
        assert_eq!(summary.code, 0);
        assert_eq!(summary.gems, 0);
    }

    #[test]
    fn test_non_object_is_none() {
        assert!(PlayerSummary::from_value(&json!([1, 2, 3])).is_none());
    }
}
