/// Kind of a conditional attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Numeric,
    Nominal,
}

/// A single cell: missing flag, parsed numeric value (meaningful only on a
/// numeric attribute after `Dataset::finalize`) and the original token.
#[derive(Debug, Clone, Default)]
pub struct AttributeValue {
    pub missing: bool,
    pub num: f64,
    pub raw: String,
}

impl AttributeValue {
    /// Builds a cell from a raw token. The token is trimmed; an empty token,
    /// the configured missing token and the literal `?` all mark the cell
    /// missing.
    pub fn from_token(token: &str, missing_token: &str) -> AttributeValue {
        let raw = token.trim().to_string();
        let missing = raw.is_empty() || raw == missing_token || raw == "?";
        AttributeValue {
            missing,
            num: 0.0,
            raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_token_trims_and_keeps_raw() {
        let v = AttributeValue::from_token("  sunny ", "?");
        assert!(!v.missing);
        assert_eq!(v.raw, "sunny");
    }

    #[test]
    fn question_mark_is_always_missing() {
        let v = AttributeValue::from_token("?", "NA");
        assert!(v.missing);
    }

    #[test]
    fn configured_token_and_empty_are_missing() {
        assert!(AttributeValue::from_token("NA", "NA").missing);
        assert!(AttributeValue::from_token("   ", "NA").missing);
        assert!(!AttributeValue::from_token("na", "NA").missing);
    }
}
