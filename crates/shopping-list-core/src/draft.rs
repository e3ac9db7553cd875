//! Item Draft
//!
//! Raw form input for a new item and the field-level checks that do not
//! depend on the rest of the list.

use crate::error::AddError;
use crate::MAX_NAME_CHARS;

/// Untrimmed text of the three input fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

/// Draft fields after trimming and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidDraft<'a> {
    pub name: &'a str,
    pub amount: u32,
    pub unit: &'a str,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }

    /// Reset all three fields to empty
    pub fn clear(&mut self) {
        self.name.clear();
        self.amount.clear();
        self.unit.clear();
    }

    /// Apply the required-field, amount and name-length rules, in that order
    pub(crate) fn validate(&self) -> Result<ValidDraft<'_>, AddError> {
        let name = self.name.trim();
        let amount = self.amount.trim();
        let unit = self.unit.trim();

        if name.is_empty() || amount.is_empty() || unit.is_empty() {
            return Err(AddError::MissingField);
        }

        let amount = parse_amount(amount)?;

        if name.chars().count() > MAX_NAME_CHARS {
            return Err(AddError::NameTooLong);
        }

        Ok(ValidDraft { name, amount, unit })
    }
}

/// Parse an amount, truncating any fraction toward zero
///
/// Rejects text that is not a finite number, and values whose integer part
/// is zero, negative, or does not fit in a `u32`.
pub fn parse_amount(text: &str) -> Result<u32, AddError> {
    let value: f64 = text.trim().parse().map_err(|_| AddError::InvalidAmount)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(AddError::InvalidAmount);
    }

    let whole = value.trunc();
    if whole < 1.0 || whole > u32::MAX as f64 {
        return Err(AddError::InvalidAmount);
    }
    Ok(whole as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("5"), Ok(5));
        assert_eq!(parse_amount("5.7"), Ok(5));
        assert_eq!(parse_amount("3.9"), Ok(3));
        assert_eq!(parse_amount(" 12 "), Ok(12));
        assert_eq!(parse_amount("1e2"), Ok(100));
    }

    #[test]
    fn test_parse_amount_rejects() {
        for text in ["0", "-3", "abc", "", "0.5", "NaN", "inf", "-0", "99999999999"] {
            assert_eq!(parse_amount(text), Err(AddError::InvalidAmount), "input {:?}", text);
        }
    }

    #[test]
    fn test_validate_trims() {
        let draft = ItemDraft::new("  Milk ", " 2 ", " liter  ");
        let valid = draft.validate().unwrap();
        assert_eq!(valid.name, "Milk");
        assert_eq!(valid.amount, 2);
        assert_eq!(valid.unit, "liter");
    }

    #[test]
    fn test_validate_order() {
        // Blank field wins over a bad amount and a long name
        let draft = ItemDraft::new("abcdefghijklmnopq", "abc", "   ");
        assert_eq!(draft.validate(), Err(AddError::MissingField));

        // Bad amount wins over a long name
        let draft = ItemDraft::new("abcdefghijklmnopq", "abc", "kg");
        assert_eq!(draft.validate(), Err(AddError::InvalidAmount));

        let draft = ItemDraft::new("abcdefghijklmnopq", "1", "kg");
        assert_eq!(draft.validate(), Err(AddError::NameTooLong));
    }

    #[test]
    fn test_name_length_boundary() {
        let draft = ItemDraft::new("a".repeat(15), "1", "pc");
        assert!(draft.validate().is_ok());

        let draft = ItemDraft::new("a".repeat(16), "1", "pc");
        assert_eq!(draft.validate(), Err(AddError::NameTooLong));

        // Surrounding whitespace does not count
        let draft = ItemDraft::new(format!("  {}  ", "a".repeat(15)), "1", "pc");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_name_length_counts_chars() {
        let draft = ItemDraft::new("é".repeat(15), "1", "pc");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_clear() {
        let mut draft = ItemDraft::new("Milk", "2", "liter");
        draft.clear();
        assert_eq!(draft, ItemDraft::default());
    }
}
