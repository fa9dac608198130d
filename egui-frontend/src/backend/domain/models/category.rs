use serde::{Deserialize, Serialize};
use shared::{CategoryKind, CategorySnapshot};

/// Domain model for a single budget line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCategory {
    pub name: String,
    pub amount: f64,
    pub kind: CategoryKind,
}

impl DomainCategory {
    pub fn new(name: impl Into<String>, amount: f64, kind: CategoryKind) -> Self {
        Self {
            name: name.into(),
            amount,
            kind,
        }
    }

    pub fn to_snapshot(&self) -> CategorySnapshot {
        CategorySnapshot {
            name: self.name.clone(),
            amount: self.amount,
            kind: self.kind,
        }
    }
}

/// Parse the raw text of an amount field.
///
/// Surrounding whitespace is ignored and a single `_` between two digits is
/// accepted as a grouping separator (`5_000_000`). Anything that does not
/// parse to a finite number is rejected.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let digits = strip_digit_separators(raw.trim())?;
    digits
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Remove `_` separators, or `None` if one is not flanked by digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    if !text.contains('_') {
        return Some(text.to_string());
    }

    let bytes = text.as_bytes();
    let mut stripped = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if ch != '_' {
            stripped.push(ch);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(stripped)
}
