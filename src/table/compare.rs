use std::cmp::Ordering;

use crate::collation;

/// Value a row exposes for one sortable column
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Derived number that is not stored on the row (score differential)
    Computed(i64),
    /// Stored field; `None` sorts as the empty string
    Field(Option<String>),
}

impl SortValue {
    pub fn text(value: impl Into<String>) -> Self {
        SortValue::Field(Some(value.into()))
    }

    pub fn number(value: impl ToString) -> Self {
        SortValue::Field(Some(value.to_string()))
    }

    pub fn optional(value: Option<impl ToString>) -> Self {
        SortValue::Field(value.map(|v| v.to_string()))
    }

    fn as_text(&self) -> String {
        match self {
            SortValue::Computed(n) => n.to_string(),
            SortValue::Field(value) => value.clone().unwrap_or_default(),
        }
    }
}

/// Numbers compare numerically when both sides parse, otherwise by collation
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    if let (SortValue::Computed(x), SortValue::Computed(y)) = (a, b) {
        return x.cmp(y);
    }

    let text_a = a.as_text();
    let text_b = b.as_text();

    match (parse_number(&text_a), parse_number(&text_b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => collation::compare(&text_a, &text_b),
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
