//! Constraint checks for raw form values.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A value plus the constraints it must satisfy. Unset constraints are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: Value,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(Value::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::new(Value::Number(value))
    }

    fn new(value: Value) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns true iff every configured constraint holds.
///
/// Length bounds only apply to text and numeric bounds only apply to numbers;
/// a bound that does not apply to the value's kind is ignored.
pub fn validate(input: &Validatable) -> bool {
    if input.required && input.value.to_string().trim().is_empty() {
        return false;
    }
    match &input.value {
        Value::Text(text) => {
            let len = text.chars().count();
            input.min_length.is_none_or(|min| len >= min)
                && input.max_length.is_none_or(|max| len <= max)
        }
        Value::Number(n) => {
            input.min.is_none_or(|min| *n >= min) && input.max.is_none_or(|max| *n <= max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_text() {
        assert!(!validate(&Validatable::text("").required()));
        assert!(!validate(&Validatable::text("   \t").required()));
        assert!(validate(&Validatable::text(" x ").required()));
    }

    #[test]
    fn required_wins_over_other_constraints() {
        let input = Validatable::text("  ").required().max_length(10);
        assert!(!validate(&input));
    }

    #[test]
    fn blank_text_passes_when_not_required() {
        assert!(validate(&Validatable::text("")));
    }

    #[test]
    fn length_bounds_apply_to_text() {
        assert!(!validate(&Validatable::text("abcd").min_length(5)));
        assert!(validate(&Validatable::text("abcde").min_length(5)));
        assert!(!validate(&Validatable::text("abcdef").max_length(5)));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate(&Validatable::text("計画書作成").min_length(5).max_length(5)));
    }

    #[test]
    fn numeric_bounds_are_inclusive() {
        assert!(validate(&Validatable::number(1.0).min(1.0).max(100.0)));
        assert!(validate(&Validatable::number(100.0).min(1.0).max(100.0)));
        assert!(!validate(&Validatable::number(0.5).min(1.0)));
        assert!(!validate(&Validatable::number(100.5).max(100.0)));
    }

    #[test]
    fn numbers_ignore_length_bounds() {
        assert!(validate(&Validatable::number(123456.0).max_length(2)));
        assert!(validate(&Validatable::number(1.0).min_length(5)));
    }

    #[test]
    fn text_ignores_numeric_bounds() {
        assert!(validate(&Validatable::text("500").max(100.0)));
        assert!(validate(&Validatable::text("0").min(1.0)));
    }

    #[test]
    fn numbers_always_satisfy_required() {
        assert!(validate(&Validatable::number(0.0).required()));
    }

    #[test]
    fn nan_fails_any_numeric_bound() {
        assert!(!validate(&Validatable::number(f64::NAN).min(1.0)));
        assert!(validate(&Validatable::number(f64::NAN)));
    }
}
