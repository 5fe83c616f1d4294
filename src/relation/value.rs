use std::cmp::Ordering;
use std::fmt;

/// Scalar values stored in a row
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    String(String),
}

impl Value {
    /// Parse a bare literal the way selection arguments and table literals are read.
    ///
    /// Whole numbers become `Integer` (including reals such as `18.0`), other
    /// numbers become `Real`, everything else stays a `String`. Only decimal
    /// notation counts as a number, so words like `nan` or `Infinity` are
    /// strings.
    pub fn parse_literal(text: &str) -> Self {
        if !is_decimal(text) {
            return Value::String(text.to_string());
        }

        if let Ok(i) = text.parse::<i64>() {
            return Value::Integer(i);
        }

        match text.parse::<f64>() {
            Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Value::Integer(f as i64)
            }
            Ok(f) => Value::Real(f),
            Err(_) => Value::String(text.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Digits with an optional sign, decimal point and exponent
fn is_decimal(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
}

/// Exact ordering of an integer against a real, without rounding the integer
fn compare_integer_real(i: i64, r: f64) -> Option<Ordering> {
    // 2^63, the first real above every i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if r.is_nan() {
        return None;
    }
    if r >= LIMIT {
        return Some(Ordering::Less);
    }
    if r < -LIMIT {
        return Some(Ordering::Greater);
    }

    let floor = r.floor();
    match i.cmp(&(floor as i64)) {
        Ordering::Equal if floor != r => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

fn compare_numeric(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Real(a), Value::Real(b)) => a.partial_cmp(b),
        (Value::Integer(a), Value::Real(b)) => compare_integer_real(*a, *b),
        (Value::Real(a), Value::Integer(b)) => compare_integer_real(*b, *a).map(Ordering::reverse),
        _ => None,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Integer(_) | Value::Real(_), Value::Integer(_) | Value::Real(_)) => {
                compare_numeric(self, other) == Some(Ordering::Equal)
            }
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Integer(_) | Value::Real(_), Value::Integer(_) | Value::Real(_)) => {
                compare_numeric(self, other)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(i) => write!(f, "{}", i),
            // Debug keeps the fractional part on whole reals (3.0, not 3)
            Value::Real(r) => write!(f, "{:?}", r),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        assert_eq!(Value::parse_literal("18"), Value::Integer(18));
        assert_eq!(Value::parse_literal("-4"), Value::Integer(-4));
        assert!(matches!(Value::parse_literal("18.0"), Value::Integer(18)));
        assert!(matches!(Value::parse_literal("3.5"), Value::Real(r) if r == 3.5));
        assert!(matches!(Value::parse_literal("John"), Value::String(s) if s == "John"));
        assert!(matches!(Value::parse_literal("Math101"), Value::String(_)));
        assert!(matches!(Value::parse_literal("2.5e1"), Value::Real(r) if r == 25.0));
    }

    #[test]
    fn test_float_words_stay_strings() {
        for text in ["Nan", "nan", "NaN", "inf", "-inf", "Infinity", "INFINITY", "e", "-"] {
            assert_eq!(Value::parse_literal(text), Value::String(text.to_string()));
        }
    }

    #[test]
    fn test_large_integer_against_real_is_exact() {
        let big = Value::Integer(9_007_199_254_740_993);
        let rounded = Value::Real(9_007_199_254_740_992.0);

        assert_ne!(big, rounded);
        assert_eq!(big.partial_cmp(&rounded), Some(Ordering::Greater));
        assert_eq!(rounded.partial_cmp(&big), Some(Ordering::Less));
        assert_eq!(Value::Integer(9_007_199_254_740_992), rounded);

        assert_eq!(Value::Integer(i64::MAX).partial_cmp(&Value::Real(9.3e18)), Some(Ordering::Less));
        assert_eq!(Value::Integer(-3).partial_cmp(&Value::Real(-2.5)), Some(Ordering::Less));
        assert_eq!(Value::Integer(-2).partial_cmp(&Value::Real(-2.5)), Some(Ordering::Greater));
        assert_eq!(Value::Integer(2).partial_cmp(&Value::Real(f64::NAN)), None);
    }

    #[test]
    fn test_numeric_equality_across_types() {
        assert_eq!(Value::Integer(18), Value::Real(18.0));
        assert_ne!(Value::Integer(18), Value::Real(18.5));
        assert_ne!(Value::Integer(18), Value::String("18".to_string()));
    }

    #[test]
    fn test_null_equality() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Null, Value::Integer(0));
        assert_ne!(Value::String("NULL".to_string()), Value::Null);
    }

    #[test]
    fn test_ordering() {
        assert!(Value::Integer(19) > Value::Integer(18));
        assert!(Value::Real(3.9) > Value::Integer(3));
        assert!(Value::from("Bob") < Value::from("John"));
        assert_eq!(Value::Integer(1).partial_cmp(&Value::from("1")), None);
        assert_eq!(Value::Null.partial_cmp(&Value::Integer(1)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::Real(3.5).to_string(), "3.5");
        assert_eq!(Value::Real(3.0).to_string(), "3.0");
        assert_eq!(Value::from("Math101").to_string(), "Math101");
    }
}
