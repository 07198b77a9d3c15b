use std::fmt;

/// A value produced while evaluating a zone specification.
///
/// Connectives and predicate calls evaluate to [`Value::Boolean`]. Literal
/// nodes evaluate to their stored scalar, which is then handed to the
/// predicate's match routine as an argument.
///
/// # Examples
///
/// ```
/// use zonespec::Value;
///
/// let matched = Value::Boolean(true);
/// let radius = Value::Number(500.0);
/// let biome = Value::String("PLAINS".to_string());
///
/// assert!(matched.as_bool());
/// assert_eq!(radius.as_float(), Some(500.0));
/// assert_eq!(biome.as_str(), Some("PLAINS"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Result of a connective or predicate
    Boolean(bool),

    /// Number argument
    Number(f64),

    /// String argument
    String(String),
}

impl Value {
    /// Convert to boolean for conditions. Literals are never a top-level
    /// result, so anything other than `Boolean(true)` is false.
    pub fn as_bool(&self) -> bool {
        matches!(self, Value::Boolean(true))
    }

    /// Get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(true) => f.write_str("T"),
            Value::Boolean(false) => f.write_str("F"),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
        }
    }
}
