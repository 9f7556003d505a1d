use std::fmt::{Display, Formatter};

/// A typed scalar parsed from the right-hand side of a `KEY=value` line.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Value {
    /// Infer the type of a raw value string.
    ///
    /// The raw text is trimmed to a candidate, then the first matching
    /// rule wins: a double-quoted string (one quote pair stripped, the
    /// contents taken literally with no escape processing), `true`/`false`
    /// ignoring ASCII case, a base-10 `i64`, then an `f64`. Returns `None`
    /// when nothing matches; bare unquoted words and empty values are
    /// unrecognized.
    pub fn parse(raw: &str) -> Option<Self> {
        let candidate = raw.trim();

        // A lone `"` must not satisfy both quote checks against itself.
        if candidate.len() >= 2 && candidate.starts_with('"') && candidate.ends_with('"') {
            return Some(Self::Str(candidate[1..candidate.len() - 1].to_owned()));
        }

        if candidate.eq_ignore_ascii_case("true") {
            return Some(Self::Bool(true));
        }
        if candidate.eq_ignore_ascii_case("false") {
            return Some(Self::Bool(false));
        }

        if let Ok(int) = candidate.parse::<i64>() {
            return Some(Self::Int(int));
        }

        // Catches fractional and exponent forms, and integers beyond the
        // i64 range, which land here as an approximation.
        if let Ok(float) = candidate.parse::<f64>() {
            return Some(Self::Float(float));
        }

        None
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(int) => Some(*int),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(float) => Some(*float),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(text) => f.write_str(text),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Int(int) => write!(f, "{int}"),
            Self::Float(float) => write!(f, "{float}"),
        }
    }
}
