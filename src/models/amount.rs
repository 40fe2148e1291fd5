//! Stored transaction amounts
//!
//! Ledger files written by hand or by earlier builds occasionally carry the
//! amount as a quoted string instead of a number. Such records load as
//! [`Amount::Text`] and are kept verbatim; they are only coerced to a number
//! (or to zero) when totals are computed, never rewritten in place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored amount: a plain number, or whatever non-numeric value the
/// ledger file happened to contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// The numeric value, if this amount can be read as a finite number.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Coerced value for aggregation; unparsable amounts count as zero.
    pub fn or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for Amount {
    /// Numbers print the way they serialize ("250", "19.99"); text prints raw.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}
