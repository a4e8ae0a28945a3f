use std::fmt;

use serde::{Deserialize, Serialize};

/// Time for a material to reach its threshold fraction.
///
/// A zero effective rate has no algebraic solution; that outcome is
/// represented as [`DegradationTime::Unbounded`] rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DegradationTime {
    Finite(f64),
    Unbounded,
}

impl DegradationTime {
    pub fn is_unbounded(self) -> bool {
        matches!(self, DegradationTime::Unbounded)
    }

    pub fn as_finite(self) -> Option<f64> {
        match self {
            DegradationTime::Finite(t) => Some(t),
            DegradationTime::Unbounded => None,
        }
    }

    /// Finite times map to themselves, unbounded to `f64::INFINITY`.
    pub fn to_f64(self) -> f64 {
        self.as_finite().unwrap_or(f64::INFINITY)
    }
}

impl fmt::Display for DegradationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegradationTime::Finite(t) => match f.precision() {
                Some(p) => write!(f, "{t:.p$}"),
                None => write!(f, "{t}"),
            },
            DegradationTime::Unbounded => f.write_str("never"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_displays_as_never() {
        assert_eq!(DegradationTime::Unbounded.to_string(), "never");
        assert_eq!(format!("{:.1}", DegradationTime::Unbounded), "never");
    }

    #[test]
    fn finite_respects_precision() {
        assert_eq!(format!("{:.1}", DegradationTime::Finite(59.914)), "59.9");
    }

    #[test]
    fn unbounded_maps_to_infinity() {
        assert!(DegradationTime::Unbounded.to_f64().is_infinite());
        assert_eq!(DegradationTime::Finite(3.0).as_finite(), Some(3.0));
    }
}
