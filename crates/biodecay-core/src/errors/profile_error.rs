/// Material profile construction errors.
///
/// Raised only when a profile is built; no per-call covariate value can
/// produce one of these.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("material name must not be empty")]
    EmptyName,

    #[error("initial quantity must be positive and finite, got {value}")]
    InvalidInitialQuantity { value: f64 },

    #[error("base rate for {scenario} must be non-negative, got {value}")]
    NegativeBaseRate { scenario: String, value: f64 },

    #[error("base rate for {scenario} must be finite")]
    NonFiniteBaseRate { scenario: String },

    #[error("invalid {factor} factor: {reason}")]
    InvalidFactor { factor: String, reason: String },
}
