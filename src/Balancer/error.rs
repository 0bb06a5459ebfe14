use thiserror::Error;

/// error types of the balancing pipeline
/// input-format errors (Format, Parse) are kept apart from the chemistry-level
/// failure (Unbalanceable) so the user can tell a typo from an impossible reaction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BalanceError {
    /// equation string does not match `formula (+ formula)* = formula (+ formula)*`
    #[error("Invalid equation format: {0}")]
    Format(String),
    /// formula token contains characters outside the element-symbol-plus-digits grammar
    #[error("Invalid formula '{formula}': {reason}")]
    Parse { formula: String, reason: String },
    /// no non-trivial combination of compounds conserves all elements
    #[error("Unable to balance: {0}")]
    Unbalanceable(String),
    /// normalized coefficients do not conserve elements (internal defect)
    #[error("Balance verification failed: {0}")]
    Verification(String),
    /// the balanced coefficients exist but do not fit into u64
    #[error("Coefficients too large: {0}")]
    CoefficientOverflow(String),
    /// element symbol is absent from the atomic mass table
    #[error("Unknown element: {0}")]
    UnknownElement(String),
}

impl BalanceError {
    pub fn parse(formula: &str, reason: impl Into<String>) -> Self {
        BalanceError::Parse {
            formula: formula.to_string(),
            reason: reason.into(),
        }
    }
    /// true for errors caused by malformed input rather than by the chemistry
    pub fn is_input_error(&self) -> bool {
        matches!(self, BalanceError::Format(_) | BalanceError::Parse { .. })
    }
}
