use crate::model::validation::ReasonCode;

/// Verdict as reported by the backend, already checked for consistency
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationVerdict {
    pub is_valid: bool,
    pub reason_code: ReasonCode,
    /// Correlation id echoed by the backend, if any
    pub correlation_id: Option<String>,
}
