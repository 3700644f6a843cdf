//! Error handling for the audit KPI engine.

use chrono::NaiveDate;

/// Errors raised during calendar resolution and engine construction
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// Date falls outside the audit years the engine supports
    #[error("date {0} is outside the supported audit years (2024-04-01 to 2027-03-31)")]
    UnsupportedAuditDate(NaiveDate),

    /// Engine constructed without any PZ codes
    #[error("at least one PZ code is required to calculate KPIs")]
    MissingPzCodes,

    /// A date that resolved to an audit period could not be placed in a quarter
    #[error("could not resolve an audit quarter for {0}")]
    QuarterOutOfRange(NaiveDate),

    /// Error reading a patient data file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error decoding patient data
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for Result with `AuditError`
pub type Result<T> = std::result::Result<T, AuditError>;
