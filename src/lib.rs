//! A Rust library for calculating National Paediatric Diabetes Audit KPIs
//! over patient, visit and transfer records.

pub mod calendar;
pub mod error;
pub mod generator;
pub mod kpi;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use error::{AuditError, Result};
pub use models::{Patient, PatientCollection, Transfer, Visit};

// KPI engine
pub use kpi::registry::{KPI_REGISTRY, KpiDefinition};
pub use kpi::result::{KpiOutcome, KpiReport, KpiResult, KpiValue};
pub use kpi::{KpiCalculator, calculate_kpis_by_pdu};

// Audit calendar
pub use calendar::{audit_period_for_date, quarter_for_visit_date, quarters_for_audit_period};

// Synthetic cohorts
pub use generator::{AgeRange, FakePatientCreator, HbA1cTargetRange};
