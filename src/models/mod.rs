//! Data models for the audit.
//!
//! Patients own their related visits and transfers; the collection wraps a
//! set of patients for filtering into per-unit working sets.

pub mod codes;

mod collection;
mod patient;
mod transfer;
mod visit;

pub use collection::PatientCollection;
pub use patient::Patient;
pub use transfer::Transfer;
pub use visit::Visit;
