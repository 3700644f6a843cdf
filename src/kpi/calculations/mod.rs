//! The KPI battery, grouped by audit category.

mod additional_processes;
mod care_processes;
mod counts;
mod glucose_monitoring;
mod new_diagnosis;
mod outcomes;
mod treatment;
