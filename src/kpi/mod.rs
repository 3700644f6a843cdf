//! KPI engine.
//!
//! This module implements the audit's KPI battery: the [`KpiCalculator`]
//! resolves the audit period from a calculation date, builds the cohort
//! measures lazily over its working set of patients, and walks the
//! [`registry`] to produce a [`KpiReport`](result::KpiReport) covering
//! KPIs 1-49 plus the KPI 32 sub-measures.

pub mod registry;
pub mod result;

mod calculations;
mod measures;
mod observations;

use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use log::{info, warn};
use rayon::prelude::*;

use crate::calendar;
use crate::error::{AuditError, Result};
use crate::models::{Patient, PatientCollection};
use measures::{Cohort, MeasureCache};
use result::{KpiOutcome, KpiReport, KpiResult};

/// KPI engine over one working set of patients.
///
/// An instance is bound to a single audit period and a single working set;
/// cohort measures are cached per instance, so build a fresh engine for
/// each calculation run.
#[derive(Debug)]
pub struct KpiCalculator {
    /// PDUs this run reports on
    pz_codes: Vec<String>,
    /// Date the audit period was resolved from
    calculation_date: NaiveDate,
    /// First day of the audit period
    audit_start_date: NaiveDate,
    /// Last day of the audit period
    audit_end_date: NaiveDate,
    /// Working set of patients
    patients: Vec<Arc<Patient>>,
    /// Size of the working set
    total_patients_count: u32,
    /// Lazily-built cohort measures
    measures: MeasureCache,
}

impl KpiCalculator {
    /// Builds an engine over the collection's patients belonging to the
    /// given PDUs.
    ///
    /// The audit period is resolved from `calculation_date`, defaulting to
    /// today. Fails if `pz_codes` is empty or the date falls outside the
    /// supported audit years.
    pub fn new(
        collection: &PatientCollection,
        pz_codes: Vec<String>,
        calculation_date: Option<NaiveDate>,
    ) -> Result<Self> {
        let patients = collection.filter_by_pz_codes(&pz_codes);
        Self::with_patients(patients, pz_codes, calculation_date)
    }

    /// Builds an engine over an explicit working set, bypassing PDU
    /// membership filtering.
    pub fn with_patients(
        patients: Vec<Arc<Patient>>,
        pz_codes: Vec<String>,
        calculation_date: Option<NaiveDate>,
    ) -> Result<Self> {
        if pz_codes.is_empty() {
            return Err(AuditError::MissingPzCodes);
        }
        let calculation_date = calculation_date.unwrap_or_else(|| Local::now().date_naive());
        let (audit_start_date, audit_end_date) = calendar::audit_period_for_date(calculation_date)?;

        if patients.is_empty() {
            warn!("working set is empty for PZ codes {pz_codes:?}");
        }
        let total_patients_count = patients.len() as u32;

        Ok(Self {
            pz_codes,
            calculation_date,
            audit_start_date,
            audit_end_date,
            patients,
            total_patients_count,
            measures: MeasureCache::default(),
        })
    }

    /// Runs the full battery in registry order.
    #[must_use]
    pub fn calculate_kpis(&self) -> KpiReport {
        info!(
            "Calculating KPIs for {} patients across PZ codes {:?} (audit period {} to {})",
            self.total_patients_count, self.pz_codes, self.audit_start_date, self.audit_end_date
        );

        let calculated_kpi_values = registry::definitions()
            .map(|definition| {
                let outcome = match definition.calculation {
                    Some(calculation) => {
                        KpiOutcome::calculated(calculation(self), definition.label)
                    }
                    None => KpiOutcome::not_implemented(),
                };
                (definition.attribute_name, outcome)
            })
            .collect();

        KpiReport {
            calculation_datetime: Utc::now(),
            audit_start_date: self.audit_start_date,
            audit_end_date: self.audit_end_date,
            total_patients_count: self.total_patients_count,
            calculated_kpi_values,
        }
    }

    /// Runs the battery for one patient, dropping the cohort-count KPIs
    /// 1-12 from the report. The remaining KPIs read as "does this patient
    /// pass" against a denominator of at most one.
    pub fn calculate_kpis_for_single_patient(
        patient: Arc<Patient>,
        pz_codes: Vec<String>,
        calculation_date: Option<NaiveDate>,
    ) -> Result<KpiReport> {
        let calculator = Self::with_patients(vec![patient], pz_codes, calculation_date)?;
        let mut report = calculator.calculate_kpis();
        let excluded: Vec<&'static str> = (1..=12).filter_map(registry::attribute_name).collect();
        report
            .calculated_kpi_values
            .retain(|(attribute_name, _)| !excluded.contains(attribute_name));
        Ok(report)
    }

    /// Date the audit period was resolved from.
    #[must_use]
    pub fn calculation_date(&self) -> NaiveDate {
        self.calculation_date
    }

    /// First day of the audit period.
    #[must_use]
    pub fn audit_start_date(&self) -> NaiveDate {
        self.audit_start_date
    }

    /// Last day of the audit period.
    #[must_use]
    pub fn audit_end_date(&self) -> NaiveDate {
        self.audit_end_date
    }

    /// PDUs this run reports on.
    #[must_use]
    pub fn pz_codes(&self) -> &[String] {
        &self.pz_codes
    }

    /// Size of the working set.
    #[must_use]
    pub fn total_patients_count(&self) -> u32 {
        self.total_patients_count
    }

    /// Result for a pure cohort count: passed mirrors eligible and failed
    /// mirrors ineligible.
    fn count_result(&self, cohort: &Cohort) -> KpiResult {
        let total_eligible = cohort.count();
        let total_ineligible = self.total_patients_count - total_eligible;
        KpiResult::from_counts(
            total_eligible,
            total_ineligible,
            total_eligible,
            total_ineligible,
        )
    }

    /// Result for a pass/fail KPI over `cohort` with `total_passed`
    /// members meeting the numerator.
    fn proportional_result(&self, cohort: &Cohort, total_passed: u32) -> KpiResult {
        let total_eligible = cohort.count();
        KpiResult::from_counts(
            total_eligible,
            self.total_patients_count - total_eligible,
            total_passed,
            total_eligible - total_passed,
        )
    }
}

/// One report per PDU, each computed by a dedicated engine over that
/// unit's patients. Units are processed in parallel; the output preserves
/// the input PZ code order.
pub fn calculate_kpis_by_pdu(
    collection: &PatientCollection,
    pz_codes: &[String],
    calculation_date: Option<NaiveDate>,
) -> Result<Vec<(String, KpiReport)>> {
    info!("Calculating KPI reports for {} PDUs", pz_codes.len());
    pz_codes
        .par_iter()
        .map(|pz_code| {
            let calculator =
                KpiCalculator::new(collection, vec![pz_code.clone()], calculation_date)?;
            Ok((pz_code.clone(), calculator.calculate_kpis()))
        })
        .collect()
}
