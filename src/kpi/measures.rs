//! Cohort measures.
//!
//! The nested eligibility cohorts shared across the KPI battery. Measure 1
//! (eligible patients) anchors the hierarchy; Measures 2, 5, 6 and 7 refine
//! or rebuild from it. Each cohort is resolved at most once per engine
//! instance and cached for the remainder of the run.

use std::cell::OnceCell;
use std::sync::Arc;

use chrono::{Days, Months, NaiveDate};

use super::KpiCalculator;
use super::observations::{any_care_observation_date_in, date_in};
use crate::models::{Patient, codes};

/// A resolved patient cohort.
#[derive(Debug, Clone, Default)]
pub(crate) struct Cohort {
    members: Vec<Arc<Patient>>,
}

impl Cohort {
    /// The patients from `patients` matching `predicate`.
    pub(crate) fn from_filter(
        patients: &[Arc<Patient>],
        predicate: impl Fn(&Patient) -> bool,
    ) -> Self {
        Self {
            members: patients
                .iter()
                .filter(|patient| predicate(patient))
                .cloned()
                .collect(),
        }
    }

    /// The subset of this cohort matching `predicate`.
    pub(crate) fn refine(&self, predicate: impl Fn(&Patient) -> bool) -> Self {
        Self::from_filter(&self.members, predicate)
    }

    pub(crate) fn count(&self) -> u32 {
        self.members.len() as u32
    }

    /// Number of members matching `predicate` without materialising a
    /// new cohort.
    pub(crate) fn count_matching(&self, predicate: impl Fn(&Patient) -> bool) -> u32 {
        self.members
            .iter()
            .filter(|patient| predicate(patient))
            .count() as u32
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.members.iter().map(Arc::as_ref)
    }
}

/// Lazily-built cohorts for one engine run.
///
/// Cells initialise independently, so a measure may build on another
/// measure's accessor while its own cell is initialising.
#[derive(Debug, Default)]
pub(crate) struct MeasureCache {
    total_eligible: OnceCell<Cohort>,
    new_diagnoses: OnceCell<Cohort>,
    complete_year: OnceCell<Cohort>,
    complete_year_gte_12yo: OnceCell<Cohort>,
    new_t1dm_diagnoses: OnceCell<Cohort>,
    complete_year_age_bands: OnceCell<(Cohort, Cohort)>,
    established_t1dm_diagnoses: OnceCell<Cohort>,
}

impl KpiCalculator {
    /// Whether an optional date falls inside the audit period (inclusive).
    pub(crate) fn in_audit_period(&self, date: Option<NaiveDate>) -> bool {
        date_in(date, self.audit_start_date, self.audit_end_date)
    }

    /// Date of birth cutoff for an age threshold at the audit start:
    /// born on or before the cutoff means aged `years` or older on day one
    /// of the period.
    pub(crate) fn dob_cutoff(&self, years: u32) -> NaiveDate {
        self.audit_start_date - Months::new(12 * years)
    }

    /// Measure 1: patients with an NHS number, a date of birth, a visit
    /// inside the audit period, and aged under 25 at the period start.
    pub(crate) fn measure_1_total_eligible(&self) -> &Cohort {
        self.measures.total_eligible.get_or_init(|| {
            let cutoff = self.dob_cutoff(25);
            Cohort::from_filter(&self.patients, |patient| {
                patient.nhs_number.is_some()
                    && patient.date_of_birth.is_some_and(|dob| dob > cutoff)
                    && patient
                        .visits
                        .iter()
                        .any(|visit| self.in_audit_period(visit.visit_date))
            })
        })
    }

    /// Measure 2: Measure 1 patients diagnosed inside the audit period.
    pub(crate) fn measure_2_new_diagnoses(&self) -> &Cohort {
        self.measures.new_diagnoses.get_or_init(|| {
            self.measure_1_total_eligible()
                .refine(|patient| self.in_audit_period(patient.diagnosis_date))
        })
    }

    /// Measure 5: Measure 1 patients who completed a full year of care.
    /// Excludes anyone diagnosed, transferred out or deceased inside the
    /// audit period.
    pub(crate) fn measure_5_complete_year(&self) -> &Cohort {
        self.measures.complete_year.get_or_init(|| {
            self.measure_1_total_eligible()
                .refine(|patient| !self.incomplete_year(patient))
        })
    }

    /// Measure 5 split at the patient's 12th birthday: (under 12, 12 and
    /// over) at the audit start.
    pub(crate) fn measure_5_age_bands(&self) -> &(Cohort, Cohort) {
        self.measures.complete_year_age_bands.get_or_init(|| {
            let cutoff = self.dob_cutoff(12);
            let complete_year = self.measure_5_complete_year();
            let under_12 =
                complete_year.refine(|patient| patient.date_of_birth.is_some_and(|dob| dob > cutoff));
            let gte_12 = complete_year
                .refine(|patient| patient.date_of_birth.is_some_and(|dob| dob <= cutoff));
            (under_12, gte_12)
        })
    }

    /// Measure 6: Type 1 patients aged 12 or over at the audit start who
    /// completed a year of care and had at least one visit carrying both a
    /// visit date and a care observation date inside the period.
    ///
    /// Rebuilt from the full working set rather than refined from
    /// Measure 1: the observation requirement replaces Measure 1's bare
    /// visit-date requirement.
    pub(crate) fn measure_6_complete_year_gte_12yo(&self) -> &Cohort {
        self.measures.complete_year_gte_12yo.get_or_init(|| {
            let cutoff = self.dob_cutoff(12);
            Cohort::from_filter(&self.patients, |patient| {
                !self.incomplete_year(patient)
                    && patient.nhs_number.is_some()
                    && patient.date_of_birth.is_some_and(|dob| dob <= cutoff)
                    && patient.diabetes_type == Some(codes::TYPE_1_DIABETES)
                    && patient.visits.iter().any(|visit| {
                        self.in_audit_period(visit.visit_date)
                            && any_care_observation_date_in(
                                visit,
                                self.audit_start_date,
                                self.audit_end_date,
                            )
                    })
            })
        })
    }

    /// Measure 7: Type 1 patients aged under 25 at the audit start,
    /// diagnosed inside the period, with a care observation date inside the
    /// period. Visit dates are not consulted: a newly diagnosed patient
    /// counts on observations alone.
    pub(crate) fn measure_7_new_t1dm_diagnoses(&self) -> &Cohort {
        self.measures.new_t1dm_diagnoses.get_or_init(|| {
            let cutoff = self.dob_cutoff(25);
            Cohort::from_filter(&self.patients, |patient| {
                patient.nhs_number.is_some()
                    && patient.date_of_birth.is_some_and(|dob| dob > cutoff)
                    && patient.diabetes_type == Some(codes::TYPE_1_DIABETES)
                    && self.in_audit_period(patient.diagnosis_date)
                    && patient.visits.iter().any(|visit| {
                        any_care_observation_date_in(
                            visit,
                            self.audit_start_date,
                            self.audit_end_date,
                        )
                    })
            })
        })
    }

    /// Measure 7 patients diagnosed more than 90 days before the period
    /// end, the denominator for the new-diagnosis screening KPIs 41 and 42.
    pub(crate) fn measure_7_established_diagnoses(&self) -> &Cohort {
        self.measures.established_t1dm_diagnoses.get_or_init(|| {
            let latest_diagnosis = self.audit_end_date - Days::new(90);
            self.measure_7_new_t1dm_diagnoses()
                .refine(|patient| patient.diagnosis_date.is_some_and(|date| date < latest_diagnosis))
        })
    }

    /// Whether the patient's year of care was interrupted: diagnosed,
    /// transferred out of the service, or deceased inside the audit period.
    fn incomplete_year(&self, patient: &Patient) -> bool {
        self.in_audit_period(patient.diagnosis_date)
            || patient
                .transfers
                .iter()
                .any(|transfer| self.in_audit_period(transfer.date_leaving_service))
            || self.in_audit_period(patient.death_date)
    }
}
