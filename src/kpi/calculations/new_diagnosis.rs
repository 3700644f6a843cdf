//! KPIs 41-43: care at new diagnosis.
//!
//! Screening and education delivered around the diagnosis date. The
//! qualifying windows are anchored to each patient's own diagnosis date
//! rather than to the audit period, and the denominators trim Measure 7 to
//! patients diagnosed early enough for the window to fit before the period
//! ends.

use chrono::{Days, NaiveDate};

use crate::kpi::KpiCalculator;
use crate::kpi::observations::has_visit;
use crate::kpi::result::KpiResult;
use crate::models::Patient;

/// Whether `observation` falls within `days_before`..`days_after` of the
/// patient's diagnosis date, inclusive at both ends.
fn within_days_of_diagnosis(
    patient: &Patient,
    observation: Option<NaiveDate>,
    days_before: u64,
    days_after: u64,
) -> bool {
    let (Some(diagnosis_date), Some(observation)) = (patient.diagnosis_date, observation) else {
        return false;
    };
    observation >= diagnosis_date - Days::new(days_before)
        && observation <= diagnosis_date + Days::new(days_after)
}

impl KpiCalculator {
    /// KPI 41: newly diagnosed Type 1 patients screened for coeliac
    /// disease within 90 days either side of diagnosis.
    #[must_use]
    pub fn kpi_41_coeliac_disease_screening(&self) -> KpiResult {
        let eligible = self.measure_7_established_diagnoses();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                within_days_of_diagnosis(patient, visit.coeliac_screen_date, 90, 90)
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 42: newly diagnosed Type 1 patients with a thyroid function
    /// test within 90 days either side of diagnosis.
    #[must_use]
    pub fn kpi_42_thyroid_disease_screening(&self) -> KpiResult {
        let eligible = self.measure_7_established_diagnoses();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                within_days_of_diagnosis(patient, visit.thyroid_function_date, 90, 90)
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 43: newly diagnosed Type 1 patients given level 3 carbohydrate
    /// counting education from 7 days before to 14 days after diagnosis.
    /// The denominator needs a diagnosis more than 14 days before the
    /// period end.
    #[must_use]
    pub fn kpi_43_carbohydrate_counting_education(&self) -> KpiResult {
        let latest_diagnosis = self.audit_end_date - Days::new(14);
        let eligible = self
            .measure_7_new_t1dm_diagnoses()
            .refine(|patient| patient.diagnosis_date.is_some_and(|date| date < latest_diagnosis));
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                within_days_of_diagnosis(
                    patient,
                    visit.carbohydrate_counting_level_three_education_date,
                    7,
                    14,
                )
            })
        });
        self.proportional_result(&eligible, passed)
    }
}
