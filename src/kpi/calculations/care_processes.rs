//! KPIs 25-31 and the KPI 32 sub-measures: seven key care processes.
//!
//! The annual health checks. KPIs 25-27 run over the complete-year cohort
//! (Measure 5), KPIs 28-31 over its 12-and-over refinement (Measure 6).
//! The KPI 32 sub-measures grade completion across the age-appropriate
//! check set: three checks under 12, six from 12 up.

use chrono::NaiveDate;

use crate::kpi::KpiCalculator;
use crate::kpi::measures::Cohort;
use crate::kpi::observations::{
    blood_pressure_check, bmi_check, date_in, foot_examination_check, has_visit, hba1c_check,
    thyroid_check, urinary_albumin_check,
};
use crate::kpi::result::KpiResult;
use crate::models::{Patient, Visit, codes};

/// One health-check predicate over a single visit.
type Check = fn(&Visit, NaiveDate, NaiveDate) -> bool;

/// Checks expected for patients under 12.
const CORE_CHECKS: [Check; 3] = [hba1c_check, bmi_check, thyroid_check];

/// Checks expected for patients aged 12 and over.
const EXTENDED_CHECKS: [Check; 6] = [
    hba1c_check,
    bmi_check,
    thyroid_check,
    blood_pressure_check,
    urinary_albumin_check,
    foot_examination_check,
];

impl KpiCalculator {
    /// KPI 25: HbA1c. Complete-year patients with an HbA1c result dated
    /// inside the audit period.
    #[must_use]
    pub fn kpi_25_hba1c(&self) -> KpiResult {
        let eligible = self.measure_5_complete_year();
        let passed =
            eligible.count_matching(|patient| self.completed_check(patient, hba1c_check));
        self.proportional_result(eligible, passed)
    }

    /// KPI 26: BMI. Complete-year patients with height and weight measured
    /// inside the audit period.
    #[must_use]
    pub fn kpi_26_bmi(&self) -> KpiResult {
        let eligible = self.measure_5_complete_year();
        let passed = eligible.count_matching(|patient| self.completed_check(patient, bmi_check));
        self.proportional_result(eligible, passed)
    }

    /// KPI 27: thyroid screen. Complete-year patients with a thyroid
    /// function test dated inside the audit period.
    #[must_use]
    pub fn kpi_27_thyroid_screen(&self) -> KpiResult {
        let eligible = self.measure_5_complete_year();
        let passed =
            eligible.count_matching(|patient| self.completed_check(patient, thyroid_check));
        self.proportional_result(eligible, passed)
    }

    /// KPI 28: blood pressure. Measure 6 patients with a systolic reading
    /// dated inside the audit period.
    #[must_use]
    pub fn kpi_28_blood_pressure(&self) -> KpiResult {
        let eligible = self.measure_6_complete_year_gte_12yo();
        let passed =
            eligible.count_matching(|patient| self.completed_check(patient, blood_pressure_check));
        self.proportional_result(eligible, passed)
    }

    /// KPI 29: urinary albumin. Measure 6 patients with an ACR result
    /// dated inside the audit period.
    #[must_use]
    pub fn kpi_29_urinary_albumin(&self) -> KpiResult {
        let eligible = self.measure_6_complete_year_gte_12yo();
        let passed =
            eligible.count_matching(|patient| self.completed_check(patient, urinary_albumin_check));
        self.proportional_result(eligible, passed)
    }

    /// KPI 30: retinal screening. Measure 6 patients with a normal or
    /// abnormal screening result dated inside the audit period.
    #[must_use]
    pub fn kpi_30_retinal_screening(&self) -> KpiResult {
        let eligible = self.measure_6_complete_year_gte_12yo();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                visit
                    .retinal_screening_result
                    .is_some_and(|result| codes::RETINAL_SCREENING_RESULTS.contains(&result))
                    && date_in(
                        visit.retinal_screening_observation_date,
                        self.audit_start_date,
                        self.audit_end_date,
                    )
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 31: foot examination. Measure 6 patients with an examination
    /// dated inside the audit period.
    #[must_use]
    pub fn kpi_31_foot_examination(&self) -> KpiResult {
        let eligible = self.measure_6_complete_year_gte_12yo();
        let passed = eligible
            .count_matching(|patient| self.completed_check(patient, foot_examination_check));
        self.proportional_result(eligible, passed)
    }

    /// KPI 32.1: health check completion rate.
    ///
    /// Counts health checks rather than patients: eligible is the number
    /// of expected checks (3 per complete-year patient under 12, 6 per
    /// patient 12 and over), passed the number actually completed.
    /// Ineligible stays a patient count.
    #[must_use]
    pub fn kpi_32_1_health_check_completion_rate(&self) -> KpiResult {
        let (under_12, gte_12) = self.measure_5_age_bands();
        let expected = under_12.count() * 3 + gte_12.count() * 6;
        let actual = self.completed_check_total(under_12, &CORE_CHECKS)
            + self.completed_check_total(gte_12, &EXTENDED_CHECKS);
        let total_ineligible =
            self.total_patients_count - self.measure_5_complete_year().count();
        KpiResult::from_counts(expected, total_ineligible, actual, expected - actual)
    }

    /// KPI 32.2: complete-year patients under 12 with all three of their
    /// expected health checks completed.
    #[must_use]
    pub fn kpi_32_2_health_check_lt_12yo(&self) -> KpiResult {
        let (under_12, _) = self.measure_5_age_bands();
        let passed =
            under_12.count_matching(|patient| self.all_checks_completed(patient, &CORE_CHECKS));
        self.proportional_result(under_12, passed)
    }

    /// KPI 32.3: complete-year patients aged 12 and over with all six of
    /// their expected health checks completed.
    #[must_use]
    pub fn kpi_32_3_health_check_gte_12yo(&self) -> KpiResult {
        let (_, gte_12) = self.measure_5_age_bands();
        let passed =
            gte_12.count_matching(|patient| self.all_checks_completed(patient, &EXTENDED_CHECKS));
        self.proportional_result(gte_12, passed)
    }

    /// Whether any of the patient's visits completes `check` inside the
    /// audit period. Each check stands alone: the qualifying visits may
    /// differ per check.
    fn completed_check(&self, patient: &Patient, check: Check) -> bool {
        has_visit(patient, |visit| {
            check(visit, self.audit_start_date, self.audit_end_date)
        })
    }

    /// Total completed checks across a cohort, each patient contributing
    /// at most one per check.
    fn completed_check_total(&self, cohort: &Cohort, checks: &[Check]) -> u32 {
        cohort
            .iter()
            .map(|patient| {
                checks
                    .iter()
                    .filter(|check| self.completed_check(patient, **check))
                    .count() as u32
            })
            .sum()
    }

    fn all_checks_completed(&self, patient: &Patient, checks: &[Check]) -> bool {
        checks
            .iter()
            .all(|check| self.completed_check(patient, *check))
    }
}
