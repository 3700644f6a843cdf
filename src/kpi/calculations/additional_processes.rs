//! KPIs 33-40: additional care processes.
//!
//! Beyond the seven key checks: HbA1c measurement frequency, psychological
//! assessment, smoking, dietetic care, immunisation and sick day rules.
//! Most require the qualifying entry to sit on a visit dated inside the
//! audit period; KPIs 33 and 34 accept the observation date alone.

use crate::kpi::KpiCalculator;
use crate::kpi::observations::{has_visit, hba1c_check, matching_visit_count};
use crate::kpi::result::KpiResult;
use crate::models::codes;

impl KpiCalculator {
    /// KPI 33: complete-year patients with at least four HbA1c results
    /// dated inside the audit period.
    #[must_use]
    pub fn kpi_33_hba1c_4plus(&self) -> KpiResult {
        let eligible = self.measure_5_complete_year();
        let passed = eligible.count_matching(|patient| {
            matching_visit_count(patient, |visit| {
                hba1c_check(visit, self.audit_start_date, self.audit_end_date)
            }) >= 4
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 34: complete-year patients with a psychological screening
    /// assessment dated inside the audit period.
    #[must_use]
    pub fn kpi_34_psychological_assessment(&self) -> KpiResult {
        let eligible = self.measure_5_complete_year();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                self.in_audit_period(visit.psychological_screening_assessment_date)
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 35: Measure 6 patients screened for smoking at an in-period
    /// visit.
    #[must_use]
    pub fn kpi_35_smoking_status_screened(&self) -> KpiResult {
        let eligible = self.measure_6_complete_year_gte_12yo();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                self.in_audit_period(visit.visit_date)
                    && visit
                        .smoking_status
                        .is_some_and(|status| codes::SMOKING_SCREENED_STATUSES.contains(&status))
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 36: Measure 6 patients referred to a smoking cessation service
    /// at an in-period visit.
    #[must_use]
    pub fn kpi_36_referral_to_smoking_cessation_service(&self) -> KpiResult {
        let eligible = self.measure_6_complete_year_gte_12yo();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                self.in_audit_period(visit.visit_date)
                    && self.in_audit_period(visit.smoking_cessation_referral_date)
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 37: complete-year patients offered an additional dietetic
    /// appointment at an in-period visit.
    #[must_use]
    pub fn kpi_37_additional_dietetic_appointment_offered(&self) -> KpiResult {
        let eligible = self.measure_5_complete_year();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                self.in_audit_period(visit.visit_date)
                    && visit.dietician_additional_appointment_offered == Some(codes::YES)
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 38: complete-year patients who attended an additional dietetic
    /// appointment inside the audit period.
    #[must_use]
    pub fn kpi_38_patients_attending_additional_dietetic_appointment(&self) -> KpiResult {
        let eligible = self.measure_5_complete_year();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                self.in_audit_period(visit.visit_date)
                    && self.in_audit_period(visit.dietician_additional_appointment_date)
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 39: complete-year patients with an influenza immunisation
    /// recommendation dated inside the audit period.
    #[must_use]
    pub fn kpi_39_influenza_immunisation_recommended(&self) -> KpiResult {
        let eligible = self.measure_5_complete_year();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                self.in_audit_period(visit.visit_date)
                    && self.in_audit_period(visit.flu_immunisation_recommended_date)
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 40: eligible patients (Measure 1) given sick day rules advice
    /// at an in-period visit.
    #[must_use]
    pub fn kpi_40_sick_day_rules_advice(&self) -> KpiResult {
        let eligible = self.measure_1_total_eligible();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                self.in_audit_period(visit.visit_date)
                    && self.in_audit_period(visit.sick_day_rules_training_date)
            })
        });
        self.proportional_result(eligible, passed)
    }
}
