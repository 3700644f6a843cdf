//! KPIs 1-12: cohort counts.
//!
//! Headline denominators and condition counts. For these KPIs the passed
//! and failed slots mirror the eligible and ineligible counts.

use crate::kpi::KpiCalculator;
use crate::kpi::observations::latest_visit_matching;
use crate::kpi::result::KpiResult;
use crate::models::codes;

impl KpiCalculator {
    /// KPI 1: total number of eligible patients (Measure 1).
    #[must_use]
    pub fn kpi_1_total_eligible(&self) -> KpiResult {
        self.count_result(self.measure_1_total_eligible())
    }

    /// KPI 2: eligible patients diagnosed within the audit period
    /// (Measure 2).
    #[must_use]
    pub fn kpi_2_total_new_diagnoses(&self) -> KpiResult {
        self.count_result(self.measure_2_new_diagnoses())
    }

    /// KPI 3: eligible patients with Type 1 diabetes.
    #[must_use]
    pub fn kpi_3_total_t1dm(&self) -> KpiResult {
        let cohort = self
            .measure_1_total_eligible()
            .refine(|patient| patient.diabetes_type == Some(codes::TYPE_1_DIABETES));
        self.count_result(&cohort)
    }

    /// KPI 4: Type 1 patients aged 12 or over at the start of the audit
    /// period.
    #[must_use]
    pub fn kpi_4_total_t1dm_gte_12yo(&self) -> KpiResult {
        let cutoff = self.dob_cutoff(12);
        let cohort = self.measure_1_total_eligible().refine(|patient| {
            patient.diabetes_type == Some(codes::TYPE_1_DIABETES)
                && patient.date_of_birth.is_some_and(|dob| dob <= cutoff)
        });
        self.count_result(&cohort)
    }

    /// KPI 5: patients who completed a year of care (Measure 5).
    #[must_use]
    pub fn kpi_5_total_t1dm_complete_year(&self) -> KpiResult {
        self.count_result(self.measure_5_complete_year())
    }

    /// KPI 6: Type 1 patients aged 12+ who completed a year of care with
    /// an in-period care observation (Measure 6).
    #[must_use]
    pub fn kpi_6_total_t1dm_complete_year_gte_12yo(&self) -> KpiResult {
        self.count_result(self.measure_6_complete_year_gte_12yo())
    }

    /// KPI 7: new Type 1 diagnoses within the audit period (Measure 7).
    #[must_use]
    pub fn kpi_7_total_new_diagnoses_t1dm(&self) -> KpiResult {
        self.count_result(self.measure_7_new_t1dm_diagnoses())
    }

    /// KPI 8: eligible patients who died within the audit period.
    #[must_use]
    pub fn kpi_8_total_deaths(&self) -> KpiResult {
        let cohort = self
            .measure_1_total_eligible()
            .refine(|patient| self.in_audit_period(patient.death_date));
        self.count_result(&cohort)
    }

    /// KPI 9: eligible patients who left the service within the audit
    /// period.
    #[must_use]
    pub fn kpi_9_total_service_transitions(&self) -> KpiResult {
        let cohort = self.measure_1_total_eligible().refine(|patient| {
            patient
                .transfers
                .iter()
                .any(|transfer| self.in_audit_period(transfer.date_leaving_service))
        });
        self.count_result(&cohort)
    }

    /// KPI 10: eligible patients whose most recent coeliac entry records a
    /// gluten-free diet.
    #[must_use]
    pub fn kpi_10_total_coeliacs(&self) -> KpiResult {
        let cohort = self.measure_1_total_eligible().refine(|patient| {
            latest_visit_matching(patient, |visit| visit.gluten_free_diet == Some(codes::YES))
                .is_some()
        });
        self.count_result(&cohort)
    }

    /// KPI 11: eligible patients whose most recent thyroid entry records
    /// treatment with thyroxine or anti-thyroid medication.
    #[must_use]
    pub fn kpi_11_total_thyroids(&self) -> KpiResult {
        let cohort = self.measure_1_total_eligible().refine(|patient| {
            latest_visit_matching(patient, |visit| {
                visit
                    .thyroid_treatment_status
                    .is_some_and(|status| codes::THYROID_TREATED_STATUSES.contains(&status))
            })
            .is_some()
        });
        self.count_result(&cohort)
    }

    /// KPI 12: eligible patients whose most recent ketone entry records
    /// training on blood ketone testing equipment.
    #[must_use]
    pub fn kpi_12_total_ketone_test_equipment(&self) -> KpiResult {
        let cohort = self.measure_1_total_eligible().refine(|patient| {
            latest_visit_matching(patient, |visit| {
                visit.ketone_meter_training == Some(codes::YES)
            })
            .is_some()
        });
        self.count_result(&cohort)
    }
}
