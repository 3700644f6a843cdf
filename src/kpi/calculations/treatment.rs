//! KPIs 13-20: treatment regimen.
//!
//! Distribution of eligible patients across the eight published treatment
//! regimens, read from each patient's most recent regimen entry.

use crate::kpi::KpiCalculator;
use crate::kpi::observations::latest_visit_matching;
use crate::kpi::result::KpiResult;
use crate::models::codes;

impl KpiCalculator {
    /// Shared shape for KPIs 13-20: eligible patients (Measure 1) whose
    /// most recent entry for the treatment regimen item matches `regimen`.
    fn treatment_regimen_result(&self, regimen: u8) -> KpiResult {
        let eligible = self.measure_1_total_eligible();
        let passed = eligible.count_matching(|patient| {
            latest_visit_matching(patient, |visit| visit.treatment == Some(regimen)).is_some()
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 13: one to three injections per day.
    #[must_use]
    pub fn kpi_13_one_to_three_injections_per_day(&self) -> KpiResult {
        self.treatment_regimen_result(codes::TREATMENT_ONE_TO_THREE_INJECTIONS)
    }

    /// KPI 14: four or more injections per day.
    #[must_use]
    pub fn kpi_14_four_or_more_injections_per_day(&self) -> KpiResult {
        self.treatment_regimen_result(codes::TREATMENT_FOUR_OR_MORE_INJECTIONS)
    }

    /// KPI 15: insulin pump, including pumps driven by a hybrid closed
    /// loop.
    #[must_use]
    pub fn kpi_15_insulin_pump(&self) -> KpiResult {
        self.treatment_regimen_result(codes::TREATMENT_INSULIN_PUMP)
    }

    /// KPI 16: one to three injections per day plus other blood glucose
    /// lowering medication.
    #[must_use]
    pub fn kpi_16_one_to_three_injections_plus_other_medication(&self) -> KpiResult {
        self.treatment_regimen_result(codes::TREATMENT_ONE_TO_THREE_INJECTIONS_PLUS_OTHER)
    }

    /// KPI 17: four or more injections per day plus other blood glucose
    /// lowering medication.
    #[must_use]
    pub fn kpi_17_four_or_more_injections_plus_other_medication(&self) -> KpiResult {
        self.treatment_regimen_result(codes::TREATMENT_FOUR_OR_MORE_INJECTIONS_PLUS_OTHER)
    }

    /// KPI 18: insulin pump therapy plus other blood glucose lowering
    /// medication.
    #[must_use]
    pub fn kpi_18_insulin_pump_plus_other_medication(&self) -> KpiResult {
        self.treatment_regimen_result(codes::TREATMENT_INSULIN_PUMP_PLUS_OTHER)
    }

    /// KPI 19: dietary management alone.
    #[must_use]
    pub fn kpi_19_dietary_management_alone(&self) -> KpiResult {
        self.treatment_regimen_result(codes::TREATMENT_DIETARY_MANAGEMENT)
    }

    /// KPI 20: dietary management plus other blood glucose lowering
    /// medication.
    #[must_use]
    pub fn kpi_20_dietary_management_plus_other_medication(&self) -> KpiResult {
        self.treatment_regimen_result(codes::TREATMENT_DIETARY_MANAGEMENT_PLUS_OTHER)
    }
}
