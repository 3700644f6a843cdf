//! KPIs 21-24: glucose monitoring.
//!
//! Flash and continuous glucose monitor usage, plus the hybrid closed loop
//! measure. Each reads the patient's most recent entry for the relevant
//! item.

use crate::kpi::KpiCalculator;
use crate::kpi::observations::latest_visit_matching;
use crate::kpi::result::KpiResult;
use crate::models::codes;

impl KpiCalculator {
    /// KPI 21: eligible patients whose most recent monitoring entry is a
    /// flash glucose monitor, plain or modified.
    #[must_use]
    pub fn kpi_21_flash_glucose_monitor(&self) -> KpiResult {
        let eligible = self.measure_1_total_eligible();
        let passed = eligible.count_matching(|patient| {
            latest_visit_matching(patient, |visit| {
                visit
                    .glucose_monitoring
                    .is_some_and(|method| codes::FLASH_GLUCOSE_MONITORS.contains(&method))
            })
            .is_some()
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 22: eligible patients whose most recent monitoring entry is a
    /// real time CGM with alarms.
    #[must_use]
    pub fn kpi_22_real_time_cgm_with_alarms(&self) -> KpiResult {
        let eligible = self.measure_1_total_eligible();
        let passed = eligible.count_matching(|patient| {
            latest_visit_matching(patient, |visit| {
                visit.glucose_monitoring == Some(codes::GLUCOSE_MONITORING_REALTIME_CGM_WITH_ALARMS)
            })
            .is_some()
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 23: newly diagnosed patients (Measure 2) whose most recent
    /// monitoring entry is a real time CGM with alarms.
    #[must_use]
    pub fn kpi_23_type1_real_time_cgm_with_alarms(&self) -> KpiResult {
        let eligible = self.measure_2_new_diagnoses();
        let passed = eligible.count_matching(|patient| {
            latest_visit_matching(patient, |visit| {
                visit.glucose_monitoring == Some(codes::GLUCOSE_MONITORING_REALTIME_CGM_WITH_ALARMS)
            })
            .is_some()
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 24: hybrid closed loop system.
    ///
    /// Eligible patients are the Measure 1 patients on an insulin pump
    /// regimen; the pump entry itself must record a closed loop system for
    /// the patient to pass. Measure 1 patients on other regimens count as
    /// ineligible here.
    #[must_use]
    pub fn kpi_24_hybrid_closed_loop_system(&self) -> KpiResult {
        let on_pump = |visit: &crate::models::Visit| {
            visit
                .treatment
                .is_some_and(|regimen| codes::INSULIN_PUMP_REGIMENS.contains(&regimen))
        };
        let eligible = self
            .measure_1_total_eligible()
            .refine(|patient| latest_visit_matching(patient, on_pump).is_some());
        let passed = eligible.count_matching(|patient| {
            latest_visit_matching(patient, on_pump).is_some_and(|visit| {
                visit
                    .closed_loop_system
                    .is_some_and(|system| codes::CLOSED_LOOP_SYSTEMS.contains(&system))
            })
        });
        self.proportional_result(&eligible, passed)
    }
}
