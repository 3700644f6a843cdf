//! KPIs 44-49: patient outcomes.
//!
//! Glycaemic outcome statistics, hospital admissions, psychological support
//! need and albuminuria. All six run over the Measure 1 denominator.

use chrono::Days;

use crate::kpi::KpiCalculator;
use crate::kpi::observations::has_visit;
use crate::kpi::result::KpiResult;
use crate::models::{Patient, codes};

/// Median of the values, averaging the middle pair for even counts.
fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    Some(if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    })
}

impl KpiCalculator {
    /// KPI 44: mean across eligible patients of each patient's median
    /// HbA1c. The value rides in the passed slot; failed is not
    /// applicable. Zero when no patient has a qualifying measurement.
    #[must_use]
    pub fn kpi_44_mean_hba1c(&self) -> KpiResult {
        let total_eligible = self.measure_1_total_eligible().count();
        let medians = self.patient_median_hba1cs();
        let mean = if medians.is_empty() {
            0.0
        } else {
            medians.iter().sum::<f64>() / medians.len() as f64
        };
        KpiResult::from_value(
            total_eligible,
            self.total_patients_count - total_eligible,
            mean,
        )
    }

    /// KPI 45: median across eligible patients of each patient's median
    /// HbA1c, shaped like KPI 44.
    #[must_use]
    pub fn kpi_45_median_hba1c(&self) -> KpiResult {
        let total_eligible = self.measure_1_total_eligible().count();
        let mut medians = self.patient_median_hba1cs();
        let median_of_medians = median(&mut medians).unwrap_or(0.0);
        KpiResult::from_value(
            total_eligible,
            self.total_patients_count - total_eligible,
            median_of_medians,
        )
    }

    /// KPI 46: eligible patients admitted to hospital for a coded reason,
    /// with the admission or discharge date inside the audit period,
    /// recorded at an in-period visit.
    #[must_use]
    pub fn kpi_46_number_of_admissions(&self) -> KpiResult {
        let eligible = self.measure_1_total_eligible();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                self.in_audit_period(visit.visit_date)
                    && visit
                        .hospital_admission_reason
                        .is_some_and(|reason| codes::HOSPITAL_ADMISSION_REASONS.contains(&reason))
                    && (self.in_audit_period(visit.hospital_admission_date)
                        || self.in_audit_period(visit.hospital_discharge_date))
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 47: as KPI 46, restricted to admissions for diabetic
    /// ketoacidosis.
    #[must_use]
    pub fn kpi_47_number_of_dka_admissions(&self) -> KpiResult {
        let eligible = self.measure_1_total_eligible();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                self.in_audit_period(visit.visit_date)
                    && visit.hospital_admission_reason == Some(codes::ADMISSION_REASON_DKA)
                    && (self.in_audit_period(visit.hospital_admission_date)
                        || self.in_audit_period(visit.hospital_discharge_date))
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 48: eligible patients flagged as requiring additional
    /// psychological support at an in-period visit.
    #[must_use]
    pub fn kpi_48_required_additional_psychological_support(&self) -> KpiResult {
        let eligible = self.measure_1_total_eligible();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                self.in_audit_period(visit.visit_date)
                    && visit.psychological_additional_support_status == Some(codes::YES)
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// KPI 49: eligible patients with micro- or macroalbuminuria recorded
    /// at an in-period visit.
    #[must_use]
    pub fn kpi_49_albuminuria_present(&self) -> KpiResult {
        let eligible = self.measure_1_total_eligible();
        let passed = eligible.count_matching(|patient| {
            has_visit(patient, |visit| {
                self.in_audit_period(visit.visit_date)
                    && visit
                        .albuminuria_stage
                        .is_some_and(|stage| codes::ALBUMINURIA_PRESENT_STAGES.contains(&stage))
            })
        });
        self.proportional_result(eligible, passed)
    }

    /// Each eligible patient's median HbA1c over measurements taken at an
    /// in-period visit at least 90 days after diagnosis. Patients without
    /// a diagnosis date or without a qualifying measurement contribute
    /// nothing.
    fn patient_median_hba1cs(&self) -> Vec<f64> {
        self.measure_1_total_eligible()
            .iter()
            .filter_map(|patient| {
                let mut values = self.qualifying_hba1c_values(patient);
                median(&mut values)
            })
            .collect()
    }

    fn qualifying_hba1c_values(&self, patient: &Patient) -> Vec<f64> {
        let Some(diagnosis_date) = patient.diagnosis_date else {
            return Vec::new();
        };
        let established = diagnosis_date + Days::new(90);
        patient
            .visits
            .iter()
            .filter(|visit| {
                self.in_audit_period(visit.visit_date)
                    && visit.hba1c_date.is_some_and(|date| date >= established)
            })
            .filter_map(|visit| visit.hba1c)
            .collect()
    }
}
