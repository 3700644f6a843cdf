//! KPI registry.
//!
//! The ordered table of every KPI in the audit battery. Report assembly
//! walks this table top to bottom, so registry order is report order:
//! KPIs 1..=31, then the three KPI 32 sub-measures, then 33..=49.

use super::KpiCalculator;
use super::result::KpiResult;

/// Calculation entry point for one KPI.
pub type KpiCalculation = fn(&KpiCalculator) -> KpiResult;

/// One row of the registry.
#[derive(Debug, Clone, Copy)]
pub struct KpiDefinition {
    /// KPI number; the KPI 32 sub-measures are 321, 322 and 323
    pub number: u16,
    /// Report key
    pub attribute_name: &'static str,
    /// Human-readable KPI title
    pub label: &'static str,
    /// Calculation, or `None` for a vacant slot reported as "Not implemented"
    pub calculation: Option<KpiCalculation>,
}

/// Every KPI in report order.
pub static KPI_REGISTRY: [KpiDefinition; 51] = [
    KpiDefinition {
        number: 1,
        attribute_name: "kpi_1_total_eligible",
        label: "Total number of eligible patients",
        calculation: Some(KpiCalculator::kpi_1_total_eligible),
    },
    KpiDefinition {
        number: 2,
        attribute_name: "kpi_2_total_new_diagnoses",
        label: "Total number of new diagnoses within the audit period",
        calculation: Some(KpiCalculator::kpi_2_total_new_diagnoses),
    },
    KpiDefinition {
        number: 3,
        attribute_name: "kpi_3_total_t1dm",
        label: "Total number of eligible patients with Type 1 diabetes",
        calculation: Some(KpiCalculator::kpi_3_total_t1dm),
    },
    KpiDefinition {
        number: 4,
        attribute_name: "kpi_4_total_t1dm_gte_12yo",
        label: "Number of patients aged 12+ with Type 1 diabetes",
        calculation: Some(KpiCalculator::kpi_4_total_t1dm_gte_12yo),
    },
    KpiDefinition {
        number: 5,
        attribute_name: "kpi_5_total_t1dm_complete_year",
        label: "Total number of patients with T1DM who have completed a year of care",
        calculation: Some(KpiCalculator::kpi_5_total_t1dm_complete_year),
    },
    KpiDefinition {
        number: 6,
        attribute_name: "kpi_6_total_t1dm_complete_year_gte_12yo",
        label: "Total number of patients with T1DM who have completed a year of care and are aged 12 or older",
        calculation: Some(KpiCalculator::kpi_6_total_t1dm_complete_year_gte_12yo),
    },
    KpiDefinition {
        number: 7,
        attribute_name: "kpi_7_total_new_diagnoses_t1dm",
        label: "Total number of new diagnoses of T1DM",
        calculation: Some(KpiCalculator::kpi_7_total_new_diagnoses_t1dm),
    },
    KpiDefinition {
        number: 8,
        attribute_name: "kpi_8_total_deaths",
        label: "Number of patients who died within audit period",
        calculation: Some(KpiCalculator::kpi_8_total_deaths),
    },
    KpiDefinition {
        number: 9,
        attribute_name: "kpi_9_total_service_transitions",
        label: "Number of patients who transitioned/left service within audit period",
        calculation: Some(KpiCalculator::kpi_9_total_service_transitions),
    },
    KpiDefinition {
        number: 10,
        attribute_name: "kpi_10_total_coeliacs",
        label: "Total number of coeliacs",
        calculation: Some(KpiCalculator::kpi_10_total_coeliacs),
    },
    KpiDefinition {
        number: 11,
        attribute_name: "kpi_11_total_thyroids",
        label: "Number of patients with thyroid disease",
        calculation: Some(KpiCalculator::kpi_11_total_thyroids),
    },
    KpiDefinition {
        number: 12,
        attribute_name: "kpi_12_total_ketone_test_equipment",
        label: "Number of patients using (or trained to use) blood ketone testing equipment",
        calculation: Some(KpiCalculator::kpi_12_total_ketone_test_equipment),
    },
    KpiDefinition {
        number: 13,
        attribute_name: "kpi_13_one_to_three_injections_per_day",
        label: "One - three injections/day",
        calculation: Some(KpiCalculator::kpi_13_one_to_three_injections_per_day),
    },
    KpiDefinition {
        number: 14,
        attribute_name: "kpi_14_four_or_more_injections_per_day",
        label: "Four or more injections/day",
        calculation: Some(KpiCalculator::kpi_14_four_or_more_injections_per_day),
    },
    KpiDefinition {
        number: 15,
        attribute_name: "kpi_15_insulin_pump",
        label: "Insulin pump (including those using a pump as part of a hybrid closed loop)",
        calculation: Some(KpiCalculator::kpi_15_insulin_pump),
    },
    KpiDefinition {
        number: 16,
        attribute_name: "kpi_16_one_to_three_injections_plus_other_medication",
        label: "One - three injections/day plus other blood glucose lowering medication",
        calculation: Some(KpiCalculator::kpi_16_one_to_three_injections_plus_other_medication),
    },
    KpiDefinition {
        number: 17,
        attribute_name: "kpi_17_four_or_more_injections_plus_other_medication",
        label: "Four or more injections/day plus other blood glucose lowering medication",
        calculation: Some(KpiCalculator::kpi_17_four_or_more_injections_plus_other_medication),
    },
    KpiDefinition {
        number: 18,
        attribute_name: "kpi_18_insulin_pump_plus_other_medication",
        label: "Insulin pump therapy plus other blood glucose lowering medication",
        calculation: Some(KpiCalculator::kpi_18_insulin_pump_plus_other_medication),
    },
    KpiDefinition {
        number: 19,
        attribute_name: "kpi_19_dietary_management_alone",
        label: "Dietary management alone (no insulin or other diabetes related medication)",
        calculation: Some(KpiCalculator::kpi_19_dietary_management_alone),
    },
    KpiDefinition {
        number: 20,
        attribute_name: "kpi_20_dietary_management_plus_other_medication",
        label: "Dietary management plus other blood glucose lowering medication (non Type-1 diabetes)",
        calculation: Some(KpiCalculator::kpi_20_dietary_management_plus_other_medication),
    },
    KpiDefinition {
        number: 21,
        attribute_name: "kpi_21_flash_glucose_monitor",
        label: "Number of patients using a flash glucose monitor",
        calculation: Some(KpiCalculator::kpi_21_flash_glucose_monitor),
    },
    KpiDefinition {
        number: 22,
        attribute_name: "kpi_22_real_time_cgm_with_alarms",
        label: "Number of patients using a real time continuous glucose monitor (CGM) with alarms",
        calculation: Some(KpiCalculator::kpi_22_real_time_cgm_with_alarms),
    },
    KpiDefinition {
        number: 23,
        attribute_name: "kpi_23_type1_real_time_cgm_with_alarms",
        label: "Number of patients with Type 1 diabetes using a real time continuous glucose monitor (CGM) with alarms",
        calculation: Some(KpiCalculator::kpi_23_type1_real_time_cgm_with_alarms),
    },
    KpiDefinition {
        number: 24,
        attribute_name: "kpi_24_hybrid_closed_loop_system",
        label: "Hybrid closed loop system (HCL)",
        calculation: Some(KpiCalculator::kpi_24_hybrid_closed_loop_system),
    },
    KpiDefinition {
        number: 25,
        attribute_name: "kpi_25_hba1c",
        label: "HbA1c (%)",
        calculation: Some(KpiCalculator::kpi_25_hba1c),
    },
    KpiDefinition {
        number: 26,
        attribute_name: "kpi_26_bmi",
        label: "BMI (%)",
        calculation: Some(KpiCalculator::kpi_26_bmi),
    },
    KpiDefinition {
        number: 27,
        attribute_name: "kpi_27_thyroid_screen",
        label: "Thyroid Screen (%)",
        calculation: Some(KpiCalculator::kpi_27_thyroid_screen),
    },
    KpiDefinition {
        number: 28,
        attribute_name: "kpi_28_blood_pressure",
        label: "Blood Pressure (%)",
        calculation: Some(KpiCalculator::kpi_28_blood_pressure),
    },
    KpiDefinition {
        number: 29,
        attribute_name: "kpi_29_urinary_albumin",
        label: "Urinary Albumin (%)",
        calculation: Some(KpiCalculator::kpi_29_urinary_albumin),
    },
    KpiDefinition {
        number: 30,
        attribute_name: "kpi_30_retinal_screening",
        label: "Retinal Screening (%)",
        calculation: Some(KpiCalculator::kpi_30_retinal_screening),
    },
    KpiDefinition {
        number: 31,
        attribute_name: "kpi_31_foot_examination",
        label: "Foot Examination (%)",
        calculation: Some(KpiCalculator::kpi_31_foot_examination),
    },
    KpiDefinition {
        number: 321,
        attribute_name: "kpi_32_1_health_check_completion_rate",
        label: "Health check completion rate (%)",
        calculation: Some(KpiCalculator::kpi_32_1_health_check_completion_rate),
    },
    KpiDefinition {
        number: 322,
        attribute_name: "kpi_32_2_health_check_lt_12yo",
        label: "Health Checks (Less than 12 years)",
        calculation: Some(KpiCalculator::kpi_32_2_health_check_lt_12yo),
    },
    KpiDefinition {
        number: 323,
        attribute_name: "kpi_32_3_health_check_gte_12yo",
        label: "Health Checks (12 years and over)",
        calculation: Some(KpiCalculator::kpi_32_3_health_check_gte_12yo),
    },
    KpiDefinition {
        number: 33,
        attribute_name: "kpi_33_hba1c_4plus",
        label: "HbA1c 4+ (%)",
        calculation: Some(KpiCalculator::kpi_33_hba1c_4plus),
    },
    KpiDefinition {
        number: 34,
        attribute_name: "kpi_34_psychological_assessment",
        label: "Psychological assessment (%)",
        calculation: Some(KpiCalculator::kpi_34_psychological_assessment),
    },
    KpiDefinition {
        number: 35,
        attribute_name: "kpi_35_smoking_status_screened",
        label: "Smoking status screened (%)",
        calculation: Some(KpiCalculator::kpi_35_smoking_status_screened),
    },
    KpiDefinition {
        number: 36,
        attribute_name: "kpi_36_referral_to_smoking_cessation_service",
        label: "Referral to smoking cessation service (%)",
        calculation: Some(KpiCalculator::kpi_36_referral_to_smoking_cessation_service),
    },
    KpiDefinition {
        number: 37,
        attribute_name: "kpi_37_additional_dietetic_appointment_offered",
        label: "Additional dietetic appointment offered (%)",
        calculation: Some(KpiCalculator::kpi_37_additional_dietetic_appointment_offered),
    },
    KpiDefinition {
        number: 38,
        attribute_name: "kpi_38_patients_attending_additional_dietetic_appointment",
        label: "Patients attending additional dietetic appointment (%)",
        calculation: Some(KpiCalculator::kpi_38_patients_attending_additional_dietetic_appointment),
    },
    KpiDefinition {
        number: 39,
        attribute_name: "kpi_39_influenza_immunisation_recommended",
        label: "Influenza immunisation recommended (%)",
        calculation: Some(KpiCalculator::kpi_39_influenza_immunisation_recommended),
    },
    KpiDefinition {
        number: 40,
        attribute_name: "kpi_40_sick_day_rules_advice",
        label: "Sick day rules advice (%)",
        calculation: Some(KpiCalculator::kpi_40_sick_day_rules_advice),
    },
    KpiDefinition {
        number: 41,
        attribute_name: "kpi_41_coeliac_disease_screening",
        label: "Coeliac disease screening (%)",
        calculation: Some(KpiCalculator::kpi_41_coeliac_disease_screening),
    },
    KpiDefinition {
        number: 42,
        attribute_name: "kpi_42_thyroid_disease_screening",
        label: "Thyroid disease screening (%)",
        calculation: Some(KpiCalculator::kpi_42_thyroid_disease_screening),
    },
    KpiDefinition {
        number: 43,
        attribute_name: "kpi_43_carbohydrate_counting_education",
        label: "Carbohydrate counting education (%)",
        calculation: Some(KpiCalculator::kpi_43_carbohydrate_counting_education),
    },
    KpiDefinition {
        number: 44,
        attribute_name: "kpi_44_mean_hba1c",
        label: "Mean HbA1c",
        calculation: Some(KpiCalculator::kpi_44_mean_hba1c),
    },
    KpiDefinition {
        number: 45,
        attribute_name: "kpi_45_median_hba1c",
        label: "Median HbA1c",
        calculation: Some(KpiCalculator::kpi_45_median_hba1c),
    },
    KpiDefinition {
        number: 46,
        attribute_name: "kpi_46_number_of_admissions",
        label: "Number of admissions",
        calculation: Some(KpiCalculator::kpi_46_number_of_admissions),
    },
    KpiDefinition {
        number: 47,
        attribute_name: "kpi_47_number_of_dka_admissions",
        label: "Number of DKA admissions",
        calculation: Some(KpiCalculator::kpi_47_number_of_dka_admissions),
    },
    KpiDefinition {
        number: 48,
        attribute_name: "kpi_48_required_additional_psychological_support",
        label: "Required additional psychological support",
        calculation: Some(KpiCalculator::kpi_48_required_additional_psychological_support),
    },
    KpiDefinition {
        number: 49,
        attribute_name: "kpi_49_albuminuria_present",
        label: "Albuminuria present",
        calculation: Some(KpiCalculator::kpi_49_albuminuria_present),
    },
];

/// Iterates the registry in report order.
pub fn definitions() -> impl Iterator<Item = &'static KpiDefinition> {
    KPI_REGISTRY.iter()
}

/// Looks up a registry row by KPI number.
#[must_use]
pub fn definition_for(number: u16) -> Option<&'static KpiDefinition> {
    KPI_REGISTRY
        .iter()
        .find(|definition| definition.number == number)
}

/// Report key for a KPI number.
#[must_use]
pub fn attribute_name(number: u16) -> Option<&'static str> {
    definition_for(number).map(|definition| definition.attribute_name)
}

/// Display label for a KPI number.
#[must_use]
pub fn rendered_label(number: u16) -> Option<&'static str> {
    definition_for(number).map(|definition| definition.label)
}
