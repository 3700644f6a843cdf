//! Visit entity definition.
//!
//! One row per clinic contact, carrying the questionnaire items recorded at
//! (or attributed to) that visit. Every field is optional: submissions arrive
//! from unit CSV uploads with whatever was captured, and the KPI rules test
//! presence explicitly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single audit visit with its observations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visit {
    /// Date of the clinic visit (item 3)
    pub visit_date: Option<NaiveDate>,

    // Measurements
    /// Height in cm (item 14)
    pub height: Option<f64>,
    /// Weight in kg (item 15)
    pub weight: Option<f64>,
    /// Observation date for height and weight (item 16)
    pub height_weight_observation_date: Option<NaiveDate>,

    // HbA1c
    /// HbA1c value (item 17)
    pub hba1c: Option<f64>,
    /// HbA1c result format (item 18)
    pub hba1c_format: Option<u8>,
    /// Observation date for HbA1c (item 19)
    pub hba1c_date: Option<NaiveDate>,

    // Treatment
    /// Treatment regimen (item 20)
    pub treatment: Option<u8>,
    /// Closed loop system in use (item 21)
    pub closed_loop_system: Option<u8>,

    // Glucose monitoring
    /// Blood glucose monitoring method (item 22)
    pub glucose_monitoring: Option<u8>,

    // Blood pressure
    /// Systolic blood pressure in mmHg (item 23)
    pub systolic_blood_pressure: Option<u32>,
    /// Diastolic blood pressure in mmHg (item 24)
    pub diastolic_blood_pressure: Option<u32>,
    /// Observation date for blood pressure (item 25)
    pub blood_pressure_observation_date: Option<NaiveDate>,

    // Foot care
    /// Foot examination date (item 26)
    pub foot_examination_observation_date: Option<NaiveDate>,

    // Retinal screening (DECS)
    /// Retinal screening date (item 27)
    pub retinal_screening_observation_date: Option<NaiveDate>,
    /// Retinal screening result (item 28)
    pub retinal_screening_result: Option<u8>,

    // Urinary albumin
    /// Albumin:creatinine ratio (item 29)
    pub albumin_creatinine_ratio: Option<f64>,
    /// Observation date for the albumin:creatinine ratio (item 30)
    pub albumin_creatinine_ratio_date: Option<NaiveDate>,
    /// Albuminuria stage (item 31)
    pub albuminuria_stage: Option<u8>,

    // Cholesterol
    /// Total cholesterol in mmol/L (item 32)
    pub total_cholesterol: Option<f64>,
    /// Observation date for total cholesterol (item 33)
    pub total_cholesterol_date: Option<NaiveDate>,

    // Thyroid
    /// Thyroid function observation date (item 34)
    pub thyroid_function_date: Option<NaiveDate>,
    /// Thyroid treatment status (item 35)
    pub thyroid_treatment_status: Option<u8>,

    // Coeliac
    /// Coeliac disease screening date (item 36)
    pub coeliac_screen_date: Option<NaiveDate>,
    /// On a gluten-free diet (item 37)
    pub gluten_free_diet: Option<u8>,

    // Psychology
    /// Psychological screening assessment date (item 38)
    pub psychological_screening_assessment_date: Option<NaiveDate>,
    /// Requires additional psychological support (item 39)
    pub psychological_additional_support_status: Option<u8>,

    // Smoking
    /// Smoking status (item 40)
    pub smoking_status: Option<u8>,
    /// Date of referral to smoking cessation service (item 41)
    pub smoking_cessation_referral_date: Option<NaiveDate>,

    // Dietetic care
    /// Level 3 carbohydrate counting education date (item 42)
    pub carbohydrate_counting_level_three_education_date: Option<NaiveDate>,
    /// Additional dietician appointment offered (item 43)
    pub dietician_additional_appointment_offered: Option<u8>,
    /// Additional dietician appointment date (item 44)
    pub dietician_additional_appointment_date: Option<NaiveDate>,

    // Sick day rules
    /// Trained to use blood ketone testing equipment (item 45)
    pub ketone_meter_training: Option<u8>,
    /// Sick day rules training date (item 46)
    pub sick_day_rules_training_date: Option<NaiveDate>,

    // Immunisation
    /// Influenza immunisation recommended date (item 47)
    pub flu_immunisation_recommended_date: Option<NaiveDate>,

    // Hospital admission
    /// Hospital admission date (item 48)
    pub hospital_admission_date: Option<NaiveDate>,
    /// Hospital discharge date (item 49)
    pub hospital_discharge_date: Option<NaiveDate>,
    /// Reason for admission (item 50)
    pub hospital_admission_reason: Option<u8>,
    /// Additional therapies during a DKA admission (item 51)
    pub dka_additional_therapies: Option<u8>,
    /// Free-text detail for other admission reasons (item 52)
    pub hospital_admission_other: Option<String>,
}

impl Visit {
    /// A visit dated `visit_date` with no observations recorded.
    #[must_use]
    pub fn dated(visit_date: NaiveDate) -> Self {
        Self {
            visit_date: Some(visit_date),
            ..Self::default()
        }
    }
}
