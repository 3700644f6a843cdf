//! Fictional patient generation.
//!
//! Deterministic synthetic cohorts for demos and tests. Patients are built
//! for a single audit period with age-banded anthropometrics and an HbA1c
//! control profile, then given one clinic visit per audit quarter and one
//! annual review carrying the yearly checks.

use chrono::{Days, Months, NaiveDate};
use log::debug;
use rand::prelude::*;
use rand::seq::IndexedRandom;

use crate::calendar;
use crate::error::Result;
use crate::models::{Patient, Transfer, Visit, codes};

/// Age bands used to shape fictional observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRange {
    /// Birth to primary school age
    Age0To4,
    /// Primary school age
    Age5To10,
    /// Early secondary school age
    Age11To15,
    /// Late secondary school age
    Age16To19,
    /// Young adult
    Age20To25,
}

impl AgeRange {
    /// All bands, youngest first.
    pub const ALL: [Self; 5] = [
        Self::Age0To4,
        Self::Age5To10,
        Self::Age11To15,
        Self::Age16To19,
        Self::Age20To25,
    ];

    /// Inclusive age bounds in whole years at the audit start.
    const fn years(self) -> (u32, u32) {
        match self {
            Self::Age0To4 => (0, 4),
            Self::Age5To10 => (5, 10),
            Self::Age11To15 => (11, 15),
            Self::Age16To19 => (16, 19),
            Self::Age20To25 => (20, 25),
        }
    }

    /// Height and weight bounds: (height min, height max, weight min,
    /// weight max) in cm and kg.
    const fn height_weight_bounds(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Age0To4 => (50.0, 110.0, 10.0, 20.0),
            Self::Age5To10 => (110.0, 150.0, 20.0, 40.0),
            Self::Age11To15 => (150.0, 170.0, 40.0, 70.0),
            Self::Age16To19 | Self::Age20To25 => (170.0, 190.0, 60.0, 90.0),
        }
    }

    /// Blood pressure bounds: (diastolic min, diastolic max, systolic min,
    /// systolic max) in mmHg.
    const fn blood_pressure_bounds(self) -> (u32, u32, u32, u32) {
        match self {
            Self::Age0To4 => (40, 50, 80, 90),
            Self::Age5To10 => (40, 50, 90, 100),
            Self::Age11To15 => (50, 60, 95, 105),
            Self::Age16To19 | Self::Age20To25 => (60, 70, 110, 130),
        }
    }
}

/// Glycaemic control profile shaping generated HbA1c values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HbA1cTargetRange {
    /// On target: 48-58 mmol/mol
    Target,
    /// Above target: 58-85 mmol/mol
    Above,
    /// Well above target: 85-120 mmol/mol
    WellAbove,
}

impl HbA1cTargetRange {
    /// All profiles.
    pub const ALL: [Self; 3] = [Self::Target, Self::Above, Self::WellAbove];

    /// Inclusive HbA1c bounds in mmol/mol.
    const fn bounds(self) -> (u32, u32) {
        match self {
            Self::Target => (48, 58),
            Self::Above => (58, 85),
            Self::WellAbove => (85, 120),
        }
    }
}

/// Builder for deterministic fictional cohorts within one audit period.
#[derive(Debug)]
pub struct FakePatientCreator {
    audit_start_date: NaiveDate,
    audit_end_date: NaiveDate,
    rng: StdRng,
    serial: u32,
}

impl FakePatientCreator {
    /// Resolves the audit period containing `date_in_audit`. A seed fixes
    /// the generated cohort; without one the generator draws from OS
    /// entropy.
    pub fn new(date_in_audit: NaiveDate, seed: Option<u64>) -> Result<Self> {
        let (audit_start_date, audit_end_date) = calendar::audit_period_for_date(date_in_audit)?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            audit_start_date,
            audit_end_date,
            rng,
            serial: 0,
        })
    }

    /// First day of the resolved audit period.
    #[must_use]
    pub fn audit_start_date(&self) -> NaiveDate {
        self.audit_start_date
    }

    /// Last day of the resolved audit period.
    #[must_use]
    pub fn audit_end_date(&self) -> NaiveDate {
        self.audit_end_date
    }

    /// Builds `count` Type 1 patients in `age_range`, each registered
    /// with the unit `pz_code`.
    ///
    /// Patients are diagnosed before the audit period where their age
    /// allows and carry one clinic visit per audit quarter plus one
    /// annual review, so the under-20 bands land wholly inside
    /// Measures 1 and 5.
    pub fn build_patients(&mut self, count: usize, age_range: AgeRange, pz_code: &str) -> Vec<Patient> {
        let patients: Vec<Patient> = (0..count)
            .map(|_| self.build_patient(age_range, pz_code))
            .collect();
        debug!("Generated {count} fictional patients in {age_range:?} for unit {pz_code}");
        patients
    }

    fn build_patient(&mut self, age_range: AgeRange, pz_code: &str) -> Patient {
        let date_of_birth = self.random_date_of_birth(age_range);
        let diagnosis_date = self.random_diagnosis_date(date_of_birth);
        let target_range = *HbA1cTargetRange::ALL
            .choose(&mut self.rng)
            .unwrap_or(&HbA1cTargetRange::Target);

        let mut visits: Vec<Visit> = calendar::quarters_for_audit_period(
            self.audit_start_date,
            self.audit_end_date,
        )
        .iter()
        .map(|&(quarter_start, quarter_end)| {
            let visit_date = self.random_date(quarter_start, quarter_end);
            self.clinic_visit(visit_date, age_range, target_range)
        })
        .collect();
        let review_date = self.random_date(self.audit_start_date, self.audit_end_date);
        visits.push(self.annual_review_visit(review_date));

        self.serial += 1;
        Patient {
            // Synthetic range reserved for test data
            nhs_number: Some(format!("999{:07}", self.serial)),
            sex: Some(*codes::SEX_TYPES.choose(&mut self.rng).unwrap_or(&codes::SEX_NOT_KNOWN)),
            date_of_birth: Some(date_of_birth),
            postcode: Some("SW1A 1AA".to_string()),
            ethnicity: None,
            index_of_multiple_deprivation_quintile: Some(self.rng.random_range(1..=5)),
            diabetes_type: Some(codes::TYPE_1_DIABETES),
            diagnosis_date: Some(diagnosis_date),
            death_date: None,
            gp_practice_ods_code: Some("G85004".to_string()),
            gp_practice_postcode: Some("SE23 1HU".to_string()),
            visits,
            transfers: vec![Transfer::to_unit(pz_code)],
        }
    }

    /// A clinic visit: measurements, HbA1c, treatment, glucose monitoring
    /// and blood pressure, all dated to the visit.
    fn clinic_visit(
        &mut self,
        visit_date: NaiveDate,
        age_range: AgeRange,
        target_range: HbA1cTargetRange,
    ) -> Visit {
        let (height_min, height_max, weight_min, weight_max) = age_range.height_weight_bounds();
        let (diastolic_min, diastolic_max, systolic_min, systolic_max) =
            age_range.blood_pressure_bounds();
        let (hba1c_min, hba1c_max) = target_range.bounds();

        let treatment = *[
            codes::TREATMENT_ONE_TO_THREE_INJECTIONS,
            codes::TREATMENT_FOUR_OR_MORE_INJECTIONS,
            codes::TREATMENT_INSULIN_PUMP,
            codes::TREATMENT_ONE_TO_THREE_INJECTIONS_PLUS_OTHER,
            codes::TREATMENT_FOUR_OR_MORE_INJECTIONS_PLUS_OTHER,
            codes::TREATMENT_INSULIN_PUMP_PLUS_OTHER,
        ]
        .choose(&mut self.rng)
        .unwrap_or(&codes::TREATMENT_ONE_TO_THREE_INJECTIONS);
        let closed_loop_system = if codes::INSULIN_PUMP_REGIMENS.contains(&treatment) {
            codes::CLOSED_LOOP_SYSTEMS.choose(&mut self.rng).copied()
        } else {
            None
        };

        Visit {
            visit_date: Some(visit_date),
            height: Some(round2(self.rng.random_range(height_min..=height_max))),
            weight: Some(round2(self.rng.random_range(weight_min..=weight_max))),
            height_weight_observation_date: Some(visit_date),
            hba1c: Some(f64::from(self.rng.random_range(hba1c_min..=hba1c_max))),
            hba1c_format: Some(codes::HBA1C_FORMAT_MMOL_MOL),
            hba1c_date: Some(visit_date),
            treatment: Some(treatment),
            closed_loop_system,
            glucose_monitoring: Some(self.rng.random_range(1..=4)),
            diastolic_blood_pressure: Some(self.rng.random_range(diastolic_min..=diastolic_max)),
            systolic_blood_pressure: Some(self.rng.random_range(systolic_min..=systolic_max)),
            blood_pressure_observation_date: Some(visit_date),
            ..Visit::default()
        }
    }

    /// An annual review visit: the yearly checks outside the routine
    /// clinic set, all dated to the visit.
    fn annual_review_visit(&mut self, visit_date: NaiveDate) -> Visit {
        Visit {
            visit_date: Some(visit_date),
            foot_examination_observation_date: Some(visit_date),
            retinal_screening_observation_date: Some(visit_date),
            retinal_screening_result: codes::RETINAL_SCREENING_RESULTS
                .choose(&mut self.rng)
                .copied(),
            albumin_creatinine_ratio: Some(f64::from(self.rng.random_range(0..=300))),
            albumin_creatinine_ratio_date: Some(visit_date),
            albuminuria_stage: Some(self.rng.random_range(1..=3)),
            total_cholesterol: Some(round2(self.rng.random_range(2.0..=7.0))),
            total_cholesterol_date: Some(visit_date),
            thyroid_function_date: Some(visit_date),
            thyroid_treatment_status: Some(self.rng.random_range(1..=3)),
            coeliac_screen_date: Some(visit_date),
            gluten_free_diet: Some(self.rng.random_range(codes::YES..=codes::UNKNOWN)),
            smoking_status: codes::SMOKING_SCREENED_STATUSES.choose(&mut self.rng).copied(),
            smoking_cessation_referral_date: Some(visit_date),
            carbohydrate_counting_level_three_education_date: Some(visit_date),
            flu_immunisation_recommended_date: Some(visit_date),
            ketone_meter_training: Some(self.rng.random_range(codes::YES..=codes::UNKNOWN)),
            sick_day_rules_training_date: Some(visit_date),
            ..Visit::default()
        }
    }

    /// A date of birth putting the patient inside `age_range` at the
    /// audit start.
    fn random_date_of_birth(&mut self, age_range: AgeRange) -> NaiveDate {
        let (min_years, max_years) = age_range.years();
        // One day past the cutoff keeps the oldest candidate inside the band
        let earliest =
            self.audit_start_date - Months::new(12 * (max_years + 1)) + Days::new(1);
        let latest = self.audit_start_date - Months::new(12 * min_years);
        self.random_date(earliest, latest)
    }

    /// A diagnosis date between birth and the day before the audit period,
    /// so generated patients complete a year of care. Patients born inside
    /// the period are diagnosed at birth instead.
    fn random_diagnosis_date(&mut self, date_of_birth: NaiveDate) -> NaiveDate {
        let latest = self.audit_start_date - Days::new(1);
        if date_of_birth >= latest {
            return date_of_birth;
        }
        self.random_date(date_of_birth, latest)
    }

    fn random_date(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days().max(0) as u64;
        start + Days::new(self.rng.random_range(0..=span))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
