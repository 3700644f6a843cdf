//! Per-patient observation resolution.
//!
//! Helpers for reading a patient's visit history: locating the most recent
//! visit matching a predicate, testing date-bounded observations, and the
//! shared health-check predicates used by the care-process KPIs.

use chrono::NaiveDate;

use crate::models::{Patient, Visit};

/// The patient's most recent visit satisfying `predicate`.
///
/// Undated visits rank lowest. Visits sharing a date resolve to the
/// later-submitted record. The "most recent entry" KPIs test whether this
/// visit exists, so a matching entry on any visit qualifies the patient
/// even when later visits left the item blank.
pub(crate) fn latest_visit_matching<'p>(
    patient: &'p Patient,
    predicate: impl Fn(&Visit) -> bool,
) -> Option<&'p Visit> {
    patient
        .visits
        .iter()
        .filter(|visit| predicate(visit))
        .max_by_key(|visit| visit.visit_date)
}

/// Whether any of the patient's visits satisfies `predicate`.
pub(crate) fn has_visit(patient: &Patient, predicate: impl Fn(&Visit) -> bool) -> bool {
    patient.visits.iter().any(|visit| predicate(visit))
}

/// Number of the patient's visits satisfying `predicate`.
pub(crate) fn matching_visit_count(
    patient: &Patient,
    predicate: impl Fn(&Visit) -> bool,
) -> usize {
    patient.visits.iter().filter(|visit| predicate(visit)).count()
}

/// Whether an optional date falls inside the inclusive range.
pub(crate) fn date_in(date: Option<NaiveDate>, start: NaiveDate, end: NaiveDate) -> bool {
    date.is_some_and(|date| date >= start && date <= end)
}

/// Whether the visit carries any of the ten care observation dates inside
/// the range. A visit qualifies on its observation dates alone; the visit
/// date itself is not consulted here.
pub(crate) fn any_care_observation_date_in(visit: &Visit, start: NaiveDate, end: NaiveDate) -> bool {
    [
        visit.height_weight_observation_date,
        visit.hba1c_date,
        visit.blood_pressure_observation_date,
        visit.foot_examination_observation_date,
        visit.retinal_screening_observation_date,
        visit.albumin_creatinine_ratio_date,
        visit.total_cholesterol_date,
        visit.thyroid_function_date,
        visit.coeliac_screen_date,
        visit.psychological_screening_assessment_date,
    ]
    .into_iter()
    .any(|date| date_in(date, start, end))
}

/// HbA1c check: a result with its observation date inside the range.
pub(crate) fn hba1c_check(visit: &Visit, start: NaiveDate, end: NaiveDate) -> bool {
    visit.hba1c.is_some() && date_in(visit.hba1c_date, start, end)
}

/// BMI check: height and weight measured, observation date inside the range.
pub(crate) fn bmi_check(visit: &Visit, start: NaiveDate, end: NaiveDate) -> bool {
    visit.height.is_some()
        && visit.weight.is_some()
        && date_in(visit.height_weight_observation_date, start, end)
}

/// Thyroid check: a screen dated inside the range.
pub(crate) fn thyroid_check(visit: &Visit, start: NaiveDate, end: NaiveDate) -> bool {
    date_in(visit.thyroid_function_date, start, end)
}

/// Blood pressure check: a systolic reading with its observation date
/// inside the range. Diastolic is recorded but not required.
pub(crate) fn blood_pressure_check(visit: &Visit, start: NaiveDate, end: NaiveDate) -> bool {
    visit.systolic_blood_pressure.is_some()
        && date_in(visit.blood_pressure_observation_date, start, end)
}

/// Urinary albumin check: an ACR result with its date inside the range.
pub(crate) fn urinary_albumin_check(visit: &Visit, start: NaiveDate, end: NaiveDate) -> bool {
    visit.albumin_creatinine_ratio.is_some()
        && date_in(visit.albumin_creatinine_ratio_date, start, end)
}

/// Foot examination check: an examination dated inside the range.
pub(crate) fn foot_examination_check(visit: &Visit, start: NaiveDate, end: NaiveDate) -> bool {
    date_in(visit.foot_examination_observation_date, start, end)
}
