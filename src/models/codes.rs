//! Published NPDA value sets.
//!
//! Clinical fields on [`Patient`](super::Patient) and [`Visit`](super::Visit)
//! carry coded integers from the national audit's published value sets. The
//! engine only branches on a handful of codes, so these stay plain integers
//! with named constants rather than one enum per questionnaire item.

/// Sex codes per the NHS person gender code standard.
pub const SEX_NOT_KNOWN: u8 = 0;
pub const SEX_MALE: u8 = 1;
pub const SEX_FEMALE: u8 = 2;
pub const SEX_NOT_SPECIFIED: u8 = 9;

/// All valid sex codes.
pub const SEX_TYPES: [u8; 4] = [SEX_NOT_KNOWN, SEX_MALE, SEX_FEMALE, SEX_NOT_SPECIFIED];

/// Type 1 insulin-dependent diabetes mellitus.
pub const TYPE_1_DIABETES: u8 = 1;
/// Type 2 non-insulin-dependent diabetes mellitus.
pub const TYPE_2_DIABETES: u8 = 2;

// Treatment regimen (item 20)
/// 1 = One-three injections per day.
pub const TREATMENT_ONE_TO_THREE_INJECTIONS: u8 = 1;
/// 2 = Four or more injections per day.
pub const TREATMENT_FOUR_OR_MORE_INJECTIONS: u8 = 2;
/// 3 = Insulin pump.
pub const TREATMENT_INSULIN_PUMP: u8 = 3;
/// 4 = One-three injections plus other blood glucose lowering medication.
pub const TREATMENT_ONE_TO_THREE_INJECTIONS_PLUS_OTHER: u8 = 4;
/// 5 = Four or more injections plus other blood glucose lowering medication.
pub const TREATMENT_FOUR_OR_MORE_INJECTIONS_PLUS_OTHER: u8 = 5;
/// 6 = Insulin pump therapy plus other blood glucose lowering medication.
pub const TREATMENT_INSULIN_PUMP_PLUS_OTHER: u8 = 6;
/// 7 = Dietary management alone.
pub const TREATMENT_DIETARY_MANAGEMENT: u8 = 7;
/// 8 = Dietary management plus other blood glucose lowering medication.
pub const TREATMENT_DIETARY_MANAGEMENT_PLUS_OTHER: u8 = 8;
/// 9 = Unknown.
pub const TREATMENT_UNKNOWN: u8 = 9;

/// Regimens that include an insulin pump (items 3 and 6).
pub const INSULIN_PUMP_REGIMENS: [u8; 2] =
    [TREATMENT_INSULIN_PUMP, TREATMENT_INSULIN_PUMP_PLUS_OTHER];

/// All published treatment regimen codes.
pub const TREATMENT_TYPES: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

// Closed loop system (item 21)
/// 2 = Closed loop system (licenced).
pub const CLOSED_LOOP_LICENCED: u8 = 2;
/// 3 = Closed loop system (DIY, unlicenced).
pub const CLOSED_LOOP_DIY: u8 = 3;
/// 4 = Closed loop system (licence status unknown).
pub const CLOSED_LOOP_LICENCE_UNKNOWN: u8 = 4;

/// Codes indicating any closed loop system is in use.
pub const CLOSED_LOOP_SYSTEMS: [u8; 3] =
    [CLOSED_LOOP_LICENCED, CLOSED_LOOP_DIY, CLOSED_LOOP_LICENCE_UNKNOWN];

// Glucose monitoring (item 22)
/// 2 = Flash glucose monitor.
pub const GLUCOSE_MONITORING_FLASH: u8 = 2;
/// 3 = Modified flash glucose monitor.
pub const GLUCOSE_MONITORING_MODIFIED_FLASH: u8 = 3;
/// 4 = Real time continuous glucose monitor with alarms.
pub const GLUCOSE_MONITORING_REALTIME_CGM_WITH_ALARMS: u8 = 4;

/// Flash-style monitors (plain or modified).
pub const FLASH_GLUCOSE_MONITORS: [u8; 2] =
    [GLUCOSE_MONITORING_FLASH, GLUCOSE_MONITORING_MODIFIED_FLASH];

// HbA1c format (item 18)
/// 1 = mmol/mol (IFCC).
pub const HBA1C_FORMAT_MMOL_MOL: u8 = 1;
/// 2 = % (DCCT).
pub const HBA1C_FORMAT_PERCENT: u8 = 2;

// Retinal screening result (item 28)
/// 1 = Normal.
pub const RETINAL_SCREENING_NORMAL: u8 = 1;
/// 2 = Abnormal.
pub const RETINAL_SCREENING_ABNORMAL: u8 = 2;

/// Results counting as a completed retinal screen.
pub const RETINAL_SCREENING_RESULTS: [u8; 2] =
    [RETINAL_SCREENING_NORMAL, RETINAL_SCREENING_ABNORMAL];

// Albuminuria stage (item 31)
/// 2 = Microalbuminuria.
pub const ALBUMINURIA_MICROALBUMINURIA: u8 = 2;
/// 3 = Macroalbuminuria.
pub const ALBUMINURIA_MACROALBUMINURIA: u8 = 3;

/// Stages indicating albuminuria is present.
pub const ALBUMINURIA_PRESENT_STAGES: [u8; 2] =
    [ALBUMINURIA_MICROALBUMINURIA, ALBUMINURIA_MACROALBUMINURIA];

// Thyroid treatment status (item 35)
/// 2 = On thyroxine for hypothyroidism.
pub const THYROID_TREATMENT_THYROXINE: u8 = 2;
/// 3 = On antithyroid medication for hyperthyroidism.
pub const THYROID_TREATMENT_ANTITHYROID: u8 = 3;

/// Statuses indicating treated thyroid disease.
pub const THYROID_TREATED_STATUSES: [u8; 2] =
    [THYROID_TREATMENT_THYROXINE, THYROID_TREATMENT_ANTITHYROID];

// Yes / no / unknown items
/// 1 = Yes.
pub const YES: u8 = 1;
/// 2 = No.
pub const NO: u8 = 2;
/// 3 = Unknown.
pub const UNKNOWN: u8 = 3;

// Smoking status (item 40)
/// 1 = Non-smoker.
pub const SMOKING_NON_SMOKER: u8 = 1;
/// 2 = Current smoker.
pub const SMOKING_CURRENT_SMOKER: u8 = 2;

/// Statuses counting as a completed smoking screen.
pub const SMOKING_SCREENED_STATUSES: [u8; 2] = [SMOKING_NON_SMOKER, SMOKING_CURRENT_SMOKER];

// Hospital admission reason (item 50)
/// 2 = Diabetic ketoacidosis.
pub const ADMISSION_REASON_DKA: u8 = 2;

/// All valid admission reason codes (2 = DKA).
pub const HOSPITAL_ADMISSION_REASONS: [u8; 5] = [1, 2, 3, 4, 5];
