//! Patient entity definition.
//!
//! The audit's unit of analysis. A patient owns the visits submitted for
//! them and the transfers recording which paediatric diabetes unit has cared
//! for them. Demographic and diagnosis fields are optional because they are
//! sourced from unit submissions; eligibility rules check presence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Transfer, Visit};

/// A patient in the audit, with their related visits and transfers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Patient {
    /// NHS number, the national patient identifier
    pub nhs_number: Option<String>,
    /// Sex code per the NHS person gender code standard
    pub sex: Option<u8>,
    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Home postcode
    pub postcode: Option<String>,
    /// Ethnicity code
    pub ethnicity: Option<String>,
    /// Index of multiple deprivation quintile for the home postcode
    pub index_of_multiple_deprivation_quintile: Option<u8>,
    /// Diabetes type code (1 = Type 1)
    pub diabetes_type: Option<u8>,
    /// Date of diabetes diagnosis
    pub diagnosis_date: Option<NaiveDate>,
    /// Date of death, if the patient has died
    pub death_date: Option<NaiveDate>,
    /// ODS code of the patient's GP practice
    pub gp_practice_ods_code: Option<String>,
    /// Postcode of the patient's GP practice
    pub gp_practice_postcode: Option<String>,
    /// Visits submitted for this patient
    pub visits: Vec<Visit>,
    /// PDU memberships for this patient
    pub transfers: Vec<Transfer>,
}

impl Patient {
    /// Age in completed years at `reference_date`, when the birth date is
    /// known and not in the future of the reference date.
    #[must_use]
    pub fn age_years_at(&self, reference_date: NaiveDate) -> Option<u32> {
        self.date_of_birth
            .and_then(|birth| reference_date.years_since(birth))
    }

    /// Whether the patient was alive on `date`. The death date itself counts
    /// as a day alive.
    #[must_use]
    pub fn was_alive_at(&self, date: NaiveDate) -> bool {
        match self.date_of_birth {
            Some(birth) => birth <= date && self.death_date.is_none_or(|death| death >= date),
            None => false,
        }
    }

    /// Whether the patient has a membership of the unit with `pz_code`.
    #[must_use]
    pub fn member_of_unit(&self, pz_code: &str) -> bool {
        self.transfers
            .iter()
            .any(|transfer| transfer.pz_code == pz_code)
    }
}
