//! Transfer entity definition.
//!
//! Records a patient's membership of a Paediatric Diabetes Unit (PDU),
//! identified by its PZ code, and the date they left that service if they
//! have. A patient who moved between units carries one Transfer per
//! membership.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// PDU membership record for a patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    /// PZ code of the paediatric diabetes unit caring for the patient
    pub pz_code: String,
    /// PZ code of the previous unit, when the patient moved
    pub previous_pz_code: Option<String>,
    /// Date the patient left this service, if they have
    pub date_leaving_service: Option<NaiveDate>,
    /// Reason the patient left this service
    pub reason_leaving_service: Option<String>,
}

impl Transfer {
    /// Membership of the unit with the given PZ code, with no leaving date.
    #[must_use]
    pub fn to_unit(pz_code: &str) -> Self {
        Self {
            pz_code: pz_code.to_owned(),
            ..Self::default()
        }
    }
}
