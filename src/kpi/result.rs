//! KPI result and report types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Marker recorded in the report for registry entries with no calculation.
pub const NOT_IMPLEMENTED: &str = "Not implemented";

/// One slot of a [`KpiResult`].
///
/// Most KPIs count patients (KPI 32.1 counts health checks). KPIs 44/45
/// carry a continuous HbA1c statistic in their passed slot and mark the
/// failed slot not applicable, which serializes as `-1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KpiValue {
    /// Patient or health-check count
    Count(u32),
    /// Continuous statistic
    Value(f64),
    /// Slot unused by this KPI; serializes as -1
    NotApplicable,
}

impl KpiValue {
    /// The count, for counted slots.
    #[must_use]
    pub fn as_count(self) -> Option<u32> {
        match self {
            Self::Count(count) => Some(count),
            _ => None,
        }
    }

    /// The continuous value, for KPI 44/45 passed slots.
    #[must_use]
    pub fn as_value(self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl From<u32> for KpiValue {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

impl Serialize for KpiValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Count(count) => serializer.serialize_u32(*count),
            Self::Value(value) => serializer.serialize_f64(*value),
            Self::NotApplicable => serializer.serialize_i32(-1),
        }
    }
}

/// Outcome of one KPI calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiResult {
    /// Patients in the KPI's denominator cohort
    pub total_eligible: u32,
    /// Patients in the working set but outside the cohort
    pub total_ineligible: u32,
    /// Patients (or checks) meeting the numerator, or the KPI 44/45 statistic
    pub total_passed: KpiValue,
    /// Eligible patients (or expected checks) not meeting the numerator
    pub total_failed: KpiValue,
}

impl KpiResult {
    /// A fully counted result.
    #[must_use]
    pub fn from_counts(
        total_eligible: u32,
        total_ineligible: u32,
        total_passed: u32,
        total_failed: u32,
    ) -> Self {
        Self {
            total_eligible,
            total_ineligible,
            total_passed: KpiValue::Count(total_passed),
            total_failed: KpiValue::Count(total_failed),
        }
    }

    /// A continuous result (KPIs 44/45): the value rides in the passed slot
    /// and the failed slot is not applicable.
    #[must_use]
    pub fn from_value(total_eligible: u32, total_ineligible: u32, value: f64) -> Self {
        Self {
            total_eligible,
            total_ineligible,
            total_passed: KpiValue::Value(value),
            total_failed: KpiValue::NotApplicable,
        }
    }
}

/// A calculated KPI paired with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatedKpi {
    /// The counts
    #[serde(flatten)]
    pub result: KpiResult,
    /// Human-readable KPI title
    pub kpi_label: &'static str,
}

/// Report entry for one KPI: a calculated result, or the literal string
/// `"Not implemented"` for vacant registry slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KpiOutcome {
    /// Result with its label
    Calculated(CalculatedKpi),
    /// Vacant registry slot
    NotImplemented(&'static str),
}

impl KpiOutcome {
    pub(crate) fn calculated(result: KpiResult, kpi_label: &'static str) -> Self {
        Self::Calculated(CalculatedKpi { result, kpi_label })
    }

    pub(crate) fn not_implemented() -> Self {
        Self::NotImplemented(NOT_IMPLEMENTED)
    }

    /// The calculated result, if this KPI is implemented.
    #[must_use]
    pub fn result(&self) -> Option<&KpiResult> {
        match self {
            Self::Calculated(calculated) => Some(&calculated.result),
            Self::NotImplemented(_) => None,
        }
    }

    /// The display label, if this KPI is implemented.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Calculated(calculated) => Some(calculated.kpi_label),
            Self::NotImplemented(_) => None,
        }
    }
}

/// A full KPI calculation run.
///
/// `calculated_kpi_values` preserves registry order (1..=31, 32.1, 32.2,
/// 32.3, 33..=49) and serializes as a JSON object keyed by attribute name.
#[derive(Debug, Clone, Serialize)]
pub struct KpiReport {
    /// When the calculation ran
    pub calculation_datetime: DateTime<Utc>,
    /// First day of the audit period
    pub audit_start_date: NaiveDate,
    /// Last day of the audit period
    pub audit_end_date: NaiveDate,
    /// Size of the working set the engine ran over
    pub total_patients_count: u32,
    /// KPI outcomes in registry order
    #[serde(serialize_with = "kpi_values_as_map")]
    pub calculated_kpi_values: Vec<(&'static str, KpiOutcome)>,
}

impl KpiReport {
    /// Looks up a KPI outcome by attribute name.
    #[must_use]
    pub fn kpi(&self, attribute_name: &str) -> Option<&KpiOutcome> {
        self.calculated_kpi_values
            .iter()
            .find(|(name, _)| *name == attribute_name)
            .map(|(_, outcome)| outcome)
    }
}

fn kpi_values_as_map<S: Serializer>(
    values: &[(&'static str, KpiOutcome)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(values.len()))?;
    for (attribute_name, outcome) in values {
        map.serialize_entry(attribute_name, outcome)?;
    }
    map.end()
}
