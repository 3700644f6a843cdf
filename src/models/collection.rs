//! In-memory patient collection.
//!
//! Stores patients behind [`Arc`] so that working sets handed to KPI
//! engines share the underlying records instead of cloning them. Patients
//! with an NHS number are additionally indexed for direct lookup.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use super::Patient;

/// A collection of audit patients.
#[derive(Debug, Clone, Default)]
pub struct PatientCollection {
    patients: Vec<Arc<Patient>>,
    nhs_number_index: FxHashMap<String, usize>,
}

impl PatientCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from owned patient records.
    #[must_use]
    pub fn from_patients(patients: Vec<Patient>) -> Self {
        let mut collection = Self::new();
        for patient in patients {
            collection.add(patient);
        }
        collection
    }

    /// Adds a patient, indexing them by NHS number when present. A duplicate
    /// NHS number re-points the index at the newest record.
    pub fn add(&mut self, patient: Patient) -> Arc<Patient> {
        let patient = Arc::new(patient);
        if let Some(nhs_number) = patient.nhs_number.clone() {
            self.nhs_number_index.insert(nhs_number, self.patients.len());
        }
        self.patients.push(Arc::clone(&patient));
        patient
    }

    /// Number of patients in the collection.
    #[must_use]
    pub fn count(&self) -> usize {
        self.patients.len()
    }

    /// Whether the collection holds no patients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// All patients, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Arc<Patient>] {
        &self.patients
    }

    /// Iterates over the patients in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Patient>> {
        self.patients.iter()
    }

    /// Looks up a patient by NHS number.
    #[must_use]
    pub fn get_by_nhs_number(&self, nhs_number: &str) -> Option<&Arc<Patient>> {
        self.nhs_number_index
            .get(nhs_number)
            .map(|&index| &self.patients[index])
    }

    /// Patients matching a predicate, in insertion order.
    pub fn filter(&self, predicate: impl Fn(&Patient) -> bool) -> Vec<Arc<Patient>> {
        self.patients
            .iter()
            .filter(|patient| predicate(patient))
            .cloned()
            .collect()
    }

    /// The distinct patients with a membership of any unit in `pz_codes`.
    #[must_use]
    pub fn filter_by_pz_codes(&self, pz_codes: &[String]) -> Vec<Arc<Patient>> {
        let codes: FxHashSet<&str> = pz_codes.iter().map(String::as_str).collect();
        self.filter(|patient| {
            patient
                .transfers
                .iter()
                .any(|transfer| codes.contains(transfer.pz_code.as_str()))
        })
    }
}

impl FromIterator<Patient> for PatientCollection {
    fn from_iter<I: IntoIterator<Item = Patient>>(iter: I) -> Self {
        Self::from_patients(iter.into_iter().collect())
    }
}
