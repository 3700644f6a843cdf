#[cfg(test)]
mod tests {
    use npda_kpi::models::codes;
    use npda_kpi::{Patient, Visit};

    use crate::utils::{date, eligible_patient};

    #[test]
    fn test_partial_patient_json_fills_defaults() {
        let json = r#"{
            "nhs_number": "4000000001",
            "date_of_birth": "2014-06-15",
            "diabetes_type": 1
        }"#;

        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.nhs_number.as_deref(), Some("4000000001"));
        assert_eq!(patient.date_of_birth, Some(date(2014, 6, 15)));
        assert_eq!(patient.diabetes_type, Some(codes::TYPE_1_DIABETES));
        assert_eq!(patient.diagnosis_date, None);
        assert!(patient.visits.is_empty());
        assert!(patient.transfers.is_empty());
    }

    #[test]
    fn test_partial_visit_json_fills_defaults() {
        let json = r#"{
            "visit_date": "2024-05-01",
            "hba1c": 48.5,
            "hba1c_date": "2024-05-01"
        }"#;

        let visit: Visit = serde_json::from_str(json).unwrap();
        assert_eq!(visit.visit_date, Some(date(2024, 5, 1)));
        assert_eq!(visit.hba1c, Some(48.5));
        assert_eq!(visit.hba1c_date, Some(date(2024, 5, 1)));
        assert_eq!(visit.height, None);
        assert_eq!(visit.treatment, None);
    }

    #[test]
    fn test_patient_round_trips_through_json() {
        let mut patient = eligible_patient("4000000001");
        patient.visits.push(Visit {
            visit_date: Some(date(2024, 7, 10)),
            hba1c: Some(52.0),
            hba1c_format: Some(codes::HBA1C_FORMAT_MMOL_MOL),
            hba1c_date: Some(date(2024, 7, 10)),
            treatment: Some(codes::TREATMENT_INSULIN_PUMP),
            closed_loop_system: Some(codes::CLOSED_LOOP_LICENCED),
            ..Visit::default()
        });

        let json = serde_json::to_string(&patient).unwrap();
        let decoded: Patient = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, patient);
    }
}
