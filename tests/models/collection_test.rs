#[cfg(test)]
mod tests {
    use npda_kpi::models::codes;
    use npda_kpi::{Patient, PatientCollection, Transfer};

    use crate::utils::{TEST_PZ_CODE, eligible_patient};

    #[test]
    fn test_add_and_lookup_by_nhs_number() {
        let mut collection = PatientCollection::new();
        assert!(collection.is_empty());

        collection.add(eligible_patient("4000000001"));
        collection.add(eligible_patient("4000000002"));

        assert_eq!(collection.count(), 2);
        assert!(!collection.is_empty());
        assert!(collection.get_by_nhs_number("4000000001").is_some());
        assert!(collection.get_by_nhs_number("4000000002").is_some());
        assert!(collection.get_by_nhs_number("4000000099").is_none());
    }

    #[test]
    fn test_collection_from_iterator() {
        let collection: PatientCollection = (1..=4)
            .map(|serial| eligible_patient(&format!("400000000{serial}")))
            .collect();
        assert_eq!(collection.count(), 4);
    }

    #[test]
    fn test_filter_by_pz_codes() {
        let mut collection = PatientCollection::new();
        collection.add(eligible_patient("4000000001"));
        collection.add(Patient {
            transfers: vec![Transfer::to_unit("PZ999")],
            ..eligible_patient("4000000002")
        });
        // A patient who moved units carries both memberships
        collection.add(Patient {
            transfers: vec![Transfer::to_unit(TEST_PZ_CODE), Transfer::to_unit("PZ999")],
            ..eligible_patient("4000000003")
        });

        let home = collection.filter_by_pz_codes(&[TEST_PZ_CODE.to_string()]);
        assert_eq!(home.len(), 2);

        let other = collection.filter_by_pz_codes(&["PZ999".to_string()]);
        assert_eq!(other.len(), 2);

        let both = collection.filter_by_pz_codes(&[TEST_PZ_CODE.to_string(), "PZ999".to_string()]);
        assert_eq!(both.len(), 3);

        let unknown = collection.filter_by_pz_codes(&["PZ000".to_string()]);
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_filter_by_predicate() {
        let mut collection = PatientCollection::new();
        collection.add(eligible_patient("4000000001"));
        collection.add(Patient {
            diabetes_type: Some(codes::TYPE_2_DIABETES),
            ..eligible_patient("4000000002")
        });

        let type_1 = collection.filter(|p| p.diabetes_type == Some(codes::TYPE_1_DIABETES));
        assert_eq!(type_1.len(), 1);
        assert_eq!(type_1[0].nhs_number.as_deref(), Some("4000000001"));
    }
}
