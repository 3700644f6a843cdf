#[cfg(test)]
mod tests {
    use npda_kpi::models::codes;
    use npda_kpi::{Patient, Transfer, Visit};

    use crate::utils::{
        TEST_PZ_CODE, calculator_for, counts, date, eligible_patient, eligible_teen_patient,
    };

    #[test]
    fn test_kpi_1_splits_eligible_from_ineligible() {
        let mut patients = vec![
            eligible_patient("4000000001"),
            eligible_patient("4000000002"),
            eligible_patient("4000000003"),
        ];
        // Only visit predates the audit period
        for serial in 4..=7 {
            patients.push(Patient {
                visits: vec![Visit::dated(date(2024, 3, 15))],
                ..eligible_patient(&format!("400000000{serial}"))
            });
        }
        // Aged 25 or over at the period start
        for serial in 8..=11 {
            patients.push(Patient {
                date_of_birth: Some(date(1998, 1, 1)),
                ..eligible_patient(&format!("40000000{serial}"))
            });
        }

        let calculator = calculator_for(patients);
        assert_eq!(counts(&calculator.kpi_1_total_eligible()), (3, 8, 3, 8));
    }

    #[test]
    fn test_kpi_1_requires_identifiers() {
        let patients = vec![
            eligible_patient("4000000001"),
            Patient {
                nhs_number: None,
                ..eligible_patient("unused")
            },
            Patient {
                date_of_birth: None,
                ..eligible_patient("4000000003")
            },
        ];

        let calculator = calculator_for(patients);
        assert_eq!(counts(&calculator.kpi_1_total_eligible()), (1, 2, 1, 2));
    }

    #[test]
    fn test_kpi_2_counts_in_period_diagnoses() {
        let patients = vec![
            eligible_patient("4000000001"),
            Patient {
                diagnosis_date: Some(date(2024, 7, 1)),
                ..eligible_patient("4000000002")
            },
        ];

        let calculator = calculator_for(patients);
        assert_eq!(counts(&calculator.kpi_2_total_new_diagnoses()), (1, 1, 1, 1));
    }

    #[test]
    fn test_kpi_3_and_4_split_type_1_by_age() {
        let patients = vec![
            eligible_patient("4000000001"),
            eligible_teen_patient("4000000002"),
            Patient {
                diabetes_type: Some(codes::TYPE_2_DIABETES),
                ..eligible_patient("4000000003")
            },
        ];

        let calculator = calculator_for(patients);
        assert_eq!(counts(&calculator.kpi_3_total_t1dm()), (2, 1, 2, 1));
        assert_eq!(counts(&calculator.kpi_4_total_t1dm_gte_12yo()), (1, 2, 1, 2));
    }

    #[test]
    fn test_kpi_4_age_boundary_sits_at_the_twelfth_birthday() {
        let patients = vec![
            // Twelve exactly on the first day of the period
            Patient {
                date_of_birth: Some(date(2012, 4, 1)),
                ..eligible_patient("4000000001")
            },
            // A day younger
            Patient {
                date_of_birth: Some(date(2012, 4, 2)),
                ..eligible_patient("4000000002")
            },
        ];

        let calculator = calculator_for(patients);
        assert_eq!(counts(&calculator.kpi_4_total_t1dm_gte_12yo()), (1, 1, 1, 1));
    }

    #[test]
    fn test_kpi_5_excludes_interrupted_years_of_care() {
        let patients = vec![
            eligible_patient("4000000001"),
            Patient {
                diagnosis_date: Some(date(2024, 6, 1)),
                ..eligible_patient("4000000002")
            },
            Patient {
                transfers: vec![Transfer {
                    pz_code: TEST_PZ_CODE.to_string(),
                    date_leaving_service: Some(date(2024, 8, 1)),
                    ..Transfer::default()
                }],
                ..eligible_patient("4000000003")
            },
            Patient {
                death_date: Some(date(2024, 9, 1)),
                ..eligible_patient("4000000004")
            },
        ];

        let calculator = calculator_for(patients);
        assert_eq!(counts(&calculator.kpi_1_total_eligible()), (4, 0, 4, 0));
        assert_eq!(
            counts(&calculator.kpi_5_total_t1dm_complete_year()),
            (1, 3, 1, 3)
        );
    }

    #[test]
    fn test_kpi_6_needs_a_care_observation_on_a_dated_visit() {
        let observed_visit = Visit {
            visit_date: Some(date(2024, 5, 1)),
            height: Some(160.0),
            weight: Some(50.0),
            height_weight_observation_date: Some(date(2024, 5, 1)),
            ..Visit::default()
        };

        let patients = vec![
            Patient {
                visits: vec![observed_visit.clone()],
                ..eligible_teen_patient("4000000001")
            },
            // Dated visit but no observation dates
            eligible_teen_patient("4000000002"),
            // Observation but under twelve
            Patient {
                visits: vec![observed_visit],
                ..eligible_patient("4000000003")
            },
        ];

        let calculator = calculator_for(patients);
        assert_eq!(
            counts(&calculator.kpi_6_total_t1dm_complete_year_gte_12yo()),
            (1, 2, 1, 2)
        );
    }

    #[test]
    fn test_kpi_6_observation_must_share_the_visit_with_its_date() {
        // One dated visit without observations, one undated visit with an
        // in-period observation: neither alone satisfies the measure
        let patients = vec![Patient {
            visits: vec![
                Visit::dated(date(2024, 5, 1)),
                Visit {
                    hba1c_date: Some(date(2024, 6, 1)),
                    ..Visit::default()
                },
            ],
            ..eligible_teen_patient("4000000001")
        }];

        let calculator = calculator_for(patients);
        assert_eq!(
            counts(&calculator.kpi_6_total_t1dm_complete_year_gte_12yo()),
            (0, 1, 0, 1)
        );
    }

    #[test]
    fn test_kpi_7_counts_new_type_1_diagnoses_on_observations_alone() {
        let patients = vec![
            // No dated visit at all, but an in-period care observation
            Patient {
                diagnosis_date: Some(date(2024, 6, 1)),
                visits: vec![Visit {
                    hba1c_date: Some(date(2024, 6, 5)),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000001")
            },
            Patient {
                diabetes_type: Some(codes::TYPE_2_DIABETES),
                diagnosis_date: Some(date(2024, 6, 1)),
                visits: vec![Visit {
                    hba1c_date: Some(date(2024, 6, 5)),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000002")
            },
        ];

        let calculator = calculator_for(patients);
        assert_eq!(
            counts(&calculator.kpi_7_total_new_diagnoses_t1dm()),
            (1, 1, 1, 1)
        );
        // Without a dated visit neither patient reaches Measure 1
        assert_eq!(counts(&calculator.kpi_1_total_eligible()), (0, 2, 0, 2));
    }

    #[test]
    fn test_kpi_8_deaths_and_kpi_9_service_transitions() {
        let patients = vec![
            eligible_patient("4000000001"),
            Patient {
                death_date: Some(date(2024, 9, 1)),
                ..eligible_patient("4000000002")
            },
            Patient {
                transfers: vec![Transfer {
                    pz_code: TEST_PZ_CODE.to_string(),
                    date_leaving_service: Some(date(2024, 8, 1)),
                    ..Transfer::default()
                }],
                ..eligible_patient("4000000003")
            },
        ];

        let calculator = calculator_for(patients);
        assert_eq!(counts(&calculator.kpi_8_total_deaths()), (1, 2, 1, 2));
        assert_eq!(
            counts(&calculator.kpi_9_total_service_transitions()),
            (1, 2, 1, 2)
        );
    }

    #[test]
    fn test_kpi_10_gluten_free_entry_is_not_cleared_by_later_visits() {
        let patients = vec![
            Patient {
                visits: vec![
                    Visit {
                        visit_date: Some(date(2024, 5, 1)),
                        gluten_free_diet: Some(codes::YES),
                        ..Visit::default()
                    },
                    Visit {
                        visit_date: Some(date(2024, 6, 1)),
                        gluten_free_diet: Some(codes::NO),
                        ..Visit::default()
                    },
                ],
                ..eligible_patient("4000000001")
            },
            Patient {
                visits: vec![Visit {
                    visit_date: Some(date(2024, 5, 1)),
                    gluten_free_diet: Some(codes::NO),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000002")
            },
        ];

        let calculator = calculator_for(patients);
        assert_eq!(counts(&calculator.kpi_10_total_coeliacs()), (1, 1, 1, 1));
    }

    #[test]
    fn test_kpi_11_thyroid_treatment_and_kpi_12_ketone_training() {
        let patients = vec![
            Patient {
                visits: vec![Visit {
                    visit_date: Some(date(2024, 5, 1)),
                    thyroid_treatment_status: Some(codes::THYROID_TREATMENT_THYROXINE),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000001")
            },
            Patient {
                visits: vec![Visit {
                    visit_date: Some(date(2024, 5, 1)),
                    thyroid_treatment_status: Some(1),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000002")
            },
            Patient {
                visits: vec![Visit {
                    visit_date: Some(date(2024, 5, 1)),
                    ketone_meter_training: Some(codes::YES),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000003")
            },
        ];

        let calculator = calculator_for(patients);
        assert_eq!(counts(&calculator.kpi_11_total_thyroids()), (1, 2, 1, 2));
        assert_eq!(
            counts(&calculator.kpi_12_total_ketone_test_equipment()),
            (1, 2, 1, 2)
        );
    }
}
