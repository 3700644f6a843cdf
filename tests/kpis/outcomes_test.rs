#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use npda_kpi::models::codes;
    use npda_kpi::{KpiValue, Patient, Visit};

    use crate::utils::{calculator_for, counts, date, eligible_patient};

    fn measured_visit(on: NaiveDate, hba1c: f64) -> Visit {
        Visit {
            visit_date: Some(on),
            hba1c: Some(hba1c),
            hba1c_date: Some(on),
            ..Visit::default()
        }
    }

    /// An eligible patient with one qualifying HbA1c measurement.
    fn patient_with_hba1c(nhs_number: &str, hba1c: f64) -> Patient {
        Patient {
            visits: vec![measured_visit(date(2024, 5, 1), hba1c)],
            ..eligible_patient(nhs_number)
        }
    }

    #[test]
    fn test_kpis_44_and_45_mean_versus_median() {
        let patients = vec![
            patient_with_hba1c("4000000001", 40.0),
            patient_with_hba1c("4000000002", 55.0),
            patient_with_hba1c("4000000003", 100.0),
        ];

        let calculator = calculator_for(patients);

        let mean = calculator.kpi_44_mean_hba1c();
        assert_eq!(mean.total_eligible, 3);
        assert_eq!(mean.total_ineligible, 0);
        assert_eq!(mean.total_passed.as_value(), Some(65.0));
        assert_eq!(mean.total_failed, KpiValue::NotApplicable);

        let median = calculator.kpi_45_median_hba1c();
        assert_eq!(median.total_passed.as_value(), Some(55.0));
        assert_eq!(median.total_failed, KpiValue::NotApplicable);
    }

    #[test]
    fn test_kpi_44_averages_each_patients_median() {
        let patients = vec![
            Patient {
                visits: vec![
                    measured_visit(date(2024, 5, 1), 40.0),
                    measured_visit(date(2024, 8, 1), 50.0),
                    measured_visit(date(2024, 11, 1), 90.0),
                ],
                ..eligible_patient("4000000001")
            },
            patient_with_hba1c("4000000002", 70.0),
        ];

        let calculator = calculator_for(patients);
        // Patient medians are 50 and 70
        assert_eq!(
            calculator.kpi_44_mean_hba1c().total_passed.as_value(),
            Some(60.0)
        );
    }

    #[test]
    fn test_kpis_44_and_45_default_to_zero_without_measurements() {
        let calculator = calculator_for(vec![eligible_patient("4000000001")]);

        let mean = calculator.kpi_44_mean_hba1c();
        assert_eq!(mean.total_eligible, 1);
        assert_eq!(mean.total_passed.as_value(), Some(0.0));

        let median = calculator.kpi_45_median_hba1c();
        assert_eq!(median.total_passed.as_value(), Some(0.0));
    }

    #[test]
    fn test_measurements_within_90_days_of_diagnosis_are_ignored() {
        // Diagnosed 10 April: measurements establish from 9 July
        let patients = vec![Patient {
            diagnosis_date: Some(date(2024, 4, 10)),
            visits: vec![
                measured_visit(date(2024, 5, 1), 90.0),
                measured_visit(date(2024, 7, 9), 60.0),
                measured_visit(date(2024, 8, 1), 50.0),
            ],
            ..eligible_patient("4000000001")
        }];

        let calculator = calculator_for(patients);
        // The early measurement drops out, leaving a median of 60 and 50
        assert_eq!(
            calculator.kpi_44_mean_hba1c().total_passed.as_value(),
            Some(55.0)
        );
    }

    #[test]
    fn test_kpi_46_admissions_and_kpi_47_dka_admissions() {
        let patients = vec![
            Patient {
                visits: vec![Visit {
                    visit_date: Some(date(2024, 5, 1)),
                    hospital_admission_reason: Some(1),
                    hospital_admission_date: Some(date(2024, 4, 20)),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000001")
            },
            // Admitted for DKA before the period, discharged inside it
            Patient {
                visits: vec![Visit {
                    visit_date: Some(date(2024, 5, 1)),
                    hospital_admission_reason: Some(codes::ADMISSION_REASON_DKA),
                    hospital_admission_date: Some(date(2024, 3, 20)),
                    hospital_discharge_date: Some(date(2024, 4, 5)),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000002")
            },
            eligible_patient("4000000003"),
        ];

        let calculator = calculator_for(patients);
        assert_eq!(counts(&calculator.kpi_46_number_of_admissions()), (3, 0, 2, 1));
        assert_eq!(
            counts(&calculator.kpi_47_number_of_dka_admissions()),
            (3, 0, 1, 2)
        );
    }

    #[test]
    fn test_admission_entirely_outside_the_period_does_not_count() {
        let patients = vec![Patient {
            visits: vec![Visit {
                visit_date: Some(date(2024, 5, 1)),
                hospital_admission_reason: Some(1),
                hospital_admission_date: Some(date(2024, 3, 1)),
                hospital_discharge_date: Some(date(2024, 3, 20)),
                ..Visit::default()
            }],
            ..eligible_patient("4000000001")
        }];

        let calculator = calculator_for(patients);
        assert_eq!(counts(&calculator.kpi_46_number_of_admissions()), (1, 0, 0, 1));
    }

    #[test]
    fn test_kpi_48_psychological_support_and_kpi_49_albuminuria() {
        let patients = vec![
            Patient {
                visits: vec![Visit {
                    visit_date: Some(date(2024, 5, 1)),
                    psychological_additional_support_status: Some(codes::YES),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000001")
            },
            Patient {
                visits: vec![Visit {
                    visit_date: Some(date(2024, 5, 1)),
                    albuminuria_stage: Some(codes::ALBUMINURIA_MICROALBUMINURIA),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000002")
            },
            // Normoalbuminuria does not count
            Patient {
                visits: vec![Visit {
                    visit_date: Some(date(2024, 5, 1)),
                    albuminuria_stage: Some(1),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000003")
            },
        ];

        let calculator = calculator_for(patients);
        assert_eq!(
            counts(&calculator.kpi_48_required_additional_psychological_support()),
            (3, 0, 1, 2)
        );
        assert_eq!(
            counts(&calculator.kpi_49_albuminuria_present()),
            (3, 0, 1, 2)
        );
    }
}
