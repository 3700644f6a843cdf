#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use npda_kpi::{Patient, Visit};

    use crate::utils::{calculator_for, counts, date, eligible_patient};

    /// A patient diagnosed on `diagnosed`, carrying one visit with the
    /// given coeliac screen date.
    fn newly_diagnosed(nhs_number: &str, diagnosed: NaiveDate, screen: Option<NaiveDate>) -> Patient {
        Patient {
            diagnosis_date: Some(diagnosed),
            visits: vec![Visit {
                visit_date: Some(diagnosed),
                coeliac_screen_date: screen,
                ..Visit::default()
            }],
            ..eligible_patient(nhs_number)
        }
    }

    #[test]
    fn test_kpi_41_screen_must_fall_within_90_days_of_diagnosis() {
        let diagnosed = date(2024, 6, 1);
        let patients = vec![
            newly_diagnosed("4000000001", diagnosed, Some(date(2024, 8, 25))),
            // Screened 96 days after diagnosis
            newly_diagnosed("4000000002", diagnosed, Some(date(2024, 9, 5))),
        ];

        let calculator = calculator_for(patients);
        assert_eq!(
            counts(&calculator.kpi_41_coeliac_disease_screening()),
            (2, 0, 1, 1)
        );
    }

    #[test]
    fn test_kpis_41_and_42_exclude_diagnoses_near_the_period_end() {
        let patients = vec![
            Patient {
                diagnosis_date: Some(date(2024, 6, 1)),
                visits: vec![Visit {
                    visit_date: Some(date(2024, 6, 1)),
                    thyroid_function_date: Some(date(2024, 6, 15)),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000001")
            },
            // Diagnosed within 90 days of the period end: the screening
            // window cannot complete, so the patient is ineligible here
            Patient {
                diagnosis_date: Some(date(2025, 2, 1)),
                visits: vec![Visit {
                    visit_date: Some(date(2025, 2, 1)),
                    thyroid_function_date: Some(date(2025, 2, 10)),
                    ..Visit::default()
                }],
                ..eligible_patient("4000000002")
            },
        ];

        let calculator = calculator_for(patients);
        // Both are new Type 1 diagnoses
        assert_eq!(
            counts(&calculator.kpi_7_total_new_diagnoses_t1dm()),
            (2, 0, 2, 0)
        );
        assert_eq!(
            counts(&calculator.kpi_42_thyroid_disease_screening()),
            (1, 1, 1, 0)
        );
    }

    #[test]
    fn test_kpi_43_education_window_and_cutoff() {
        let education_visit = |diagnosed: NaiveDate, educated: NaiveDate| Visit {
            visit_date: Some(diagnosed),
            // An in-period observation keeps the patient in the measure;
            // the education date itself is not a care observation
            hba1c_date: Some(diagnosed),
            carbohydrate_counting_level_three_education_date: Some(educated),
            ..Visit::default()
        };

        let patients = vec![
            // Educated exactly seven days before diagnosis
            Patient {
                diagnosis_date: Some(date(2024, 6, 1)),
                visits: vec![education_visit(date(2024, 6, 1), date(2024, 5, 25))],
                ..eligible_patient("4000000001")
            },
            // Educated fifteen days after diagnosis, one day too late
            Patient {
                diagnosis_date: Some(date(2024, 6, 1)),
                visits: vec![education_visit(date(2024, 6, 1), date(2024, 6, 16))],
                ..eligible_patient("4000000002")
            },
            // Diagnosed within fourteen days of the period end
            Patient {
                diagnosis_date: Some(date(2025, 3, 25)),
                visits: vec![education_visit(date(2025, 3, 25), date(2025, 3, 26))],
                ..eligible_patient("4000000003")
            },
        ];

        let calculator = calculator_for(patients);
        assert_eq!(
            counts(&calculator.kpi_43_carbohydrate_counting_education()),
            (2, 1, 1, 1)
        );
    }
}
