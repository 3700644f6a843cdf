#[cfg(test)]
mod tests {
    use npda_kpi::models::codes;
    use npda_kpi::{Patient, Visit};

    use crate::utils::{calculator_for, counts, date, eligible_patient};

    fn patient_with_monitor(nhs_number: &str, method: u8) -> Patient {
        Patient {
            visits: vec![Visit {
                visit_date: Some(date(2024, 5, 1)),
                glucose_monitoring: Some(method),
                ..Visit::default()
            }],
            ..eligible_patient(nhs_number)
        }
    }

    #[test]
    fn test_kpi_21_flash_and_kpi_22_realtime_cgm() {
        let patients = vec![
            patient_with_monitor("4000000001", codes::GLUCOSE_MONITORING_FLASH),
            patient_with_monitor("4000000002", codes::GLUCOSE_MONITORING_MODIFIED_FLASH),
            patient_with_monitor(
                "4000000003",
                codes::GLUCOSE_MONITORING_REALTIME_CGM_WITH_ALARMS,
            ),
            eligible_patient("4000000004"),
        ];

        let calculator = calculator_for(patients);
        assert_eq!(
            counts(&calculator.kpi_21_flash_glucose_monitor()),
            (4, 0, 2, 2)
        );
        assert_eq!(
            counts(&calculator.kpi_22_real_time_cgm_with_alarms()),
            (4, 0, 1, 3)
        );
    }

    #[test]
    fn test_kpi_23_runs_over_newly_diagnosed_patients() {
        let patients = vec![
            // Diagnosed inside the period and using a real time CGM
            Patient {
                diagnosis_date: Some(date(2024, 7, 1)),
                ..patient_with_monitor(
                    "4000000001",
                    codes::GLUCOSE_MONITORING_REALTIME_CGM_WITH_ALARMS,
                )
            },
            // Same monitor, but an established diagnosis
            patient_with_monitor(
                "4000000002",
                codes::GLUCOSE_MONITORING_REALTIME_CGM_WITH_ALARMS,
            ),
        ];

        let calculator = calculator_for(patients);
        assert_eq!(
            counts(&calculator.kpi_23_type1_real_time_cgm_with_alarms()),
            (1, 1, 1, 0)
        );
    }

    #[test]
    fn test_kpi_24_most_recent_pump_entry_decides() {
        let pump_visit = |visit_date, closed_loop_system| Visit {
            visit_date: Some(visit_date),
            treatment: Some(codes::TREATMENT_INSULIN_PUMP),
            closed_loop_system,
            ..Visit::default()
        };

        let patients = vec![
            // Closed loop recorded on the later of two pump visits
            Patient {
                visits: vec![
                    pump_visit(date(2024, 5, 1), None),
                    pump_visit(date(2024, 6, 1), Some(codes::CLOSED_LOOP_LICENCED)),
                ],
                ..eligible_patient("4000000001")
            },
            // Closed loop recorded earlier, but the most recent pump entry
            // has none
            Patient {
                visits: vec![
                    pump_visit(date(2024, 5, 1), Some(codes::CLOSED_LOOP_LICENCED)),
                    pump_visit(date(2024, 6, 1), None),
                ],
                ..eligible_patient("4000000002")
            },
            // Not on a pump at all, so outside the KPI 24 denominator
            eligible_patient("4000000003"),
        ];

        let calculator = calculator_for(patients);
        assert_eq!(
            counts(&calculator.kpi_24_hybrid_closed_loop_system()),
            (2, 1, 1, 1)
        );
    }

    #[test]
    fn test_kpi_24_counts_pump_plus_other_medication_regimens() {
        let patients = vec![Patient {
            visits: vec![Visit {
                visit_date: Some(date(2024, 5, 1)),
                treatment: Some(codes::TREATMENT_INSULIN_PUMP_PLUS_OTHER),
                closed_loop_system: Some(codes::CLOSED_LOOP_DIY),
                ..Visit::default()
            }],
            ..eligible_patient("4000000001")
        }];

        let calculator = calculator_for(patients);
        assert_eq!(
            counts(&calculator.kpi_24_hybrid_closed_loop_system()),
            (1, 0, 1, 0)
        );
    }
}
