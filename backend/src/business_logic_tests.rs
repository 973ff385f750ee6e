#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::metrics;
    use crate::models::{
        Grade, MilkEntry, QualityTest, SatisfactionSurvey, Shift, TestStatus,
    };
    use crate::store::Store;
    use crate::validation::{self, FormInput};

    fn entry(farmer: &str, qty: &str, shift: Shift) -> MilkEntry {
        MilkEntry {
            farmer_id: farmer.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            quantity: qty.to_string(),
            shift,
            fat_percentage: Some(4.1),
            rate_per_litre: None,
        }
    }

    /// Every add grows the collection by one and lands at the head.
    #[test]
    fn test_milk_additions_land_at_head() {
        let mut store = Store::new();
        for (i, farmer) in ["F0001", "F0002", "F0003", "F0004"].iter().enumerate() {
            let added = store.add_milk_entry(entry(farmer, "10", Shift::Morning));
            assert_eq!(store.milk_entries().len(), i + 1);
            assert_eq!(store.milk_entries().at(0).unwrap().id, added.id);
        }
    }

    /// Update by index replaces exactly one record; delete keeps relative order.
    #[test]
    fn test_update_and_delete_preserve_order() {
        let mut store = Store::new();
        for farmer in ["F0005", "F0004", "F0003", "F0002", "F0001"] {
            store.add_milk_entry(entry(farmer, "5", Shift::Evening));
        }
        let before: Vec<_> = store.milk_entries().as_slice().to_vec();

        store
            .update_milk_entry(2, entry("F0003", "7.5", Shift::Morning))
            .unwrap();
        let after = store.milk_entries().as_slice();
        for (i, (old, new)) in before.iter().zip(after).enumerate() {
            if i == 2 {
                assert_eq!(old.id, new.id);
                assert_eq!(new.record.quantity, "7.5");
                assert_eq!(new.record.shift, Shift::Morning);
            } else {
                assert_eq!(old, new);
            }
        }

        store.delete_milk_entry(1).unwrap();
        let ids: Vec<_> = store.milk_entries().iter().map(|s| s.id.clone()).collect();
        let expected: Vec<_> = before
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 1)
            .map(|(_, s)| s.id.clone())
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_one_survey_per_employee() {
        let mut store = Store::new();
        for job in 1..=5 {
            store.upsert_survey(SatisfactionSurvey {
                employee_id: "EMP0007".to_string(),
                job_satisfaction: job,
                work_life_balance: 6,
                compensation_satisfaction: 7,
                work_environment_rating: 9,
                survey_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            });
        }
        assert_eq!(store.surveys().len(), 1);
        assert_eq!(store.surveys().at(0).unwrap().record.job_satisfaction, 5);
    }

    #[test]
    fn test_documented_satisfaction_example() {
        let survey = SatisfactionSurvey {
            employee_id: "EMP0001".to_string(),
            job_satisfaction: 8,
            work_life_balance: 6,
            compensation_satisfaction: 7,
            work_environment_rating: 9,
            survey_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        };
        let score = metrics::weighted_satisfaction(&survey, 5);
        assert!((score - 69.5).abs() < 1e-9);
    }

    #[test]
    fn test_distribution_over_many_grades() {
        let grades = [
            Grade::APlus,
            Grade::B,
            Grade::C,
            Grade::C,
            Grade::D,
            Grade::BPlus,
            Grade::A,
        ];
        let tests: Vec<QualityTest> = grades
            .iter()
            .map(|g| QualityTest {
                batch_id: "BATCH1000".to_string(),
                sample_id: "SAMPLE100000".to_string(),
                farmer_id: "F1000".to_string(),
                fat: 3.9,
                protein: 3.1,
                lactose: 4.6,
                snf: 8.4,
                ph: 6.8,
                bacteria_count: 20_000,
                overall_grade: *g,
                status: TestStatus::Pending,
                test_date: None,
            })
            .collect();
        let shares = metrics::generate_quality_distribution(&tests);
        assert_eq!(shares.len(), 6);
        let total: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
        let counted: usize = shares.iter().map(|s| s.count).sum();
        assert_eq!(counted, grades.len());
    }

    #[test]
    fn test_documented_validation_examples() {
        let vehicle = validation::normalize_vehicle_number("ap09cd1234");
        assert_eq!(vehicle, "AP09CD1234");
        assert!(validation::validate_vehicle_number(&vehicle).is_none());
        assert!(validation::validate_vehicle_number("AP9CD1234").is_some());

        assert!(validation::validate_employee_id("eng1234").is_some());
        assert!(validation::validate_employee_id("ENG1234").is_none());
    }

    /// Quantities written with non-ASCII digits are rejected before they
    /// can reach the collection totals.
    #[test]
    fn test_milk_form_rejects_non_ascii_digits() {
        let err = entry("F0001", "\u{ff11}\u{ff10}", Shift::Morning)
            .into_valid()
            .unwrap_err();
        match err {
            crate::error::DairyError::Validation(fields) => {
                assert!(fields.get("quantity").is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(entry("F0001", "10", Shift::Morning).into_valid().is_ok());
    }
}
