#[cfg(test)]
mod tests {
    use trimed::models::types::Priority;
    use trimed::store::{
        MemoryPatientStore, MemoryQuestionnaireStore, PatientStore, QuestionnaireStore,
    };
    use trimed::{Patient, PatientUpdate, Questionnaire, RiskFlags, TriState, TriageError};

    fn patient(cpf: &str, name: &str) -> Patient {
        Patient::new(0, cpf.to_string(), name.to_string())
    }

    fn questionnaire(priority: Priority) -> Questionnaire {
        Questionnaire {
            flags: RiskFlags::default(),
            medication: TriState::No,
            medication_detail: None,
            allergies: TriState::No,
            allergy_detail: None,
            disease_history: TriState::Unknown,
            history_detail: None,
            pressure: "120/80".to_string(),
            temperature: Some(36.5),
            notes: None,
            auto_priority: priority,
            priority,
            age_years: Some(40),
            physician_crm: None,
        }
    }

    #[test]
    fn test_insert_assigns_ids_and_indexes_cpf() {
        let mut store = MemoryPatientStore::new();
        let first = store.insert(patient("52998224725", "Bruno Lima")).unwrap();
        let second = store.insert(patient("11144477735", "Ana Souza")).unwrap();
        assert_ne!(first, second);
        assert_eq!(store.count(), 2);

        let fetched = store.get(first).unwrap().unwrap();
        assert_eq!(fetched.cpf, "52998224725");
        let fetched = store.get_by_cpf("11144477735").unwrap().unwrap();
        assert_eq!(fetched.id, second);
        assert!(store.get_by_cpf("12345678909").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_cpf_is_rejected() {
        let mut store = MemoryPatientStore::new();
        store.insert(patient("52998224725", "Bruno Lima")).unwrap();
        let result = store.insert(patient("52998224725", "Impostor"));
        assert!(matches!(result, Err(TriageError::DuplicatePatient(_))));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_list_is_name_ordered() {
        let mut store = MemoryPatientStore::new();
        store.insert(patient("11144477735", "carla dias")).unwrap();
        store.insert(patient("52998224725", "Ana Souza")).unwrap();
        store.insert(patient("12345678909", "Bruno Lima")).unwrap();

        let names: Vec<String> = store
            .list()
            .unwrap()
            .iter()
            .map(|p| p.name.clone())
            .collect();
        // Case-insensitive name order
        assert_eq!(names, vec!["Ana Souza", "Bruno Lima", "carla dias"]);
    }

    #[test]
    fn test_update_touches_only_given_fields() {
        let mut store = MemoryPatientStore::new();
        let mut p = patient("52998224725", "Bruno Lima");
        p.height_cm = Some(180.0);
        store.insert(p).unwrap();

        let updated = store
            .update_by_cpf(
                "52998224725",
                PatientUpdate {
                    weight_kg: Some(82.0),
                    ..PatientUpdate::default()
                },
            )
            .unwrap();
        assert!(updated);

        let fetched = store.get_by_cpf("52998224725").unwrap().unwrap();
        assert_eq!(fetched.weight_kg, Some(82.0));
        assert_eq!(fetched.height_cm, Some(180.0));

        let missing = store
            .update_by_cpf("12345678909", PatientUpdate::default())
            .unwrap();
        assert!(!missing);
    }

    #[test]
    fn test_delete_by_cpf() {
        let mut store = MemoryPatientStore::new();
        store.insert(patient("52998224725", "Bruno Lima")).unwrap();
        assert!(store.delete_by_cpf("52998224725").unwrap());
        assert!(!store.delete_by_cpf("52998224725").unwrap());
        assert_eq!(store.count(), 0);
        assert!(store.get_by_cpf("52998224725").unwrap().is_none());
    }

    #[test]
    fn test_questionnaire_upsert_replaces() {
        let mut store = MemoryQuestionnaireStore::new();
        assert!(store.get_by_patient(1).unwrap().is_none());

        store.upsert(1, questionnaire(Priority::Urgent)).unwrap();
        let stored = store.get_by_patient(1).unwrap().unwrap();
        assert_eq!(stored.priority, Priority::Urgent);

        store.upsert(1, questionnaire(Priority::Emergency)).unwrap();
        let stored = store.get_by_patient(1).unwrap().unwrap();
        assert_eq!(stored.priority, Priority::Emergency);

        assert!(store.delete_by_patient(1).unwrap());
        assert!(!store.delete_by_patient(1).unwrap());
    }
}
