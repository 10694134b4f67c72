use anyhow::Context;
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use trimed::utils::sanitize::format_cpf;
use trimed::{
    IntakeService, MemoryPatientStore, MemoryQuestionnaireStore, PatientRegistration,
    QuestionnaireForm, RiskFlags,
};

/// One intake record from the demo input file: a registration plus an
/// optional questionnaire submitted in the same visit.
#[derive(Debug, Deserialize)]
struct IntakeRecord {
    patient: PatientRegistration,
    questionnaire: Option<QuestionnaireForm>,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut service = IntakeService::new(MemoryPatientStore::new(), MemoryQuestionnaireStore::new());

    let records = match std::env::args().nth(1) {
        Some(path) => load_records(Path::new(&path))?,
        None => sample_records(),
    };
    info!("processing {} intake records", records.len());

    for record in records {
        let cpf = record.patient.cpf.clone();
        service
            .register_patient(record.patient)
            .with_context(|| format!("registering patient {cpf}"))?;
        if let Some(form) = record.questionnaire {
            let result = service
                .submit_questionnaire(&cpf, form)
                .with_context(|| format!("scoring questionnaire for {cpf}"))?;
            info!(
                "{}: automatic {} (total {}), effective {}",
                format_cpf(&cpf),
                result.auto_priority,
                result.total,
                result.effective()
            );
        }
    }

    println!("Waitlist:");
    for (position, entry) in service.waitlist()?.iter().enumerate() {
        println!(
            "{:>3}. [{}] {} ({})",
            position + 1,
            entry.priority,
            entry.name,
            format_cpf(&entry.cpf)
        );
    }

    Ok(())
}

fn load_records(path: &Path) -> anyhow::Result<Vec<IntakeRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading intake file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing intake file {}", path.display()))
}

fn sample_records() -> Vec<IntakeRecord> {
    vec![
        IntakeRecord {
            patient: PatientRegistration {
                cpf: "111.444.777-35".to_string(),
                sus: None,
                name: "Ana Souza".to_string(),
                blood_type: "O+".to_string(),
                birth_date: chrono::NaiveDate::from_ymd_opt(1950, 3, 12),
                gender: "F".to_string(),
                height: "162".to_string(),
                weight: "84".to_string(),
                cep: "01310-100".to_string(),
                district: Some("Bela Vista".to_string()),
                street: Some("Avenida Paulista".to_string()),
            },
            questionnaire: Some(QuestionnaireForm {
                flags: RiskFlags::new(true, false, true, false),
                medication: "sim".to_string(),
                medication_detail: Some("losartana".to_string()),
                allergies: "nao".to_string(),
                pressure: "150/95".to_string(),
                temperature: Some(39.2),
                ..QuestionnaireForm::default()
            }),
        },
        IntakeRecord {
            patient: PatientRegistration {
                cpf: "529.982.247-25".to_string(),
                sus: Some("123456789012345".to_string()),
                name: "Bruno Lima".to_string(),
                blood_type: "A-".to_string(),
                birth_date: chrono::NaiveDate::from_ymd_opt(1992, 11, 2),
                gender: "M".to_string(),
                height: "180".to_string(),
                weight: "75".to_string(),
                cep: "20040002".to_string(),
                district: None,
                street: None,
            },
            questionnaire: Some(QuestionnaireForm {
                flags: RiskFlags::default(),
                pressure: "118/76".to_string(),
                temperature: Some(36.6),
                ..QuestionnaireForm::default()
            }),
        },
    ]
}
