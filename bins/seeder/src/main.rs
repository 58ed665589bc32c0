//! Sample data seeder for local development.
//!
//! Registers a handful of patients and doctors, books appointments and issues
//! invoices in each supported currency, all through the same validation and
//! valuation as the API.
//!
//! Usage: cargo run --bin seeder

use serde_json::{Value, json};
use vera_core::billing::InvoiceDraft;
use vera_core::clinic::{AppointmentInput, DoctorInput, NotificationInput, PatientInput};
use vera_db::entities::patients;
use vera_db::{
    AppointmentRepository, DoctorRepository, InvoiceRepository, NotificationRepository,
    PatientRepository,
};
use vera_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    println!("Connecting to database...");
    let db = vera_db::connect(&config.database).await?;

    let patient_repo = PatientRepository::new(db.clone());
    if !patient_repo.list().await?.is_empty() {
        println!("Patients already present, skipping seed.");
        return Ok(());
    }

    println!("Seeding patients...");
    let patients = seed_patients(&patient_repo).await?;

    println!("Seeding doctors...");
    let doctor_repo = DoctorRepository::new(db.clone());
    let mut doctor_ids = Vec::new();
    for (name, specialisation, availability) in [
        ("Dr. Mbarga", "Cardiology", "Mon-Wed"),
        ("Dr. Fotso", "Pediatrics", "Thu-Sat"),
    ] {
        let input: DoctorInput = serde_json::from_value(json!({
            "name": name,
            "specialisation": specialisation,
            "availability": availability,
        }))?;
        let doctor = doctor_repo.create(input.normalize()?).await?;
        println!("  Added {}", doctor.name);
        doctor_ids.push(doctor.id);
    }

    println!("Seeding appointments...");
    let appointment_repo = AppointmentRepository::new(db.clone());
    let today = chrono::Utc::now().date_naive();
    for (patient, doctor_id) in patients.iter().zip(doctor_ids.iter().cycle()) {
        let input: AppointmentInput = serde_json::from_value(json!({
            "patientId": patient.id.to_string(),
            "doctorId": doctor_id.to_string(),
            "date": today.format("%Y-%m-%d").to_string(),
            "time": "09:30",
            "reason": "Routine check-up",
        }))?;
        appointment_repo.create(input.normalize()?).await?;
    }

    println!("Seeding invoices...");
    let invoice_repo = InvoiceRepository::new(db.clone());
    let invoice_date = today.format("%Y-%m-%d").to_string();
    let bodies = [
        json!({"currency": "FCFA", "amountOriginal": 15000, "vatRate": 0.1925, "status": "PAID", "paymentMethod": "MOMO"}),
        json!({"currency": "EUR", "amountOriginal": 120, "exchangeRate": 655.957, "vatRate": 0.1925}),
        json!({"currency": "USD", "amountOriginal": "80.50", "exchangeRate": "600", "status": "PAID", "paymentMethod": "CARD"}),
    ];
    for (patient, body) in patients.iter().zip(bodies) {
        let draft = invoice_draft(patient, &invoice_date, body)?;
        let invoice = invoice_repo.create(draft.prepare()?).await?;
        println!(
            "  Invoice for {}: {} FCFA",
            invoice.patient_name, invoice.total_fcfa
        );
    }

    let notification: NotificationInput = serde_json::from_value(json!({
        "message": "Sample data loaded",
        "type": "INFO",
    }))?;
    NotificationRepository::new(db)
        .create(notification.normalize()?)
        .await?;

    println!("Seeding complete!");
    Ok(())
}

async fn seed_patients(repo: &PatientRepository) -> anyhow::Result<Vec<patients::Model>> {
    let mut created = Vec::new();
    for (first, last, age, gender) in [
        ("Awa", "Ndiaye", 34, "FEMALE"),
        ("Jean", "Kamga", 58, "MALE"),
        ("Chantal", "Essomba", 7, "FEMALE"),
    ] {
        let input: PatientInput = serde_json::from_value(json!({
            "firstName": first,
            "lastName": last,
            "age": age,
            "gender": gender,
            "phone": "+237 600 00 00 00",
        }))?;
        let patient = repo.create(input.normalize()?).await?;
        println!("  Registered {}", patient.full_name());
        created.push(patient);
    }
    Ok(created)
}

fn invoice_draft(
    patient: &patients::Model,
    invoice_date: &str,
    mut body: Value,
) -> anyhow::Result<InvoiceDraft> {
    if let Some(fields) = body.as_object_mut() {
        fields.insert("patientId".to_string(), json!(patient.id.to_string()));
        fields.insert("services".to_string(), json!("Consultation"));
        fields.insert("invoiceDate".to_string(), json!(invoice_date));
    }
    Ok(serde_json::from_value(body)?)
}
