//! Unit tests for clinic validation.

use super::*;
use chrono::{NaiveDate, NaiveTime};
use rstest::rstest;
use uuid::Uuid;

fn from_json<T: serde::de::DeserializeOwned>(json: serde_json::Value) -> T {
    serde_json::from_value(json).unwrap()
}

mod patients {
    use super::*;

    #[test]
    fn test_minimal_patient_gets_defaults() {
        let input: PatientInput =
            from_json(serde_json::json!({"firstName": "  Awa ", "lastName": "Ndiaye"}));
        let patient = input.normalize().unwrap();

        assert_eq!(patient.first_name, "Awa");
        assert_eq!(patient.last_name, "Ndiaye");
        assert_eq!(patient.age, None);
        assert_eq!(patient.gender, Gender::Other);
        assert_eq!(patient.phone, "");
        assert_eq!(patient.address, "");
    }

    #[rstest]
    #[case(serde_json::json!({"lastName": "Ndiaye"}))]
    #[case(serde_json::json!({"firstName": "Awa"}))]
    #[case(serde_json::json!({"firstName": "   ", "lastName": "Ndiaye"}))]
    fn test_missing_name_rejected(#[case] body: serde_json::Value) {
        let input: PatientInput = from_json(body);
        assert_eq!(input.normalize(), Err(ClinicError::MissingPatientName));
    }

    #[rstest]
    #[case(serde_json::json!(34), Some(34))]
    #[case(serde_json::json!("34"), Some(34))]
    #[case(serde_json::json!(0), Some(0))]
    #[case(serde_json::json!(""), None)]
    #[case(serde_json::Value::Null, None)]
    fn test_age_accepted(#[case] age: serde_json::Value, #[case] expected: Option<i32>) {
        let input: PatientInput =
            from_json(serde_json::json!({"firstName": "A", "lastName": "B", "age": age}));
        assert_eq!(input.normalize().unwrap().age, expected);
    }

    #[rstest]
    #[case(serde_json::json!(-1))]
    #[case(serde_json::json!(12.5))]
    #[case(serde_json::json!("old"))]
    #[case(serde_json::json!(true))]
    fn test_age_rejected(#[case] age: serde_json::Value) {
        let input: PatientInput =
            from_json(serde_json::json!({"firstName": "A", "lastName": "B", "age": age}));
        assert_eq!(input.normalize(), Err(ClinicError::InvalidAge));
    }

    #[rstest]
    #[case(Some("FEMALE"), Gender::Female)]
    #[case(Some("male"), Gender::Male)]
    #[case(Some("unknown"), Gender::Other)]
    #[case(None, Gender::Other)]
    fn test_gender_fallback(#[case] input: Option<&str>, #[case] expected: Gender) {
        assert_eq!(Gender::from_input(input), expected);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(full_name(" Awa", "Ndiaye "), "Awa Ndiaye");
    }
}

mod doctors {
    use super::*;

    #[test]
    fn test_doctor_create() {
        let input: DoctorInput = from_json(serde_json::json!({
            "name": "Dr. Mbarga",
            "specialisation": "Cardiology",
            "disponibilite": "Mon-Wed"
        }));
        let doctor = input.normalize().unwrap();
        assert_eq!(doctor.name, "Dr. Mbarga");
        assert_eq!(doctor.telephone, "");
        assert_eq!(doctor.availability, "Mon-Wed");
    }

    #[test]
    fn test_doctor_missing_specialisation() {
        let input: DoctorInput = from_json(serde_json::json!({"name": "Dr. Mbarga"}));
        assert_eq!(input.normalize(), Err(ClinicError::MissingDoctorFields));
    }

    #[test]
    fn test_doctor_partial_update() {
        let input: DoctorInput = from_json(serde_json::json!({"telephone": " 699 00 00 "}));
        let changes = input.changes().unwrap();
        assert_eq!(changes.telephone.as_deref(), Some("699 00 00"));
        assert_eq!(changes.name, None);
        assert_eq!(changes.specialisation, None);
    }

    #[test]
    fn test_doctor_update_cannot_blank_name() {
        let input: DoctorInput = from_json(serde_json::json!({"name": "  "}));
        assert_eq!(input.changes(), Err(ClinicError::MissingDoctorFields));
    }
}

mod appointments {
    use super::*;

    fn booking(status: Option<&str>) -> AppointmentInput {
        AppointmentInput {
            patient_id: Some(Uuid::new_v4().to_string()),
            doctor_id: Some(Uuid::new_v4().to_string()),
            date: Some("2025-06-02".to_string()),
            time: Some("09:30".to_string()),
            status: status.map(str::to_string),
            reason: None,
        }
    }

    #[test]
    fn test_booking_defaults_to_pending() {
        let appointment = booking(None).normalize().unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert_eq!(appointment.time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(appointment.reason, "");
    }

    #[test]
    fn test_booking_with_status() {
        let appointment = booking(Some("CONFIRMED")).normalize().unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn test_booking_unknown_status_rejected() {
        assert_eq!(
            booking(Some("LATE")).normalize(),
            Err(ClinicError::UnknownStatus("LATE".to_string()))
        );
    }

    #[rstest]
    #[case("patientId")]
    #[case("doctorId")]
    #[case("date")]
    #[case("time")]
    fn test_booking_missing_field(#[case] field: &str) {
        let mut input = booking(None);
        match field {
            "patientId" => input.patient_id = None,
            "doctorId" => input.doctor_id = Some(String::new()),
            "date" => input.date = None,
            _ => input.time = None,
        }
        assert_eq!(input.normalize(), Err(ClinicError::MissingAppointmentFields));
    }

    #[test]
    fn test_booking_malformed_values() {
        let mut input = booking(None);
        input.doctor_id = Some("abc".to_string());
        assert_eq!(input.normalize(), Err(ClinicError::InvalidId("doctorId")));

        let mut input = booking(None);
        input.time = Some("25:00".to_string());
        assert_eq!(input.normalize(), Err(ClinicError::InvalidTime));

        let mut input = booking(None);
        input.date = Some("02/06/2025".to_string());
        assert_eq!(input.normalize(), Err(ClinicError::InvalidDate("date")));
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time("08:15"), NaiveTime::from_hms_opt(8, 15, 0));
        assert_eq!(parse_time("08:15:30"), NaiveTime::from_hms_opt(8, 15, 30));
        assert_eq!(parse_time("8h15"), None);
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let patch: AppointmentPatch = from_json(serde_json::json!({"status": "done"}));
        let changes = patch.changes().unwrap();
        assert_eq!(
            changes,
            AppointmentChanges {
                status: Some(AppointmentStatus::Done),
                ..AppointmentChanges::default()
            }
        );
    }

    #[test]
    fn test_patch_rejects_bad_time() {
        let patch: AppointmentPatch = from_json(serde_json::json!({"time": "noon"}));
        assert_eq!(patch.changes(), Err(ClinicError::InvalidTime));
    }
}

mod notifications {
    use super::*;

    #[test]
    fn test_notification_defaults_to_info() {
        let input: NotificationInput = from_json(serde_json::json!({"message": "Stock low"}));
        let notification = input.normalize().unwrap();
        assert_eq!(notification.kind, NotificationKind::Info);

        let input: NotificationInput =
            from_json(serde_json::json!({"message": "Stock low", "type": "URGENT"}));
        assert_eq!(input.normalize().unwrap().kind, NotificationKind::Info);
    }

    #[test]
    fn test_notification_warning() {
        let input: NotificationInput =
            from_json(serde_json::json!({"message": "Generator down", "type": "WARNING"}));
        assert_eq!(input.normalize().unwrap().kind, NotificationKind::Warning);
    }

    #[test]
    fn test_notification_requires_message() {
        let input: NotificationInput = from_json(serde_json::json!({"type": "INFO"}));
        assert_eq!(input.normalize(), Err(ClinicError::MissingMessage));
    }
}

mod records {
    use super::*;

    #[test]
    fn test_record_defaults() {
        let input: RecordInput = from_json(serde_json::json!({"eventDate": "2025-01-20"}));
        let record = input.normalize().unwrap();
        assert_eq!(record.record_type, RecordType::Consultation);
        assert_eq!(record.event_date, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
        assert_eq!(record.title, "");
        assert_eq!(record.created_by, "");
    }

    #[test]
    fn test_record_type_and_timestamp_date() {
        let input: RecordInput = from_json(serde_json::json!({
            "type": "HOSPITALIZATION",
            "eventDate": "2025-01-20T14:00:00Z",
            "diagnosis": "Malaria"
        }));
        let record = input.normalize().unwrap();
        assert_eq!(record.record_type, RecordType::Hospitalization);
        assert_eq!(record.event_date, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
        assert_eq!(record.diagnosis, "Malaria");
    }

    #[test]
    fn test_record_errors() {
        let input: RecordInput = from_json(serde_json::json!({"title": "Visit"}));
        assert_eq!(input.normalize(), Err(ClinicError::MissingEventDate));

        let input: RecordInput =
            from_json(serde_json::json!({"eventDate": "2025-01-20", "type": "SURGERY"}));
        assert_eq!(
            input.normalize(),
            Err(ClinicError::UnknownRecordType("SURGERY".to_string()))
        );

        let input: RecordInput = from_json(serde_json::json!({"eventDate": "yesterday"}));
        assert_eq!(input.normalize(), Err(ClinicError::InvalidDate("eventDate")));
    }
}
