//! Initial database migration.
//!
//! Creates the enum types and the clinic and billing tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: CLINIC
        // ============================================================
        db.execute_unprepared(UPDATED_AT_TRIGGER_SQL).await?;
        db.execute_unprepared(PATIENTS_SQL).await?;
        db.execute_unprepared(DOCTORS_SQL).await?;
        db.execute_unprepared(APPOINTMENTS_SQL).await?;
        db.execute_unprepared(PATIENT_RECORDS_SQL).await?;
        db.execute_unprepared(NOTIFICATIONS_SQL).await?;

        // ============================================================
        // PART 3: BILLING
        // ============================================================
        db.execute_unprepared(INVOICES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
CREATE TYPE currency_code AS ENUM ('FCFA', 'EUR', 'USD');
CREATE TYPE invoice_status AS ENUM ('PAID', 'UNPAID');
CREATE TYPE payment_method AS ENUM ('CASH', 'MOMO', 'CARD');
CREATE TYPE gender AS ENUM ('MALE', 'FEMALE', 'OTHER');
CREATE TYPE appointment_status AS ENUM ('PENDING', 'CONFIRMED', 'DONE', 'CANCELLED');
CREATE TYPE notification_type AS ENUM ('INFO', 'WARNING');
CREATE TYPE record_type AS ENUM (
    'CONSULTATION', 'EXAM', 'TREATMENT', 'HOSPITALIZATION', 'NOTE', 'OTHER'
);
";

const UPDATED_AT_TRIGGER_SQL: &str = r"
CREATE OR REPLACE FUNCTION set_updated_at()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;
";

const PATIENTS_SQL: &str = r"
CREATE TABLE patients (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    first_name TEXT NOT NULL CHECK (btrim(first_name) <> ''),
    last_name TEXT NOT NULL CHECK (btrim(last_name) <> ''),
    phone TEXT NOT NULL DEFAULT '',
    address TEXT NOT NULL DEFAULT '',
    age INTEGER CHECK (age IS NULL OR age >= 0),
    gender gender NOT NULL DEFAULT 'OTHER',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_patients_created ON patients(created_at DESC);

CREATE TRIGGER trg_patients_updated_at
    BEFORE UPDATE ON patients
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();
";

const DOCTORS_SQL: &str = r"
CREATE TABLE doctors (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name TEXT NOT NULL CHECK (btrim(name) <> ''),
    specialisation TEXT NOT NULL CHECK (btrim(specialisation) <> ''),
    telephone TEXT NOT NULL DEFAULT '',
    availability TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TRIGGER trg_doctors_updated_at
    BEFORE UPDATE ON doctors
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();
";

const APPOINTMENTS_SQL: &str = r"
CREATE TABLE appointments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    patient_id UUID NOT NULL REFERENCES patients(id) ON DELETE CASCADE,
    patient_name TEXT NOT NULL,
    doctor_id UUID NOT NULL REFERENCES doctors(id) ON DELETE CASCADE,
    doctor_name TEXT NOT NULL,
    date DATE NOT NULL,
    time TIME NOT NULL,
    status appointment_status NOT NULL DEFAULT 'PENDING',
    reason TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_appointments_patient ON appointments(patient_id, created_at DESC);
CREATE INDEX idx_appointments_doctor ON appointments(doctor_id, date);

CREATE TRIGGER trg_appointments_updated_at
    BEFORE UPDATE ON appointments
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();
";

const PATIENT_RECORDS_SQL: &str = r"
CREATE TABLE patient_records (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    patient_id UUID NOT NULL REFERENCES patients(id) ON DELETE CASCADE,
    type record_type NOT NULL DEFAULT 'CONSULTATION',
    title TEXT NOT NULL DEFAULT '',
    description TEXT NOT NULL DEFAULT '',
    diagnosis TEXT NOT NULL DEFAULT '',
    treatment TEXT NOT NULL DEFAULT '',
    event_date DATE NOT NULL,
    created_by TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_patient_records_patient ON patient_records(patient_id, created_at DESC);

CREATE TRIGGER trg_patient_records_updated_at
    BEFORE UPDATE ON patient_records
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();
";

const NOTIFICATIONS_SQL: &str = r"
CREATE TABLE notifications (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    type notification_type NOT NULL DEFAULT 'INFO',
    message TEXT NOT NULL CHECK (btrim(message) <> ''),
    read BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_notifications_created ON notifications(created_at DESC);

CREATE TRIGGER trg_notifications_updated_at
    BEFORE UPDATE ON notifications
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();
";

const INVOICES_SQL: &str = r"
CREATE TABLE invoices (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    patient_id UUID NOT NULL REFERENCES patients(id) ON DELETE CASCADE,
    patient_name TEXT NOT NULL,
    services TEXT NOT NULL DEFAULT '',

    -- Operator input
    currency currency_code NOT NULL DEFAULT 'FCFA',
    amount_original NUMERIC NOT NULL,
    exchange_rate NUMERIC NOT NULL DEFAULT 1,
    vat_rate NUMERIC NOT NULL DEFAULT 0,

    -- Derived, always written together
    amount_fcfa NUMERIC NOT NULL,
    vat_amount_fcfa NUMERIC NOT NULL,
    total_fcfa NUMERIC NOT NULL,

    status invoice_status NOT NULL DEFAULT 'UNPAID',
    payment_method payment_method NOT NULL DEFAULT 'CASH',
    payment_ref TEXT NOT NULL DEFAULT '',
    invoice_date DATE NOT NULL,
    payment_date DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT chk_amount_non_negative CHECK (amount_original >= 0),
    CONSTRAINT chk_rate_non_negative CHECK (exchange_rate >= 0),
    CONSTRAINT chk_vat_non_negative CHECK (vat_rate >= 0),
    CONSTRAINT chk_fcfa_rate CHECK (currency <> 'FCFA' OR exchange_rate = 1)
);

CREATE INDEX idx_invoices_patient ON invoices(patient_id, created_at DESC);
CREATE INDEX idx_invoices_status ON invoices(status);
CREATE INDEX idx_invoices_date ON invoices(invoice_date);

CREATE TRIGGER trg_invoices_updated_at
    BEFORE UPDATE ON invoices
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS invoices CASCADE;
DROP TABLE IF EXISTS notifications CASCADE;
DROP TABLE IF EXISTS patient_records CASCADE;
DROP TABLE IF EXISTS appointments CASCADE;
DROP TABLE IF EXISTS doctors CASCADE;
DROP TABLE IF EXISTS patients CASCADE;
DROP FUNCTION IF EXISTS set_updated_at();
DROP TYPE IF EXISTS record_type;
DROP TYPE IF EXISTS notification_type;
DROP TYPE IF EXISTS appointment_status;
DROP TYPE IF EXISTS gender;
DROP TYPE IF EXISTS payment_method;
DROP TYPE IF EXISTS invoice_status;
DROP TYPE IF EXISTS currency_code;
";
