//! `SeaORM` Entity for invoices table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use vera_core::billing::InvoiceValuation;

use super::sea_orm_active_enums::{CurrencyCode, InvoiceStatus, PaymentMethod};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub services: String,
    pub currency: CurrencyCode,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_original: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub exchange_rate: Decimal,
    #[serde(rename = "amountFCFA", with = "rust_decimal::serde::float")]
    pub amount_fcfa: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub vat_rate: Decimal,
    #[serde(rename = "vatAmountFCFA", with = "rust_decimal::serde::float")]
    pub vat_amount_fcfa: Decimal,
    #[serde(rename = "totalFCFA", with = "rust_decimal::serde::float")]
    pub total_fcfa: Decimal,
    pub status: InvoiceStatus,
    pub payment_method: PaymentMethod,
    pub payment_ref: String,
    pub invoice_date: Date,
    pub payment_date: Option<Date>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Stored monetary fields, as the valuation engine sees them.
    #[must_use]
    pub fn valuation(&self) -> InvoiceValuation {
        InvoiceValuation {
            currency: self.currency.into(),
            amount_original: self.amount_original,
            exchange_rate: self.exchange_rate,
            amount_fcfa: self.amount_fcfa,
            vat_rate: self.vat_rate,
            vat_amount_fcfa: self.vat_amount_fcfa,
            total_fcfa: self.total_fcfa,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patients::Entity",
        from = "Column::PatientId",
        to = "super::patients::Column::Id",
        on_delete = "Cascade"
    )]
    Patients,
}

impl Related<super::patients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
