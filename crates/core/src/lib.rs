//! Core business logic for the Vera hospital backend.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `billing` - Invoice valuation (FCFA conversion, VAT, totals) and billing aggregation
//! - `currency` - Rounding and conversion helpers
//! - `clinic` - Patients, doctors, appointments, notifications and medical records
//! - `input` - Lenient decoding of form fields

pub mod billing;
pub mod clinic;
pub mod currency;
pub mod input;
