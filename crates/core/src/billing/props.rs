//! Property-based tests for invoice valuation.
//!
//! - Derived totals always reconcile with their inputs
//! - Valuation is deterministic
//! - FCFA invoices always carry a rate of exactly 1
//! - Aggregation never loses money between the two status groups

use proptest::prelude::*;
use rust_decimal::Decimal;
use vera_shared::Currency;

use super::aggregation::aggregate_paid_unpaid_totals;
use super::patch::{ValuationPatch, revalue};
use super::types::InvoiceStatus;
use super::valuation::{InvoiceInput, compute_invoice_totals};
use crate::currency::round_money;
use crate::input::NumericInput;

/// Strategy to generate positive amounts (0.01 to 100,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate VAT rates (0 to 0.5, six decimals).
fn vat_rate() -> impl Strategy<Value = Decimal> {
    (0i64..=500_000i64).prop_map(|v| Decimal::new(v, 6))
}

fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Fcfa), Just(Currency::Eur), Just(Currency::Usd)]
}

fn has_at_most_two_decimals(value: Decimal) -> bool {
    let scaled = value * Decimal::from(100);
    scaled == scaled.trunc()
}

fn request(currency: Currency, amount: Decimal, rate: Decimal, vat: Decimal) -> InvoiceInput {
    InvoiceInput {
        currency: Some(currency.code().to_string()),
        amount_original: Some(NumericInput::Decimal(amount)),
        exchange_rate: Some(NumericInput::Decimal(rate)),
        vat_rate: Some(NumericInput::Decimal(vat)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Each derived field is the rounded value of its unrounded formula.
    #[test]
    fn prop_totals_reconcile(
        currency in currency(),
        amount in positive_amount(),
        rate in positive_rate(),
        vat in vat_rate(),
    ) {
        let v = compute_invoice_totals(&request(currency, amount, rate, vat)).unwrap();
        let effective_rate = if currency.is_settlement() { Decimal::ONE } else { rate };

        let amount_fcfa = amount * effective_rate;
        let vat_amount_fcfa = amount_fcfa * vat;

        prop_assert_eq!(v.amount_fcfa, round_money(amount_fcfa));
        prop_assert_eq!(v.vat_amount_fcfa, round_money(vat_amount_fcfa));
        prop_assert_eq!(v.total_fcfa, round_money(amount_fcfa + vat_amount_fcfa));
    }

    /// Every monetary field is kept to two decimals.
    #[test]
    fn prop_money_has_two_decimals(
        currency in currency(),
        amount in positive_amount(),
        rate in positive_rate(),
        vat in vat_rate(),
    ) {
        let v = compute_invoice_totals(&request(currency, amount, rate, vat)).unwrap();
        prop_assert!(has_at_most_two_decimals(v.amount_original));
        prop_assert!(has_at_most_two_decimals(v.amount_fcfa));
        prop_assert!(has_at_most_two_decimals(v.vat_amount_fcfa));
        prop_assert!(has_at_most_two_decimals(v.total_fcfa));
        prop_assert!(v.total_fcfa >= v.amount_fcfa);
    }

    /// Valuing the same input twice yields the same output.
    #[test]
    fn prop_valuation_is_deterministic(
        currency in currency(),
        amount in positive_amount(),
        rate in positive_rate(),
        vat in vat_rate(),
    ) {
        let input = request(currency, amount, rate, vat);
        prop_assert_eq!(compute_invoice_totals(&input), compute_invoice_totals(&input));
    }

    /// FCFA invoices ignore the supplied rate.
    #[test]
    fn prop_fcfa_rate_is_one(
        amount in positive_amount(),
        rate in positive_rate(),
        vat in vat_rate(),
    ) {
        let v = compute_invoice_totals(&request(Currency::Fcfa, amount, rate, vat)).unwrap();
        prop_assert_eq!(v.exchange_rate, Decimal::ONE);
        prop_assert_eq!(v.amount_fcfa, round_money(amount));
    }

    /// Patching with no driving field never recomputes.
    #[test]
    fn prop_clean_patch_keeps_totals(
        currency in currency(),
        amount in positive_amount(),
        rate in positive_rate(),
        vat in vat_rate(),
    ) {
        let stored = compute_invoice_totals(&request(currency, amount, rate, vat)).unwrap();
        prop_assert_eq!(revalue(&stored, &ValuationPatch::default()), Ok(None));
    }

    /// Re-sending the stored rates reproduces the stored derivation.
    #[test]
    fn prop_resending_stored_values_is_stable(
        currency in currency(),
        amount in positive_amount(),
        rate in positive_rate(),
        vat in vat_rate(),
    ) {
        let stored = compute_invoice_totals(&request(currency, amount, rate, vat)).unwrap();
        let patch = ValuationPatch {
            vat_rate: Some(NumericInput::Decimal(stored.vat_rate)),
            ..ValuationPatch::default()
        };
        prop_assert_eq!(revalue(&stored, &patch), Ok(Some(stored)));
    }

    /// Paid plus unpaid equals the sum of all invoice totals.
    #[test]
    fn prop_aggregation_conserves_total(
        invoices in prop::collection::vec((any::<bool>(), positive_amount()), 0..50),
    ) {
        let grand_total: Decimal = invoices.iter().map(|(_, total)| *total).sum();
        let totals = aggregate_paid_unpaid_totals(invoices.iter().map(|(paid, total)| {
            let status = if *paid { InvoiceStatus::Paid } else { InvoiceStatus::Unpaid };
            (status, *total)
        }));

        prop_assert_eq!(totals.paid_fcfa + totals.unpaid_fcfa, grand_total);
        prop_assert!(totals.paid_fcfa >= Decimal::ZERO);
        prop_assert!(totals.unpaid_fcfa >= Decimal::ZERO);
    }
}
