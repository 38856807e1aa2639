use chrono::{Datelike, Days, Local, Months, NaiveDate};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::Transaction;

/// Answers numeric and grouping queries over a loaded transaction sequence.
///
/// The sequence is read-only for the lifetime of the aggregator. Every query
/// re-scans the full sequence and produces a fresh result, so repeated calls
/// with identical inputs always return identical values.
///
/// Two classification columns exist in the source data: the
/// "Credit Debit Indicator" column (`indicator`) and the "type" column
/// (`tx_type`). [`total_amount`](Self::total_amount) is keyed on `tx_type`
/// while every other signed query is keyed on `indicator`. The source data
/// carries both columns and they can disagree; the queries preserve that
/// distinction rather than unifying it.
pub struct TransactionAggregator {
    transactions: Vec<Transaction>,
}

impl TransactionAggregator {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Net balance over the whole ledger: amounts where `tx_type` is
    /// "Credit" minus amounts where it is "Debit". Rows with any other
    /// `tx_type` are excluded entirely.
    pub fn total_amount(&self) -> Decimal {
        let credits: Decimal = self
            .transactions
            .iter()
            .filter(|t| t.tx_type == "Credit")
            .map(|t| t.amount)
            .sum();

        let debits: Decimal = self
            .transactions
            .iter()
            .filter(|t| t.tx_type == "Debit")
            .map(|t| t.amount)
            .sum();

        credits - debits
    }

    /// Net total for a calendar month across all years, keyed on `indicator`.
    /// Out-of-range month numbers simply match nothing and yield zero.
    pub fn monthly_total_amount(&self, month: u32) -> Decimal {
        let credits: Decimal = self
            .transactions
            .iter()
            .filter(|t| t.indicator == "Credit" && t.booking_date.month() == month)
            .map(|t| t.amount)
            .sum();

        let debits: Decimal = self
            .transactions
            .iter()
            .filter(|t| t.indicator == "Debit" && t.booking_date.month() == month)
            .map(|t| t.amount)
            .sum();

        credits - debits
    }

    /// Net total per "MM-yyyy" bucket, keys in first-occurrence order.
    /// Any indicator other than "Credit" counts as a debit here. Months
    /// absent from the input are absent from the result.
    pub fn monthly_total_amounts(&self) -> IndexMap<String, Decimal> {
        let mut totals: IndexMap<String, Decimal> = IndexMap::new();

        for transaction in &self.transactions {
            let key = format!(
                "{:02}-{:04}",
                transaction.booking_date.month(),
                transaction.booking_date.year()
            );
            let signed = if transaction.indicator == "Credit" {
                transaction.amount
            } else {
                -transaction.amount
            };
            *totals.entry(key).or_insert(Decimal::ZERO) += signed;
        }

        totals
    }

    /// Distinct 4-digit years appearing in booking dates, duplicates removed.
    /// Callers should treat the ordering as unspecified.
    pub fn unique_years(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut years = Vec::new();

        for transaction in &self.transactions {
            let year = format!("{:04}", transaction.booking_date.year());
            if seen.insert(year.clone()) {
                years.push(year);
            }
        }

        years
    }

    /// Gross amount per category for a calendar month across all years.
    /// No credit/debit sign adjustment is applied; the empty string is a
    /// valid category. Pair order follows grouping order.
    pub fn sum_of_categories_for_month(&self, month: u32) -> Vec<(String, Decimal)> {
        let mut sums: IndexMap<String, Decimal> = IndexMap::new();

        for transaction in self
            .transactions
            .iter()
            .filter(|t| t.booking_date.month() == month)
        {
            *sums
                .entry(transaction.category.clone())
                .or_insert(Decimal::ZERO) += transaction.amount;
        }

        sums.into_iter().collect()
    }

    /// Net sum of transactions booked in the trailing window ending today.
    /// See [`sum_of_last_given_months_at`](Self::sum_of_last_given_months_at).
    pub fn sum_of_last_given_months(&self, months: i32) -> Decimal {
        self.sum_of_last_given_months_at(months, Local::now().date_naive())
    }

    /// Net sum of transactions booked strictly after a threshold date: the
    /// first day of `today`'s month, moved back `months` whole months when
    /// `months > 0`. Zero or negative `months` leaves the threshold at the
    /// first of the current month, so only the current month onward matches.
    /// "Credit" adds, "Debit" subtracts, anything else contributes zero.
    pub fn sum_of_last_given_months_at(&self, months: i32, today: NaiveDate) -> Decimal {
        let first_of_month = today - Days::new(u64::from(today.day0()));
        let threshold = if months > 0 {
            first_of_month
                .checked_sub_months(Months::new(months as u32))
                .unwrap_or(NaiveDate::MIN)
        } else {
            first_of_month
        };

        self.transactions
            .iter()
            .filter(|t| t.booking_date > threshold)
            .map(|t| match t.indicator.as_str() {
                "Credit" => t.amount,
                "Debit" => -t.amount,
                _ => Decimal::ZERO,
            })
            .sum()
    }
}
