//! The savings report: loads a ledger CSV and summarizes it for display.
//!
//! Formatting is pure: each report line carries a style hint and the
//! presentation layer decides how (or whether) to render it. This module
//! never touches the terminal.

use std::error::Error;
use std::io::Write;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::{csv_utils::read_csv, Transaction, TransactionAggregator};

/// Display hint for a monetary value. Losses render differently from gains;
/// how is up to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountStyle {
    Gain,
    Loss,
}

/// Pure replacement for stateful console coloring: negative amounts are
/// losses, everything else (including zero) is a gain.
pub fn style_hint(amount: Decimal) -> AmountStyle {
    if amount < Decimal::ZERO {
        AmountStyle::Loss
    } else {
        AmountStyle::Gain
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: String,
    pub amount: Decimal,
    pub style: AmountStyle,
}

impl ReportLine {
    fn new(label: impl Into<String>, amount: Decimal) -> Self {
        let style = style_hint(amount);
        Self {
            label: label.into(),
            amount,
            style,
        }
    }
}

/// Loads the full transaction sequence from a CSV file.
/// Load errors (missing file, malformed rows) are propagated unchanged.
pub fn load_transactions<P: AsRef<Path>>(path: P) -> csv::Result<Vec<Transaction>> {
    read_csv::<Transaction, _>(path)?.collect()
}

/// The four savings rows shown by the CLI: current month, previous month,
/// trailing six months, and all time.
pub fn summary_lines(aggregator: &TransactionAggregator, today: NaiveDate) -> Vec<ReportLine> {
    let current = today.month();
    let previous = if current == 1 { 12 } else { current - 1 };

    vec![
        ReportLine::new(month_name(current), aggregator.monthly_total_amount(current)),
        ReportLine::new(
            month_name(previous),
            aggregator.monthly_total_amount(previous),
        ),
        ReportLine::new(
            "Last 6 months",
            aggregator.sum_of_last_given_months_at(6, today),
        ),
        ReportLine::new("All time", aggregator.total_amount()),
    ]
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Runs the report on the given input file and writes the plain (unstyled)
/// output to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing transactions
/// * `writer` - Where to write the report (e.g. stdout)
/// * `today` - Reference date for the month-relative rows
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, mut writer: W, today: NaiveDate) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    let transactions = load_transactions(input_path)?;
    let aggregator = TransactionAggregator::new(transactions);

    writeln!(writer, "Today's Date: {}", today)?;
    writeln!(writer, "Total Savings for...")?;
    for line in summary_lines(&aggregator, today) {
        writeln!(writer, "{} :\t $ {}", line.label, line.amount)?;
    }
    Ok(())
}
