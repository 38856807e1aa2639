mod aggregator;
mod csv_utils;
mod dto;
mod report;

pub use aggregator::TransactionAggregator;
pub use dto::Transaction;
pub use report::{load_transactions, run, style_hint, summary_lines, AmountStyle, ReportLine};
