use std::env;
use std::error::Error;
use std::process;

use chrono::Local;
use ledger_stats::{load_transactions, summary_lines, AmountStyle, TransactionAggregator};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let input_path = match args.len() {
        1 => "transactions.csv",
        2 => args[1].as_str(),
        _ => return Err("Usage: cargo run -- [transactions.csv]".into()),
    };

    let transactions = load_transactions(input_path)?;
    let aggregator = TransactionAggregator::new(transactions);
    let today = Local::now().date_naive();

    println!("Today's Date: {}", today);
    println!("Total Savings for...");
    for line in summary_lines(&aggregator, today) {
        let color = match line.style {
            AmountStyle::Gain => GREEN,
            AmountStyle::Loss => RED,
        };
        println!("{} :\t $ {}{}{}", line.label, color, line.amount, RESET);
    }
    Ok(())
}
