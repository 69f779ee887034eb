//! Handlers behind the menu actions.

use crate::cli::{chart, output};
use crate::errors::LedgerError;
use crate::ledger::ExpenseLedger;

/// Parses a user-supplied amount, rejecting anything that is not a number.
pub(crate) fn parse_amount(raw: &str) -> Result<f64, LedgerError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| LedgerError::InvalidAmount(trimmed.to_string()))
}

/// Validates the amount and appends one record. Nothing is written when the
/// amount fails to parse.
pub(crate) fn add_expense(
    ledger: &ExpenseLedger,
    category: &str,
    description: &str,
    raw_amount: &str,
) -> Result<(), LedgerError> {
    let amount = parse_amount(raw_amount)?;
    ledger.append(category.trim(), description.trim(), amount)?;
    output::success("Expense added successfully.");
    Ok(())
}

pub(crate) fn view_expenses(ledger: &ExpenseLedger) -> Result<(), LedgerError> {
    let records = match ledger.list_all() {
        Ok(records) => records,
        Err(LedgerError::StoreNotFound(_)) => {
            output::info("No expenses found. Nothing has been recorded yet.");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    output::section("All Expenses");
    if records.is_empty() {
        output::info("No expenses recorded yet.");
        return Ok(());
    }
    for record in &records {
        println!(
            "{}  {:<14} {:<28} ${:>9.2}",
            record.timestamp, record.category, record.description, record.amount
        );
    }
    Ok(())
}

pub(crate) fn view_summary(ledger: &ExpenseLedger) -> Result<(), LedgerError> {
    let summary = match ledger.summarize() {
        Ok(summary) => summary,
        Err(LedgerError::StoreNotFound(_)) => {
            output::info("No expenses found to summarize.");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    output::section("Expense Summary");
    for (category, amount) in summary.iter() {
        println!("{category}: ${amount:.2}");
    }
    println!();
    println!("Total Expenses: ${:.2}", summary.grand_total());

    if !summary.is_empty() {
        println!();
        chart::print_chart(&summary);
    }
    Ok(())
}
