//! Plain-text output.

use std::io::{self, Write};

use engine::{OwnerListing, OwnerReport};

const REPORT_HEADER: &str = "ID\tAmount\tCategory\tDate\tNotes\tPayment Method\tLocation";
const RULE_WIDTH: usize = 80;

pub fn owners<W: Write>(out: &mut W, listing: &OwnerListing) -> io::Result<()> {
    if let Some(message) = listing.empty_message() {
        return writeln!(out, "{message}");
    }
    for owner in &listing.owners {
        writeln!(out, "{owner}")?;
    }
    Ok(())
}

pub fn report<W: Write>(out: &mut W, report: &OwnerReport) -> io::Result<()> {
    writeln!(out, "{}'s Expense Report", report.owner)?;
    writeln!(out, "{REPORT_HEADER}")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for record in &report.expenses {
        let expense = &record.expense;
        writeln!(
            out,
            "{}\t{:?}\t{}\t{}\t{}\t{}\t{}",
            record.id,
            expense.amount,
            expense.category,
            expense.date,
            expense.notes,
            expense.payment_method,
            expense.location
        )?;
    }
    writeln!(out)?;
    total(out, report.total)
}

pub fn total<W: Write>(out: &mut W, total: f64) -> io::Result<()> {
    writeln!(out, "Total Money Spent: {total:.2}")
}
