use std::io::Write;

use engine::{Engine, SessionTotals};

use crate::{
    cli::Command,
    error::{AppError, Result},
    render,
};

/// Run one command against the store and write its outcome to `out`.
///
/// Successful inserts are added to `totals`.
pub async fn execute<W: Write>(
    engine: &Engine,
    totals: &mut SessionTotals,
    command: Command,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Add(args) => {
            let record = engine.insert_expense_record(args.into()).await?;
            let total = totals.record_added(&record.expense.owner, record.expense.amount);
            writeln!(out, "Expense Added (ID {})", record.id)?;
            render::total(out, total)?;
        }
        Command::Users(args) => {
            let listing = engine.owner_index(args.search.as_deref()).await?;
            if args.json {
                serde_json::to_writer_pretty(&mut *out, &listing)?;
                writeln!(out)?;
            } else {
                render::owners(out, &listing)?;
            }
        }
        Command::Report(args) => {
            let report = engine.owner_report(&args.name).await?;
            if args.json {
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            } else {
                render::report(out, &report)?;
            }
        }
        Command::DeleteExpense { id } => {
            if engine.delete_expense(id).await? > 0 {
                writeln!(out, "Expense with ID {id} deleted.")?;
            } else {
                writeln!(out, "No expense with ID {id}.")?;
            }
        }
        Command::DeleteUser { name } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::Input(
                    "Please enter a user name to delete".to_string(),
                ));
            }
            engine.delete_owner(name).await?;
            writeln!(out, "Deleted all data for {name}")?;
        }
        Command::Shell => {
            return Err(AppError::Input("already in the shell".to_string()));
        }
    }
    Ok(())
}
