use clap::{Args, Parser, Subcommand};
use engine::{
    CATEGORIES, CATEGORY_PLACEHOLDER, NewExpense, PAYMENT_METHOD_PLACEHOLDER, PAYMENT_METHODS,
};

#[derive(Parser, Debug)]
#[command(name = "expense_tracker", version)]
#[command(about = "Record personal expenses grouped by user name")]
pub struct Cli {
    /// Optional settings file (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Override the SQLite database path (`:memory:` for a throwaway store).
    #[arg(long)]
    pub database: Option<String>,
    /// Override the CSV mirror path.
    #[arg(long)]
    pub mirror: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// One line typed into `shell`: the same commands, without the global flags.
#[derive(Parser, Debug)]
#[command(name = "expense_tracker", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a new expense.
    Add(AddArgs),
    /// List user names in alphabetical order.
    Users(UsersArgs),
    /// Show every expense of a user, oldest first, with their total.
    Report(ReportArgs),
    /// Delete one expense by id.
    DeleteExpense { id: i64 },
    /// Delete a user and all their expenses.
    DeleteUser { name: String },
    /// Read commands from stdin until `exit`, keeping per-user totals.
    Shell,
}

/// Missing fields are left empty (or on their placeholder) so the engine
/// reports them.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub amount: String,
    #[arg(long, default_value = CATEGORY_PLACEHOLDER, help = suggestions(&CATEGORIES))]
    pub category: String,
    /// YYYY-MM-DD; today when omitted.
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long, default_value = "")]
    pub notes: String,
    #[arg(long, default_value = PAYMENT_METHOD_PLACEHOLDER, help = suggestions(&PAYMENT_METHODS))]
    pub payment_method: String,
    #[arg(long, default_value = "")]
    pub location: String,
}

fn suggestions(values: &[&str]) -> String {
    format!("{}, or any text", values.join(", "))
}

impl From<AddArgs> for NewExpense {
    fn from(args: AddArgs) -> Self {
        Self {
            owner: args.name,
            amount: args.amount,
            category: args.category,
            date: args.date,
            notes: args.notes,
            payment_method: args.payment_method,
            location: args.location,
        }
    }
}

#[derive(Args, Debug)]
pub struct UsersArgs {
    /// Only users whose name contains this text (case-sensitive).
    #[arg(long, short)]
    pub search: Option<String>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    pub name: String,
    #[arg(long)]
    pub json: bool,
}
