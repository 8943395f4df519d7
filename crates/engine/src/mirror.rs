//! Append-only CSV copy of every stored expense.
//!
//! The file is never read back. Deleting expenses does not touch it, so it
//! keeps rows the database no longer has.

use std::{
    fs::OpenOptions,
    path::PathBuf,
};

use csv::{Terminator, WriterBuilder};
use serde::Serialize;

use crate::Expense;

/// Default file name, relative to the working directory.
pub const DEFAULT_MIRROR_PATH: &str = "expenses.csv";

#[derive(Serialize)]
struct MirrorRow<'a> {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Notes")]
    notes: &'a str,
    #[serde(rename = "Payment Method")]
    payment_method: &'a str,
    #[serde(rename = "Location")]
    location: &'a str,
}

#[derive(Clone, Debug)]
pub struct MirrorLog {
    path: PathBuf,
}

impl MirrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one row. The header goes in first when the file does not exist
    /// yet.
    pub fn append(&self, id: i64, expense: &Expense) -> Result<(), csv::Error> {
        let exists = self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(!exists)
            .terminator(Terminator::CRLF)
            .from_writer(file);
        writer.serialize(MirrorRow {
            id,
            name: &expense.owner,
            amount: expense.amount,
            category: &expense.category,
            date: &expense.date,
            notes: &expense.notes,
            payment_method: &expense.payment_method,
            location: &expense.location,
        })?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for MirrorLog {
    fn default() -> Self {
        Self::new(DEFAULT_MIRROR_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_dbs");
        std::fs::create_dir_all(&root).unwrap();
        let path = root.join(format!("{name}_{}.csv", uuid::Uuid::new_v4()));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn expense(owner: &str, amount: f64, notes: &str) -> Expense {
        Expense {
            owner: owner.to_string(),
            amount,
            category: "Food".to_string(),
            date: "2024-01-01".to_string(),
            notes: notes.to_string(),
            payment_method: "Cash".to_string(),
            location: String::new(),
        }
    }

    #[test]
    fn header_is_written_once() {
        let path = scratch_path("mirror_header");
        let mirror = MirrorLog::new(&path);

        mirror.append(1, &expense("Alice", 12.5, "")).unwrap();
        mirror.append(2, &expense("Bob", 3.0, "")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ID,Name,Amount,Category,Date,Notes,Payment Method,Location",
                "1,Alice,12.5,Food,2024-01-01,,Cash,",
                "2,Bob,3.0,Food,2024-01-01,,Cash,",
            ]
        );
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn existing_file_gets_no_header() {
        let path = scratch_path("mirror_existing");
        std::fs::write(&path, "").unwrap();

        MirrorLog::new(&path)
            .append(4, &expense("Carol", 1.0, ""))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.starts_with("4,Carol,"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let path = scratch_path("mirror_quote");
        MirrorLog::new(&path)
            .append(1, &expense("Dana", 2.0, "coffee, cake"))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"coffee, cake\""));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_directory_fails() {
        let path = scratch_path("mirror_missing").join("nested/expenses.csv");
        assert!(MirrorLog::new(path).append(1, &expense("Eve", 1.0, "")).is_err());
    }
}
