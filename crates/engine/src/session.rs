//! Per-process running totals.
//!
//! [`SessionTotals`] only sees the amounts a front end hands it after each
//! successful insert. It is not loaded from the database, and deletes do not
//! lower it, so it reports what was added during this run.

use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct SessionTotals {
    totals: HashMap<String, f64>,
}

impl SessionTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `owner`'s total and return the new total.
    pub fn record_added(&mut self, owner: &str, amount: f64) -> f64 {
        let total = self.totals.entry(owner.to_string()).or_insert(0.0);
        *total += amount;
        *total
    }

    pub fn total(&self, owner: &str) -> Option<f64> {
        self.totals.get(owner).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_accumulate_per_owner() {
        let mut session = SessionTotals::new();

        assert_eq!(session.record_added("Dana", 10.0), 10.0);
        assert_eq!(session.record_added("Eve", 4.5), 4.5);
        assert_eq!(session.record_added("Dana", 20.0), 30.0);

        assert_eq!(session.total("Dana"), Some(30.0));
        assert_eq!(session.total("Eve"), Some(4.5));
        assert_eq!(session.total("Frank"), None);
    }

    #[test]
    fn owners_are_case_sensitive() {
        let mut session = SessionTotals::new();
        session.record_added("dana", 1.0);
        assert_eq!(session.total("Dana"), None);
    }

    #[test]
    fn fresh_session_is_empty() {
        let mut first = SessionTotals::new();
        first.record_added("Dana", 10.0);

        let second = SessionTotals::new();
        assert_eq!(second.total("Dana"), None);
    }
}
