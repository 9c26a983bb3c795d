//! In-memory append-only roster.

use std::sync::{Arc, RwLock};

use tracing::debug;

use rollcall_core::application::ApplicationError;
use rollcall_core::application::ports::RosterTable;
use rollcall_core::domain::Submission;
use rollcall_core::error::RollcallResult;

/// In-memory [`RosterTable`] implementation.
///
/// Append-only: rows are never edited or removed. Clones share state, so
/// the caller keeps a handle to read back what the controller appended.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoster {
    rows: Arc<RwLock<Vec<Submission>>>,
}

impl MemoryRoster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all rows, in append order.
    pub fn rows(&self) -> Vec<Submission> {
        self.rows
            .read()
            .map(|rows| rows.clone())
            .unwrap_or_default()
    }
}

impl RosterTable for MemoryRoster {
    fn append(&self, submission: &Submission) -> RollcallResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| ApplicationError::RosterUnavailable)?;
        rows.push(submission.clone());
        debug!(rows = rows.len(), "roster row appended");
        Ok(())
    }

    fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> Submission {
        Submission::new(
            "2026-08-27 10:00:00",
            name,
            "anna@example.com",
            "+358401234567",
            "1990-05-01",
            true,
        )
    }

    #[test]
    fn starts_empty() {
        let roster = MemoryRoster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }

    #[test]
    fn appends_preserve_order() {
        let roster = MemoryRoster::new();
        roster.append(&sample("Anna Virtanen")).unwrap();
        roster.append(&sample("Bo Ek")).unwrap();

        let rows = roster.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name(), "Anna Virtanen");
        assert_eq!(rows[1].name(), "Bo Ek");
    }

    #[test]
    fn clones_share_rows() {
        let roster = MemoryRoster::new();
        let handle = roster.clone();
        roster.append(&sample("Anna Virtanen")).unwrap();
        assert_eq!(handle.len(), 1);
    }
}
