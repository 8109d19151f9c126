use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::api::Student;

/// Dashboard copy of the roster. Saved edits are applied in place and
/// remembered until the next full fetch replaces the records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterCache {
    records: Vec<Student>,
    local_edits: HashMap<String, bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RosterStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    /// Percentage of present students, `0.0` for an empty roster.
    pub rate: f64,
}

impl RosterStats {
    pub fn rate_label(&self) -> String {
        format!("{:.1}%", self.rate)
    }
}

impl RosterCache {
    pub fn from_records(records: Vec<Student>) -> Self {
        Self {
            records,
            local_edits: HashMap::new(),
        }
    }

    pub fn records(&self) -> &[Student] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Student> {
        self.records.iter().find(|s| s.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mirrors a saved attendance change. Returns `false` if no record has `id`.
    pub fn apply_attendance(&mut self, id: &str, has_attended: bool, now: DateTime<Utc>) -> bool {
        let Some(record) = self.records.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        record.has_attended = has_attended;
        record.attended_at = has_attended.then_some(now);
        self.local_edits.insert(id.to_string(), has_attended);
        true
    }

    /// Replaces the cache with a fresh fetch. Returns the ids whose
    /// fetched state contradicts an edit made since the last fetch.
    pub fn reconcile(&mut self, fresh: Vec<Student>) -> Vec<String> {
        let mut conflicts: Vec<String> = self
            .local_edits
            .iter()
            .filter(|(id, expected)| {
                fresh
                    .iter()
                    .find(|s| &s.id == *id)
                    .is_some_and(|s| s.has_attended != **expected)
            })
            .map(|(id, _)| id.clone())
            .collect();
        conflicts.sort();

        for id in &conflicts {
            log::warn!("Server attendance for {} differs from the saved edit", id);
        }

        self.records = fresh;
        self.local_edits.clear();
        conflicts
    }

    pub fn stats(&self) -> RosterStats {
        let total = self.records.len();
        let present = self.records.iter().filter(|s| s.has_attended).count();
        let rate = if total == 0 {
            0.0
        } else {
            present as f64 / total as f64 * 100.0
        };
        RosterStats {
            total,
            present,
            absent: total - present,
            rate,
        }
    }
}
