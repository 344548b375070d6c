//! The record store: an unordered collection of session records, plus the
//! LIFO undo log fed by the unavailability-handling pass.

use tracing::debug;

use super::error::ScheduleError;
use super::types::{Day, Section, SessionRecord, TimeSlot};

/// A snapshot of a record taken before a displacing mutation, so the change
/// can be undone later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoSnapshot {
    pub section: Section,
    pub day: Day,
    pub slot: TimeSlot,
    pub subject: String,
    pub instructor: String,
}

impl From<&SessionRecord> for UndoSnapshot {
    fn from(record: &SessionRecord) -> Self {
        UndoSnapshot {
            section: record.section,
            day: record.day,
            slot: record.slot,
            subject: record.subject.clone(),
            instructor: record.instructor.clone(),
        }
    }
}

/// The single source of truth for the weekly schedule.
///
/// Store order is not semantically meaningful; the query engine re-sorts.
/// The store is single-threaded by contract: one caller mutates at a time.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<SessionRecord>,
    undo_log: Vec<UndoSnapshot>,
}

impl RecordStore {
    pub fn new() -> RecordStore {
        RecordStore::default()
    }

    pub fn with_records(records: Vec<SessionRecord>) -> RecordStore {
        RecordStore {
            records,
            undo_log: Vec::new(),
        }
    }

    /// Appends a record without an occupancy check. The mutation engine is
    /// the enforcement point; interactive callers should use
    /// [`RecordStore::insert_checked`].
    pub fn insert(&mut self, record: SessionRecord) {
        debug!(section = %record.section, day = %record.day, slot = %record.slot, "insert");
        self.records.push(record);
    }

    /// Appends a record, rejecting the insert if the (section, day, slot)
    /// triple is already occupied.
    pub fn insert_checked(&mut self, record: SessionRecord) -> Result<(), ScheduleError> {
        if let Some(existing) = self.record_at(record.section, record.day, record.slot) {
            return Err(ScheduleError::conflict(format!(
                "slot {} on {} in section {} is occupied by {} ({})",
                record.slot, record.day, record.section, existing.subject, existing.instructor
            )));
        }
        self.insert(record);
        Ok(())
    }

    /// Atomically discards all existing records and installs a new set.
    /// Used by the persistence collaborator; load is destructive, not merge.
    pub fn replace_all(&mut self, records: Vec<SessionRecord>) {
        debug!(count = records.len(), "replace_all");
        self.records = records;
        self.undo_log.clear();
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    /// Lazy sequence of matching records in store order.
    pub fn find_all<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a SessionRecord>
    where
        P: Fn(&SessionRecord) -> bool + 'a,
    {
        self.records.iter().filter(move |r| predicate(r))
    }

    /// The record occupying the triple, if any. At most one exists under the
    /// occupancy invariant.
    pub fn record_at(&self, section: Section, day: Day, slot: TimeSlot) -> Option<&SessionRecord> {
        self.records
            .iter()
            .find(|r| r.section == section && r.day == day && r.slot == slot)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct sections present in the store, sorted ascending.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections: Vec<Section> = Vec::new();
        for r in &self.records {
            if !sections.contains(&r.section) {
                sections.push(r.section);
            }
        }
        sections.sort();
        sections
    }

    pub(crate) fn records_mut(&mut self) -> &mut [SessionRecord] {
        &mut self.records
    }

    pub(crate) fn push_undo(&mut self, snapshot: UndoSnapshot) {
        self.undo_log.push(snapshot);
    }

    pub(crate) fn pop_undo(&mut self) -> Option<UndoSnapshot> {
        self.undo_log.pop()
    }

    /// Number of pending undo entries.
    pub fn undo_depth(&self) -> usize {
        self.undo_log.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(section: char, day: Day, label: &str, subject: &str, who: &str) -> SessionRecord {
        SessionRecord::new(
            day,
            TimeSlot::from_label(label).unwrap(),
            subject,
            who,
            Section::new(section).unwrap(),
        )
    }

    #[test]
    fn insert_checked_rejects_occupied_slot() {
        let mut store = RecordStore::new();
        store.insert(record('A', Day::Mon, "8:00-8:55", "TMC201", "Dr. Udham Singh"));

        let err = store
            .insert_checked(record('A', Day::Mon, "8:00-8:55", "TMC202", "Mr. Amit Juyal"))
            .unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(store.len(), 1);

        // Same slot, different section is fine.
        store
            .insert_checked(record('B', Day::Mon, "8:00-8:55", "TMC202", "Mr. Amit Juyal"))
            .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_all_discards_records_and_undo_log() {
        let mut store = RecordStore::new();
        let rec = record('A', Day::Mon, "8:00-8:55", "TMC201", "Dr. Udham Singh");
        store.insert(rec.clone());
        store.push_undo(UndoSnapshot::from(&rec));

        store.replace_all(vec![record('C', Day::Fri, "2:10-3:05", "PBL", "-")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.undo_depth(), 0);
        assert_eq!(store.records()[0].subject, "PBL");
    }

    #[test]
    fn sections_are_distinct_and_sorted() {
        let mut store = RecordStore::new();
        store.insert(record('C', Day::Mon, "8:00-8:55", "TMC201", "x"));
        store.insert(record('A', Day::Mon, "8:00-8:55", "TMC201", "x"));
        store.insert(record('C', Day::Tue, "8:55-9:50", "TMC202", "y"));

        let sections: Vec<char> = store.sections().iter().map(|s| s.letter()).collect();
        assert_eq!(sections, vec!['A', 'C']);
    }
}
