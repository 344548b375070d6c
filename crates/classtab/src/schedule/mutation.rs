//! The mutation engine: every write path into the store beyond raw insert.
//!
//! All operations are all-or-nothing. A failed call leaves the store exactly
//! as it was and reports the error kind to the caller.

use tracing::{debug, info};

use super::error::ScheduleError;
use super::store::{RecordStore, UndoSnapshot};
use super::types::{Day, RecordKey, Section, SessionRecord, TimeSlot, FREE_INSTRUCTOR, FREE_SUBJECT};

/// What happened to one record during an unavailability-handling pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplacementOutcome {
    /// Exchanged subject+instructor with a session at another slot.
    Swapped {
        partner_slot: TimeSlot,
        incoming_subject: String,
        incoming_instructor: String,
    },
    /// No partner existed; the slot became a free period.
    Freed,
}

/// Report entry for one displaced record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Displacement {
    pub day: Day,
    pub slot: TimeSlot,
    pub subject: String,
    pub outcome: DisplacementOutcome,
}

/// Result of popping the undo log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoReport {
    pub snapshot: UndoSnapshot,
    /// True when a record still occupied the snapshot's slot and had its
    /// subject+instructor restored.
    pub restored: bool,
}

impl RecordStore {
    /// Moves the unique record at (from_section, day, slot) to another
    /// section. The destination slot must be free.
    pub fn reassign_section(
        &mut self,
        from_section: Section,
        day: Day,
        slot: TimeSlot,
        to_section: Section,
    ) -> Result<SessionRecord, ScheduleError> {
        let idx = self
            .records()
            .iter()
            .position(|r| r.section == from_section && r.day == day && r.slot == slot)
            .ok_or_else(|| {
                ScheduleError::not_found(format!(
                    "no session at {slot} on {day} in section {from_section}"
                ))
            })?;

        if let Some(occupant) = self.record_at(to_section, day, slot) {
            return Err(ScheduleError::conflict(format!(
                "slot {slot} on {day} in section {to_section} is occupied by {} ({})",
                occupant.subject, occupant.instructor
            )));
        }

        self.records_mut()[idx].section = to_section;
        let moved = self.records()[idx].clone();
        info!(%from_section, %to_section, %day, %slot, subject = %moved.subject, "reassigned section");
        Ok(moved)
    }

    /// Exchanges subject (and, when requested, instructor) between two
    /// records located by exact structural match. The records may be in
    /// different sections, days, and slots entirely.
    pub fn swap_between_sections(
        &mut self,
        a: &RecordKey,
        b: &RecordKey,
        exchange_instructor: bool,
    ) -> Result<(), ScheduleError> {
        let ia = self
            .records()
            .iter()
            .position(|r| a.matches(r))
            .ok_or_else(|| ScheduleError::not_found(format!("no session matching {a}")))?;
        let ib = self
            .records()
            .iter()
            .position(|r| b.matches(r))
            .ok_or_else(|| ScheduleError::not_found(format!("no session matching {b}")))?;

        if ia == ib {
            return Err(ScheduleError::invalid_argument(
                "cannot swap a session with itself",
            ));
        }

        self.exchange_fields(ia, ib, exchange_instructor);
        info!(first = %a, second = %b, exchange_instructor, "swapped sessions");
        Ok(())
    }

    /// Swaps two sessions within one section/day, addressed by 1-based
    /// ordinal position in the time-sorted listing.
    pub fn swap_within_section(
        &mut self,
        section: Section,
        day: Day,
        ordinal1: usize,
        ordinal2: usize,
        exchange_instructor: bool,
    ) -> Result<(), ScheduleError> {
        let slots: Vec<TimeSlot> = self
            .sessions_for(section, day)
            .iter()
            .map(|r| r.slot)
            .collect();

        let resolve = |ordinal: usize| -> Result<TimeSlot, ScheduleError> {
            if ordinal == 0 || ordinal > slots.len() {
                return Err(ScheduleError::invalid_argument(format!(
                    "slot ordinal {ordinal} out of range (section {section} has {} sessions on {day})",
                    slots.len()
                )));
            }
            Ok(slots[ordinal - 1])
        };
        let slot1 = resolve(ordinal1)?;
        let slot2 = resolve(ordinal2)?;
        if slot1 == slot2 {
            return Err(ScheduleError::invalid_argument(
                "cannot swap a session with itself",
            ));
        }

        let find = |store: &RecordStore, slot: TimeSlot| {
            store
                .records()
                .iter()
                .position(|r| r.section == section && r.day == day && r.slot == slot)
        };
        // Both ordinals resolved from the live listing, so the positions
        // exist.
        let (ia, ib) = match (find(self, slot1), find(self, slot2)) {
            (Some(ia), Some(ib)) => (ia, ib),
            _ => {
                return Err(ScheduleError::not_found(format!(
                    "session listing changed for section {section} on {day}"
                )))
            }
        };

        self.exchange_fields(ia, ib, exchange_instructor);
        info!(%section, %day, %slot1, %slot2, exchange_instructor, "swapped within section");
        Ok(())
    }

    /// Handles an instructor becoming unavailable in one section.
    ///
    /// For every session taught by that instructor in the section (store
    /// order), the record is snapshotted to the undo log and then exchanged
    /// with the first session in the same section and day at a different slot
    /// taught by a different instructor. Free periods never act as partners.
    /// When no partner exists the slot is converted to a free period.
    /// First-match, not best-match.
    pub fn handle_instructor_unavailable(
        &mut self,
        instructor: &str,
        section: Section,
    ) -> Vec<Displacement> {
        let targets: Vec<usize> = self
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.section == section && r.instructor == instructor)
            .map(|(i, _)| i)
            .collect();

        let mut report = Vec::with_capacity(targets.len());
        for idx in targets {
            let snapshot = UndoSnapshot::from(&self.records()[idx]);
            let day = snapshot.day;
            let slot = snapshot.slot;
            let displaced_subject = snapshot.subject.clone();
            self.push_undo(snapshot);

            let partner = self.records().iter().position(|r| {
                r.section == section
                    && r.day == day
                    && r.slot != slot
                    && r.instructor != instructor
                    && !r.is_free_period()
            });

            let outcome = match partner {
                Some(j) => {
                    let partner_slot = self.records()[j].slot;
                    self.exchange_fields(idx, j, true);
                    let moved_in = &self.records()[idx];
                    debug!(%section, %day, %slot, %partner_slot, "unavailable: swapped");
                    DisplacementOutcome::Swapped {
                        partner_slot,
                        incoming_subject: moved_in.subject.clone(),
                        incoming_instructor: moved_in.instructor.clone(),
                    }
                }
                None => {
                    let rec = &mut self.records_mut()[idx];
                    rec.subject = FREE_SUBJECT.to_string();
                    rec.instructor = FREE_INSTRUCTOR.to_string();
                    debug!(%section, %day, %slot, "unavailable: freed");
                    DisplacementOutcome::Freed
                }
            };
            report.push(Displacement {
                day,
                slot,
                subject: displaced_subject,
                outcome,
            });
        }

        info!(instructor, %section, displaced = report.len(), "handled unavailability");
        report
    }

    /// Pops the most recent undo entry. When a record still occupies the
    /// snapshot's slot, its subject+instructor are restored to the snapshot
    /// values; the report says whether that happened.
    pub fn undo_last(&mut self) -> Option<UndoReport> {
        let snapshot = self.pop_undo()?;
        let idx = self.records().iter().position(|r| {
            r.section == snapshot.section && r.day == snapshot.day && r.slot == snapshot.slot
        });
        let restored = match idx {
            Some(i) => {
                let rec = &mut self.records_mut()[i];
                rec.subject = snapshot.subject.clone();
                rec.instructor = snapshot.instructor.clone();
                true
            }
            None => false,
        };
        info!(slot = %snapshot.slot, day = %snapshot.day, restored, "undo");
        Some(UndoReport { snapshot, restored })
    }

    /// Sets the instructor on every record with the given subject code.
    /// Returns the number of records updated; zero matches is not an error.
    pub fn bulk_reassign_instructor(&mut self, subject_code: &str, instructor: &str) -> usize {
        let mut updated = 0;
        for rec in self.records_mut() {
            if rec.subject == subject_code {
                rec.instructor = instructor.to_string();
                updated += 1;
            }
        }
        info!(subject_code, instructor, updated, "bulk reassigned instructor");
        updated
    }

    /// Existing (section, day, slot) placements of a subject, used by the
    /// assign-new-teacher flow to take over a subject wholesale.
    pub fn slots_for_subject(&self, subject_code: &str) -> Vec<(Section, Day, TimeSlot)> {
        self.find_all(move |r| r.subject == subject_code)
            .map(|r| (r.section, r.day, r.slot))
            .collect()
    }

    /// Exchanges subject (and optionally instructor) between two distinct
    /// record positions.
    fn exchange_fields(&mut self, ia: usize, ib: usize, exchange_instructor: bool) {
        debug_assert_ne!(ia, ib);
        let recs = self.records_mut();
        let subject_a = std::mem::take(&mut recs[ia].subject);
        recs[ia].subject = std::mem::replace(&mut recs[ib].subject, subject_a);
        if exchange_instructor {
            let instructor_a = std::mem::take(&mut recs[ia].instructor);
            recs[ia].instructor = std::mem::replace(&mut recs[ib].instructor, instructor_a);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_records;
    use std::collections::HashSet;

    fn seeded() -> RecordStore {
        RecordStore::with_records(seed_records())
    }

    fn section(c: char) -> Section {
        Section::new(c).unwrap()
    }

    fn slot(label: &str) -> TimeSlot {
        TimeSlot::from_label(label).unwrap()
    }

    /// Number of (section, day, slot) triples held by more than one record.
    fn duplicate_triples(store: &RecordStore) -> usize {
        let mut seen = HashSet::new();
        store
            .records()
            .iter()
            .filter(|r| !seen.insert((r.section, r.day, r.slot)))
            .count()
    }

    /// Mutations must never add occupancy duplicates beyond what raw inserts
    /// created. The seed carries two parallel-lab duplicates (THU 12:00 in
    /// sections C and D), so that is the baseline.
    fn assert_occupancy_invariant(store: &RecordStore) {
        assert!(
            duplicate_triples(store) <= 2,
            "mutation introduced an occupancy duplicate"
        );
    }

    #[test]
    fn seed_duplicates_are_limited_to_parallel_labs() {
        let store = seeded();
        assert_eq!(duplicate_triples(&store), 2);
        let mut seen = HashSet::new();
        for r in store.records() {
            if !seen.insert((r.section, r.day, r.slot)) {
                assert_eq!(r.day, Day::Thu);
                assert_eq!(r.slot, TimeSlot::from_label("12:00-12:55").unwrap());
            }
        }
    }

    #[test]
    fn reassign_section_round_trip() {
        let mut store = seeded();
        // FRI 11:05-12:00 exists for A but not for C.
        let day = Day::Fri;
        let s = slot("11:05-12:00");
        let original = store.record_at(section('A'), day, s).unwrap().clone();

        let moved = store
            .reassign_section(section('A'), day, s, section('C'))
            .unwrap();
        assert_eq!(moved.section, section('C'));
        assert!(store.record_at(section('A'), day, s).is_none());
        assert_occupancy_invariant(&store);

        let back = store
            .reassign_section(section('C'), day, s, section('A'))
            .unwrap();
        assert_eq!(back, original);
        assert_occupancy_invariant(&store);
    }

    #[test]
    fn reassign_section_detects_destination_collision() {
        let mut store = seeded();
        // MON 8:00-8:55 is occupied in both A and B.
        let err = store
            .reassign_section(section('A'), Day::Mon, slot("8:00-8:55"), section('B'))
            .unwrap_err();
        assert!(err.is_conflict());
        // Store unchanged.
        assert!(store.record_at(section('A'), Day::Mon, slot("8:00-8:55")).is_some());
    }

    #[test]
    fn reassign_section_missing_source_is_not_found() {
        let mut store = seeded();
        let err = store
            .reassign_section(section('A'), Day::Mon, slot("4:55-5:50"), section('B'))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn swap_between_sections_is_self_inverse() {
        let mut store = seeded();
        let a = store
            .record_at(section('A'), Day::Mon, slot("8:00-8:55"))
            .unwrap()
            .key();
        let b = store
            .record_at(section('C'), Day::Wed, slot("8:55-9:50"))
            .unwrap()
            .key();
        let before: Vec<SessionRecord> = store.records().to_vec();

        store.swap_between_sections(&a, &b, true).unwrap();
        // Keys changed, so relocate by triple for the second swap.
        let a2 = store
            .record_at(section('A'), Day::Mon, slot("8:00-8:55"))
            .unwrap()
            .key();
        let b2 = store
            .record_at(section('C'), Day::Wed, slot("8:55-9:50"))
            .unwrap()
            .key();
        store.swap_between_sections(&a2, &b2, true).unwrap();

        assert_eq!(store.records().to_vec(), before);
        assert_occupancy_invariant(&store);
    }

    #[test]
    fn swap_between_sections_requires_exact_match() {
        let mut store = seeded();
        let mut a = store
            .record_at(section('A'), Day::Mon, slot("8:00-8:55"))
            .unwrap()
            .key();
        let b = store
            .record_at(section('B'), Day::Mon, slot("8:00-8:55"))
            .unwrap()
            .key();
        a.instructor = "Nobody".to_string();
        let err = store.swap_between_sections(&a, &b, false).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn swap_with_self_is_rejected() {
        let mut store = seeded();
        let a = store
            .record_at(section('A'), Day::Mon, slot("8:00-8:55"))
            .unwrap()
            .key();
        let err = store.swap_between_sections(&a, &a.clone(), true).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidArgument { .. }));
    }

    #[test]
    fn swap_without_instructor_exchange_keeps_instructors() {
        let mut store = seeded();
        let a = store
            .record_at(section('A'), Day::Mon, slot("8:00-8:55"))
            .unwrap()
            .key();
        let b = store
            .record_at(section('A'), Day::Mon, slot("8:55-9:50"))
            .unwrap()
            .key();
        store.swap_between_sections(&a, &b, false).unwrap();

        let first = store.record_at(section('A'), Day::Mon, slot("8:00-8:55")).unwrap();
        let second = store.record_at(section('A'), Day::Mon, slot("8:55-9:50")).unwrap();
        assert_eq!(first.subject, b.subject);
        assert_eq!(first.instructor, a.instructor);
        assert_eq!(second.subject, a.subject);
        assert_eq!(second.instructor, b.instructor);
    }

    #[test]
    fn swap_within_section_by_ordinal() {
        let mut store = seeded();
        // Monday section A time-sorted: TMC202, TMC201, PBL, XMC201.
        store
            .swap_within_section(section('A'), Day::Mon, 1, 2, true)
            .unwrap();
        let first = store.record_at(section('A'), Day::Mon, slot("8:00-8:55")).unwrap();
        let second = store.record_at(section('A'), Day::Mon, slot("8:55-9:50")).unwrap();
        assert_eq!(first.subject, "TMC201");
        assert_eq!(first.instructor, "Dr. Udham Singh");
        assert_eq!(second.subject, "TMC202");
        assert_eq!(second.instructor, "Mr. Amit Juyal");
        assert_occupancy_invariant(&store);
    }

    #[test]
    fn swap_within_section_rejects_bad_ordinals() {
        let mut store = seeded();
        let err = store
            .swap_within_section(section('A'), Day::Mon, 1, 9, false)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidArgument { .. }));
        let err = store
            .swap_within_section(section('A'), Day::Mon, 0, 1, false)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidArgument { .. }));
        let err = store
            .swap_within_section(section('A'), Day::Mon, 2, 2, false)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidArgument { .. }));
    }

    #[test]
    fn unavailable_instructor_swaps_with_same_day_partner() {
        let mut store = seeded();
        let report = store.handle_instructor_unavailable("Mr. Digamber", section('A'));
        // Mr. Digamber teaches exactly one session in A (MON 11:05-12:00).
        assert_eq!(report.len(), 1);
        let displacement = &report[0];
        assert_eq!(displacement.day, Day::Mon);
        assert_eq!(displacement.subject, "XMC201");
        match &displacement.outcome {
            DisplacementOutcome::Swapped {
                partner_slot,
                incoming_instructor,
                ..
            } => {
                assert_eq!(partner_slot.index(), slot("8:00-8:55").index());
                assert_ne!(incoming_instructor, "Mr. Digamber");
            }
            DisplacementOutcome::Freed => panic!("expected swap, section A Monday has partners"),
        }
        // The displaced session moved to the partner slot.
        let partner = store.record_at(section('A'), Day::Mon, slot("8:00-8:55")).unwrap();
        assert_eq!(partner.instructor, "Mr. Digamber");
        assert_eq!(partner.subject, "XMC201");
        assert_eq!(store.undo_depth(), 1);
        assert_occupancy_invariant(&store);
    }

    #[test]
    fn unavailable_instructor_with_no_partner_frees_slot() {
        let mut store = RecordStore::new();
        store.insert(SessionRecord::new(
            Day::Mon,
            slot("8:00-8:55"),
            "TMC201",
            "Dr. Udham Singh",
            section('A'),
        ));
        // Only other session that day is taught by the same instructor.
        store.insert(SessionRecord::new(
            Day::Mon,
            slot("8:55-9:50"),
            "TMC203",
            "Dr. Udham Singh",
            section('A'),
        ));

        let report = store.handle_instructor_unavailable("Dr. Udham Singh", section('A'));
        assert_eq!(report.len(), 2);
        assert!(report
            .iter()
            .all(|d| d.outcome == DisplacementOutcome::Freed));
        for r in store.records() {
            assert!(r.is_free_period());
            assert_eq!(r.subject, FREE_SUBJECT);
        }
        assert_eq!(store.undo_depth(), 2);
    }

    #[test]
    fn undo_restores_most_recent_displacement() {
        let mut store = seeded();
        let before = store
            .record_at(section('A'), Day::Mon, slot("11:05-12:00"))
            .unwrap()
            .clone();
        store.handle_instructor_unavailable("Mr. Digamber", section('A'));
        assert_ne!(
            store
                .record_at(section('A'), Day::Mon, slot("11:05-12:00"))
                .unwrap()
                .instructor,
            before.instructor
        );

        let report = store.undo_last().unwrap();
        assert!(report.restored);
        assert_eq!(report.snapshot.subject, before.subject);
        let after = store
            .record_at(section('A'), Day::Mon, slot("11:05-12:00"))
            .unwrap();
        assert_eq!(after.subject, before.subject);
        assert_eq!(after.instructor, before.instructor);

        // Log is empty now.
        assert!(store.undo_last().is_none());
    }

    #[test]
    fn bulk_reassign_counts_updates() {
        let mut store = seeded();
        let expected = store.find_all(|r| r.subject == "TMC203").count();
        assert!(expected > 0);
        let updated = store.bulk_reassign_instructor("TMC203", "Dr. New Hire");
        assert_eq!(updated, expected);
        assert!(store
            .find_all(|r| r.subject == "TMC203")
            .all(|r| r.instructor == "Dr. New Hire"));

        // Zero matches is a no-op, not an error.
        assert_eq!(store.bulk_reassign_instructor("NOPE999", "X"), 0);
    }

    #[test]
    fn slots_for_subject_lists_existing_placements() {
        let store = seeded();
        let slots = store.slots_for_subject("PBL");
        assert!(!slots.is_empty());
        for (sec, day, s) in &slots {
            let rec = store.record_at(*sec, *day, *s).unwrap();
            assert_eq!(rec.subject, "PBL");
        }
    }
}
