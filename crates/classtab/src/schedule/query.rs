//! Read-only lookups over the record store. All operations here are
//! side-effect free; mutation lives in the mutation engine.

use super::curriculum::Curriculum;
use super::store::RecordStore;
use super::types::{Day, SearchField, Section, SessionRecord, SlotView, TimeSlot};

/// Case-insensitive substring match.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl RecordStore {
    /// Records for a section/day, ascending by time-slot catalog index.
    ///
    /// The sort is stable; parallel-lab records sharing a slot keep their
    /// insertion order.
    pub fn sessions_for(&self, section: Section, day: Day) -> Vec<&SessionRecord> {
        let mut sessions: Vec<&SessionRecord> = self
            .find_all(move |r| r.section == section && r.day == day)
            .collect();
        sessions.sort_by_key(|r| r.slot);
        sessions
    }

    /// Ordered listing of the day's slots for a section. With
    /// `include_occupied` false, only free-period entries are returned.
    pub fn available_slots(
        &self,
        section: Section,
        day: Day,
        include_occupied: bool,
    ) -> Vec<SlotView> {
        self.sessions_for(section, day)
            .into_iter()
            .filter(|r| include_occupied || r.is_free_period())
            .map(|r| SlotView {
                slot: r.slot,
                subject: r.subject.clone(),
                occupant: if r.is_free_period() {
                    None
                } else {
                    Some(r.instructor.clone())
                },
            })
            .collect()
    }

    /// True iff no record occupies the (section, day, slot) triple.
    pub fn is_slot_free(&self, section: Section, day: Day, slot: TimeSlot) -> bool {
        self.record_at(section, day, slot).is_none()
    }

    /// Case-insensitive substring search against the chosen field.
    ///
    /// Subject searches match both the raw code and the curriculum-resolved
    /// name. Results come back in store order.
    pub fn search<'a>(
        &'a self,
        field: SearchField,
        query: &str,
        curriculum: &Curriculum,
    ) -> Vec<&'a SessionRecord> {
        self.records()
            .iter()
            .filter(|r| match field {
                SearchField::Instructor => contains_ci(&r.instructor, query),
                SearchField::Subject => {
                    contains_ci(&r.subject, query)
                        || contains_ci(curriculum.resolve(&r.subject), query)
                }
                SearchField::Time => contains_ci(r.slot.label(), query),
            })
            .collect()
    }
}
