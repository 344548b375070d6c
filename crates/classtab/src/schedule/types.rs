/// Types for weekly schedule data
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;

/// Instructor sentinel marking a free period.
pub const FREE_INSTRUCTOR: &str = "-";

/// Subject placed into a slot when a session is converted to a free period.
pub const FREE_SUBJECT: &str = "Free Period";

/// Fixed catalog of daily time slots, ordered by start time.
///
/// Slots are addressed by index (see [`TimeSlot`]); the labels themselves are
/// display strings and carry no ordering semantics.
pub const SLOT_CATALOG: &[&str] = &[
    "8:00-8:55",
    "8:00-9:50",
    "8:55-9:50",
    "10:10-11:05",
    "11:05-12:00",
    "12:00-12:55",
    "12:55-1:50",
    "2:10-3:05",
    "3:05-4:00",
    "4:00-4:55",
    "4:55-5:50",
];

/// A weekday in the teaching week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 6] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat];

    /// Three-letter abbreviation used in listings and exports.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Day::Mon => "MON",
            Day::Tue => "TUE",
            Day::Wed => "WED",
            Day::Thu => "THU",
            Day::Fri => "FRI",
            Day::Sat => "SAT",
        }
    }

    /// Full weekday name for headings.
    pub fn full_name(&self) -> &'static str {
        match self {
            Day::Mon => "MONDAY",
            Day::Tue => "TUESDAY",
            Day::Wed => "WEDNESDAY",
            Day::Thu => "THURSDAY",
            Day::Fri => "FRIDAY",
            Day::Sat => "SATURDAY",
        }
    }

    /// Parses a three-letter abbreviation, case-insensitively.
    pub fn from_abbrev(s: &str) -> Result<Day, ScheduleError> {
        let s = s.trim();
        Day::ALL
            .iter()
            .copied()
            .find(|d| d.abbrev().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScheduleError::invalid_argument(format!("unknown day: {s:?}")))
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// A time slot, stored as a stable index into [`SLOT_CATALOG`].
///
/// Comparing indices gives the correct chronological order even though the
/// labels mix one- and two-digit hours.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeSlot(usize);

impl TimeSlot {
    /// Looks up a catalog label, e.g. `"8:00-8:55"`.
    pub fn from_label(label: &str) -> Result<TimeSlot, ScheduleError> {
        let label = label.trim();
        SLOT_CATALOG
            .iter()
            .position(|s| *s == label)
            .map(TimeSlot)
            .ok_or_else(|| {
                ScheduleError::invalid_argument(format!("unknown time slot: {label:?}"))
            })
    }

    /// The catalog index.
    pub fn index(&self) -> usize {
        self.0
    }

    /// The display label for this slot.
    pub fn label(&self) -> &'static str {
        SLOT_CATALOG[self.0]
    }

    /// Iterates the whole catalog in chronological order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..SLOT_CATALOG.len()).map(TimeSlot)
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A section identifier: one ASCII uppercase letter.
///
/// The seed data uses A–D but the domain is not hard-limited.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Section(char);

impl Section {
    pub fn new(c: char) -> Result<Section, ScheduleError> {
        if c.is_ascii_uppercase() {
            Ok(Section(c))
        } else {
            Err(ScheduleError::invalid_argument(format!(
                "section must be an uppercase letter, got {c:?}"
            )))
        }
    }

    pub fn letter(&self) -> char {
        self.0
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scheduled meeting: the unit the store holds and mutates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionRecord {
    pub day: Day,
    pub slot: TimeSlot,
    pub subject: String,
    pub instructor: String,
    pub section: Section,
}

impl SessionRecord {
    pub fn new(
        day: Day,
        slot: TimeSlot,
        subject: impl Into<String>,
        instructor: impl Into<String>,
        section: Section,
    ) -> SessionRecord {
        SessionRecord {
            day,
            slot,
            subject: subject.into(),
            instructor: instructor.into(),
            section,
        }
    }

    /// True when the slot holds no real session.
    pub fn is_free_period(&self) -> bool {
        self.instructor == FREE_INSTRUCTOR
    }

    /// The structural identity of this record, used to locate swap targets.
    pub fn key(&self) -> RecordKey {
        RecordKey {
            section: self.section,
            day: self.day,
            slot: self.slot,
            subject: self.subject.clone(),
            instructor: self.instructor.clone(),
        }
    }
}

/// Exact-match locator for a record: identity is structural, not synthetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordKey {
    pub section: Section,
    pub day: Day,
    pub slot: TimeSlot,
    pub subject: String,
    pub instructor: String,
}

impl RecordKey {
    pub fn matches(&self, record: &SessionRecord) -> bool {
        record.section == self.section
            && record.day == self.day
            && record.slot == self.slot
            && record.subject == self.subject
            && record.instructor == self.instructor
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} ({})",
            self.section, self.day, self.slot, self.subject, self.instructor
        )
    }
}

/// One entry in an availability listing for a section/day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub slot: TimeSlot,
    pub subject: String,
    /// `None` when the slot is a free period.
    pub occupant: Option<String>,
}

/// Which field a timetable search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Instructor,
    /// Matches both the raw code and the curriculum-resolved name.
    Subject,
    Time,
}

/// Derived weekly workload for one instructor. Never persisted; recomputed
/// from the store on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherLoad {
    pub name: String,
    pub lectures: usize,
    /// Sections taught, sorted ascending.
    pub sections: Vec<Section>,
    pub overloaded: bool,
}

/// Placeholder detector: instructor strings containing "Lab" or "Sec" denote
/// a lab-session placeholder, not a real person.
pub fn is_placeholder_name(name: &str) -> bool {
    name.contains("Lab") || name.contains("Sec")
}
