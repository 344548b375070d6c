/// Schedule engine: record store, queries, mutations, and analytics
mod analytics;
mod config;
mod curriculum;
mod error;
mod mutation;
mod query;
mod store;
mod types;

pub use analytics::Statistics;
pub use config::AliasConfig;
pub use curriculum::{Curriculum, CurriculumEntry};
pub use error::ScheduleError;
pub use mutation::{Displacement, DisplacementOutcome, UndoReport};
pub use store::{RecordStore, UndoSnapshot};
pub use types::{
    is_placeholder_name, Day, RecordKey, SearchField, Section, SessionRecord, SlotView,
    TeacherLoad, TimeSlot, FREE_INSTRUCTOR, FREE_SUBJECT, SLOT_CATALOG,
};
