//! classtab: a weekly class-schedule engine.
//!
//! The core is the schedule data model and its mutation/query engine: an
//! in-memory record store, swap/reassignment algorithms, availability and
//! conflict checks, substring search, and workload analytics. The core only
//! consumes and produces plain data; presentation, file layout, and anything
//! that touches the outside world belong to collaborators (the bundled CLI
//! binary is one such collaborator).

pub mod persist;
pub mod schedule;
pub mod seed;

pub use schedule::{
    AliasConfig, Curriculum, Day, RecordKey, RecordStore, ScheduleError, SearchField, Section,
    SessionRecord, TeacherLoad, TimeSlot,
};
