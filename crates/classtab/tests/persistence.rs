//! On-disk persistence round trip: saving an export and loading it back must
//! reproduce the record set exactly, including after mutations.

use std::collections::HashSet;

use classtab::persist;
use classtab::schedule::{Curriculum, Day, RecordStore, Section, SessionRecord, TimeSlot};
use classtab::seed::seed_records;

fn section(c: char) -> Section {
    Section::new(c).unwrap()
}

fn slot(label: &str) -> TimeSlot {
    TimeSlot::from_label(label).unwrap()
}

fn record_set(store: &RecordStore) -> HashSet<SessionRecord> {
    store.records().iter().cloned().collect()
}

#[test]
fn save_then_load_reproduces_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timetable.txt");
    let curriculum = Curriculum::standard();

    let store = RecordStore::with_records(seed_records());
    persist::save(&path, &store, &curriculum).unwrap();

    let mut reloaded = RecordStore::new();
    let count = persist::load(&path, &mut reloaded).unwrap();
    assert_eq!(count, store.len());
    assert_eq!(record_set(&store), record_set(&reloaded));
}

#[test]
fn load_fully_replaces_existing_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timetable.txt");
    let curriculum = Curriculum::standard();

    let seeded = RecordStore::with_records(seed_records());
    persist::save(&path, &seeded, &curriculum).unwrap();

    // A store with unrelated content gets wholly replaced, not merged.
    let mut store = RecordStore::new();
    store.insert(SessionRecord::new(
        Day::Sat,
        slot("4:55-5:50"),
        "GP201",
        "Mr. Vishal",
        section('E'),
    ));
    persist::load(&path, &mut store).unwrap();

    assert_eq!(record_set(&store), record_set(&seeded));
    assert!(store.sections().iter().all(|s| s.letter() != 'E'));
}

#[test]
fn mutated_store_survives_the_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timetable.txt");
    let curriculum = Curriculum::standard();

    let mut store = RecordStore::with_records(seed_records());
    store
        .reassign_section(section('A'), Day::Fri, slot("11:05-12:00"), section('C'))
        .unwrap();
    store.bulk_reassign_instructor("TMC203", "Dr. New Hire");
    store.handle_instructor_unavailable("Mr. Vishal", section('D'));

    persist::save(&path, &store, &curriculum).unwrap();
    let mut reloaded = RecordStore::new();
    persist::load(&path, &mut reloaded).unwrap();

    assert_eq!(record_set(&store), record_set(&reloaded));
}

#[test]
fn loading_a_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecordStore::new();
    let err = persist::load(&dir.path().join("nope.txt"), &mut store).unwrap_err();
    assert!(matches!(err, classtab::ScheduleError::Io(_)));
    assert!(store.is_empty());
}
