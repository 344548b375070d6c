//! Persistence collaborator: renders the store to a row-oriented text table
//! grouped by section, and parses such a table back into a record set.
//!
//! Field order (Day | Time | Code | Subject Name | Faculty) and the
//! grouping-by-section block structure are the round-trip contract; column
//! widths are presentation only.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::schedule::{
    Curriculum, Day, RecordStore, ScheduleError, Section, SessionRecord, TimeSlot,
};

const RULE: &str = "----------------------------------------------------------------";
const BANNER: &str = "================================================================";

/// Renders the whole store, grouped by section with a subject legend.
pub fn render(store: &RecordStore, curriculum: &Curriculum) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "                        TIMETABLE DATA");
    let _ = writeln!(
        out,
        "                  Saved on: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "{BANNER}");

    for section in store.sections() {
        let _ = writeln!(out);
        render_section_block(&mut out, store, curriculum, section);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "SUBJECT LEGEND:");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:<8} | {:<40} | {}", "Code", "Subject Name", "Type");
    let _ = writeln!(out, "{RULE}");
    for entry in curriculum.entries() {
        let _ = writeln!(
            out,
            "{:<8} | {:<40} | {}",
            entry.code,
            entry.name,
            if entry.is_lab { "Lab" } else { "Theory" }
        );
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// Renders one section's block on its own, without the legend.
pub fn render_section(store: &RecordStore, curriculum: &Curriculum, section: Section) -> String {
    let mut out = String::new();
    render_section_block(&mut out, store, curriculum, section);
    out
}

fn render_section_block(
    out: &mut String,
    store: &RecordStore,
    curriculum: &Curriculum,
    section: Section,
) {
    let _ = writeln!(out, "SECTION {section} TIMETABLE");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{:<5} | {:<13} | {:<8} | {:<40} | {}",
        "Day", "Time", "Code", "Subject Name", "Faculty"
    );
    let _ = writeln!(out, "{RULE}");
    for day in Day::ALL {
        let sessions = store.sessions_for(section, day);
        if sessions.is_empty() {
            continue;
        }
        for rec in sessions {
            let _ = writeln!(
                out,
                "{:<5} | {:<13} | {:<8} | {:<40} | {}",
                day.abbrev(),
                rec.slot.label(),
                rec.subject,
                curriculum.resolve(&rec.subject),
                rec.instructor
            );
        }
        let _ = writeln!(out, "{RULE}");
    }
}

/// Parses a rendered timetable back into records.
///
/// Scans section blocks, reading `|`-separated rows until the subject legend.
/// Unknown days or slot labels are a parse error naming the line.
pub fn parse(text: &str) -> Result<Vec<SessionRecord>, ScheduleError> {
    let mut records = Vec::new();
    let mut current_section: Option<Section> = None;

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.contains("SUBJECT LEGEND") {
            break;
        }
        if line.starts_with("SECTION ") && line.contains("TIMETABLE") {
            let letter = line
                .split_whitespace()
                .nth(1)
                .and_then(|w| w.chars().next())
                .ok_or_else(|| ScheduleError::Parse {
                    line: lineno + 1,
                    message: "malformed section heading".to_string(),
                })?;
            current_section = Some(Section::new(letter).map_err(|e| ScheduleError::Parse {
                line: lineno + 1,
                message: e.to_string(),
            })?);
            continue;
        }
        if !line.contains('|') || line.starts_with('-') || line.starts_with('=') {
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.first() == Some(&"Day") {
            continue; // column header row
        }
        if fields.len() != 5 {
            return Err(ScheduleError::Parse {
                line: lineno + 1,
                message: format!("expected 5 columns, found {}", fields.len()),
            });
        }
        let section = current_section.ok_or_else(|| ScheduleError::Parse {
            line: lineno + 1,
            message: "data row outside a section block".to_string(),
        })?;

        let map_err = |e: ScheduleError| ScheduleError::Parse {
            line: lineno + 1,
            message: e.to_string(),
        };
        let day = Day::from_abbrev(fields[0]).map_err(map_err)?;
        let slot = TimeSlot::from_label(fields[1]).map_err(map_err)?;
        // fields[3] is the curriculum-resolved name, redundant with the code.
        records.push(SessionRecord::new(day, slot, fields[2], fields[4], section));
    }

    Ok(records)
}

/// Writes the full rendered timetable to a file.
pub fn save(path: &Path, store: &RecordStore, curriculum: &Curriculum) -> Result<(), ScheduleError> {
    fs::write(path, render(store, curriculum))?;
    info!(path = %path.display(), records = store.len(), "saved timetable");
    Ok(())
}

/// Loads a timetable file, fully replacing the store's contents.
/// Load is destructive, not merge. Returns the number of records loaded.
pub fn load(path: &Path, store: &mut RecordStore) -> Result<usize, ScheduleError> {
    let text = fs::read_to_string(path)?;
    let records = parse(&text)?;
    let count = records.len();
    store.replace_all(records);
    info!(path = %path.display(), records = count, "loaded timetable");
    Ok(count)
}

/// Timestamped filename for a full export, e.g. `timetable_20260829_101500.txt`.
pub fn timestamped_filename() -> String {
    format!("timetable_{}.txt", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Timestamped filename for a single-section export.
pub fn section_filename(section: Section) -> String {
    format!(
        "section_{}_timetable_{}.txt",
        section,
        Local::now().format("%Y%m%d_%H%M%S")
    )
}
