//! Interactive menu front end. Presentation only: every schedule decision is
//! delegated to the library.

use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use classtab::persist;
use classtab::schedule::{
    AliasConfig, Curriculum, Day, DisplacementOutcome, RecordKey, RecordStore, SearchField,
    Section, SessionRecord, TimeSlot, SLOT_CATALOG,
};
use classtab::seed::seed_records;

#[derive(Parser, Debug)]
#[command(name = "classtab", about = "Weekly class-schedule manager")]
struct Args {
    /// Load an exported timetable instead of the built-in seed data
    #[arg(long)]
    load: Option<PathBuf>,

    /// JSON alias map for instructor-name normalization
    #[arg(long)]
    aliases: Option<PathBuf>,

    /// Weekly lecture count above which an instructor is overloaded
    #[arg(long, default_value_t = 15)]
    threshold: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let args = Args::parse();
    let curriculum = Curriculum::standard();
    let aliases = match &args.aliases {
        Some(path) => AliasConfig::load_from_file(path)
            .with_context(|| format!("loading alias map from {}", path.display()))?,
        None => AliasConfig::builtin(),
    };

    let mut store = RecordStore::new();
    match &args.load {
        Some(path) => {
            let count = persist::load(path, &mut store)
                .with_context(|| format!("loading timetable from {}", path.display()))?;
            println!("Loaded {count} sessions from {}", path.display());
        }
        None => store.replace_all(seed_records()),
    }

    loop {
        println!("\n====== Classroom Scheduler ======");
        println!("1. Display timetable");
        println!("2. Swap classes");
        println!("3. Change class section");
        println!("4. Teacher load analysis");
        println!("5. Assign new teacher");
        println!("6. Save timetable");
        println!("7. Load timetable");
        println!("8. Search timetable");
        println!("9. Mark instructor unavailable");
        println!("10. Undo last change");
        println!("11. Statistics dashboard");
        println!("12. Exit");

        let choice = prompt("Enter choice: ")?;
        let outcome = match choice.trim() {
            "1" => display_menu(&store, &curriculum),
            "2" => swap_menu(&mut store),
            "3" => change_section(&mut store),
            "4" => {
                print_teacher_load(&store, &aliases, args.threshold);
                Ok(())
            }
            "5" => assign_new_teacher(&mut store, &curriculum),
            "6" => save_menu(&store, &curriculum),
            "7" => load_menu(&mut store),
            "8" => search_menu(&store, &curriculum),
            "9" => mark_unavailable(&mut store),
            "10" => {
                undo_last(&mut store);
                Ok(())
            }
            "11" => {
                print_statistics(&store, &aliases);
                Ok(())
            }
            "12" => {
                println!("Thank you for using Classroom Scheduler!");
                return Ok(());
            }
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };
        if let Err(e) = outcome {
            println!("Error: {e}");
        }
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_section(message: &str) -> Result<Section> {
    let input = prompt(message)?;
    let letter = input
        .chars()
        .next()
        .context("expected a section letter")?
        .to_ascii_uppercase();
    Ok(Section::new(letter)?)
}

fn prompt_day() -> Result<Day> {
    for (i, day) in Day::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, day.full_name());
    }
    let n: usize = prompt("Enter choice (1-6): ")?.parse().context("expected a number")?;
    Day::ALL
        .get(n.checked_sub(1).context("choice out of range")?)
        .copied()
        .context("choice out of range")
}

fn prompt_slot(message: &str) -> Result<TimeSlot> {
    Ok(TimeSlot::from_label(&prompt(message)?)?)
}

fn prompt_yes_no(message: &str) -> Result<bool> {
    Ok(matches!(prompt(message)?.as_str(), "y" | "Y" | "1" | "yes"))
}

fn prompt_record_key(which: &str) -> Result<RecordKey> {
    println!("\nEnter details for the {which} class:");
    let section = prompt_section("Section: ")?;
    let day = Day::from_abbrev(&prompt("Day (MON/TUE/WED/THU/FRI/SAT): ")?)?;
    let slot = prompt_slot("Time (e.g., 8:00-8:55): ")?;
    let subject = prompt("Subject code: ")?;
    let instructor = prompt("Teacher name: ")?;
    Ok(RecordKey {
        section,
        day,
        slot,
        subject,
        instructor,
    })
}

fn print_day_listing(store: &RecordStore, curriculum: &Curriculum, section: Section, day: Day) {
    let sessions = store.sessions_for(section, day);
    if sessions.is_empty() {
        return;
    }
    println!("\n{}:", day.full_name());
    println!("{:<13} | {:<8} | {:<40} | {}", "Time", "Code", "Subject", "Faculty");
    for rec in sessions {
        println!(
            "{:<13} | {:<8} | {:<40} | {}",
            rec.slot.label(),
            rec.subject,
            curriculum.resolve(&rec.subject),
            rec.instructor
        );
    }
}

fn print_week(store: &RecordStore, curriculum: &Curriculum, section: Section) {
    println!("\n===== TIMETABLE FOR SECTION {section} =====");
    for day in Day::ALL {
        print_day_listing(store, curriculum, section, day);
    }
}

fn display_menu(store: &RecordStore, curriculum: &Curriculum) -> Result<()> {
    println!("1. Full timetable (all sections)");
    println!("2. One section");
    match prompt("Enter choice: ")?.as_str() {
        "1" => {
            for section in store.sections() {
                print_week(store, curriculum, section);
            }
        }
        "2" => {
            let section = prompt_section("Enter section: ")?;
            println!("1. Full week");
            println!("2. Specific day");
            match prompt("Enter choice: ")?.as_str() {
                "1" => print_week(store, curriculum, section),
                "2" => {
                    let day = prompt_day()?;
                    print_day_listing(store, curriculum, section, day);
                }
                _ => println!("Invalid choice."),
            }
        }
        _ => println!("Invalid choice."),
    }
    Ok(())
}

fn swap_menu(store: &mut RecordStore) -> Result<()> {
    println!("1. Swap between two sections");
    println!("2. Swap within the same section");
    match prompt("Enter choice: ")?.as_str() {
        "1" => {
            let a = prompt_record_key("first")?;
            let b = prompt_record_key("second")?;
            let exchange = prompt_yes_no("Swap teachers as well? (y/n): ")?;
            store.swap_between_sections(&a, &b, exchange)?;
            println!("Classes swapped successfully.");
        }
        "2" => {
            let section = prompt_section("Enter section: ")?;
            let day = prompt_day()?;
            let sessions = store.sessions_for(section, day);
            if sessions.is_empty() {
                println!("No sessions for section {section} on {day}.");
                return Ok(());
            }
            for (i, rec) in sessions.iter().enumerate() {
                println!("{}. {} - {} - {}", i + 1, rec.slot.label(), rec.subject, rec.instructor);
            }
            let ord1: usize = prompt("First slot number: ")?.parse().context("expected a number")?;
            let ord2: usize = prompt("Second slot number: ")?.parse().context("expected a number")?;
            let exchange = prompt_yes_no("Swap teachers as well? (y/n): ")?;
            store.swap_within_section(section, day, ord1, ord2, exchange)?;
            println!("Classes swapped successfully.");
        }
        _ => println!("Invalid choice."),
    }
    Ok(())
}

fn change_section(store: &mut RecordStore) -> Result<()> {
    let from = prompt_section("Enter current section: ")?;
    let to = prompt_section("Enter new section: ")?;
    let day = Day::from_abbrev(&prompt("Enter the day (MON/TUE/WED/THU/FRI/SAT): ")?)?;
    let slot = prompt_slot("Enter the time slot (e.g., 8:00-8:55): ")?;
    let moved = store.reassign_section(from, day, slot, to)?;
    println!("Changed from section {from} to section {to}.");
    println!("Details: {} - {} - {}", moved.subject, moved.instructor, moved.slot);
    Ok(())
}

fn print_teacher_load(store: &RecordStore, aliases: &AliasConfig, threshold: usize) {
    println!("\n{:<25} | {:<13} | {:<10} | Status", "Teacher Name", "Lectures/Week", "Sections");
    for load in store.teacher_load(threshold, aliases) {
        let sections: String = load
            .sections
            .iter()
            .map(|s| format!("{s} "))
            .collect();
        println!(
            "{:<25} | {:<13} | {:<10} | {}",
            load.name,
            load.lectures,
            sections,
            if load.overloaded { "OVERLOADED" } else { "Normal" }
        );
    }
    println!("Note: more than {threshold} lectures per week is OVERLOADED");
}

fn assign_new_teacher(store: &mut RecordStore, curriculum: &Curriculum) -> Result<()> {
    let name = prompt("Enter new teacher name: ")?;
    println!("\n{:<8} | {:<40} | Type", "Code", "Subject Name");
    for entry in curriculum.entries() {
        println!(
            "{:<8} | {:<40} | {}",
            entry.code,
            entry.name,
            if entry.is_lab { "Lab" } else { "Theory" }
        );
    }
    let code = prompt("Enter subject code (existing or new): ")?;

    let existing = store.slots_for_subject(&code);
    if !existing.is_empty() {
        println!("Found existing time slots for {code}:");
        for (section, day, slot) in &existing {
            println!("Section {section}: {day} {slot}");
        }
        let updated = store.bulk_reassign_instructor(&code, &name);
        println!("Assigned {name} to {updated} existing sessions.");
        return Ok(());
    }

    println!("No existing time slots for {code}; placing it manually.");
    for section in store.sections() {
        loop {
            println!("\nSection {section} - select day:");
            let day = prompt_day()?;
            for (i, label) in SLOT_CATALOG.iter().enumerate() {
                let slot = TimeSlot::from_label(label).expect("catalog label");
                let status = if store.is_slot_free(section, day, slot) {
                    "(Available)"
                } else {
                    "(Occupied)"
                };
                println!("{}. {label} {status}", i + 1);
            }
            let n: usize = prompt("Enter time slot number: ")?.parse().context("expected a number")?;
            let Some(label) = SLOT_CATALOG.get(n.wrapping_sub(1)) else {
                println!("Invalid time choice, try again.");
                continue;
            };
            let slot = TimeSlot::from_label(label).expect("catalog label");
            let record = SessionRecord::new(day, slot, code.clone(), name.clone(), section);
            match store.insert_checked(record) {
                Ok(()) => {
                    println!("Lecture added for section {section}: {code} at {slot} on {day}");
                    break;
                }
                Err(e) => println!("{e}; choose a different slot."),
            }
        }
    }
    println!("New teacher assigned successfully.");
    Ok(())
}

fn save_menu(store: &RecordStore, curriculum: &Curriculum) -> Result<()> {
    println!("1. Save full timetable");
    println!("2. Save one section");
    match prompt("Enter choice: ")?.as_str() {
        "1" => {
            let filename = persist::timestamped_filename();
            persist::save(Path::new(&filename), store, curriculum)?;
            println!("Timetable saved to {filename}");
        }
        "2" => {
            let section = prompt_section("Enter section: ")?;
            let filename = persist::section_filename(section);
            std::fs::write(&filename, persist::render_section(store, curriculum, section))?;
            println!("Section {section} timetable saved to {filename}");
        }
        _ => println!("Invalid choice."),
    }
    Ok(())
}

fn load_menu(store: &mut RecordStore) -> Result<()> {
    let filename = prompt("Enter filename to load: ")?;
    let count = persist::load(Path::new(&filename), store)?;
    println!("Loaded {count} sessions from {filename}");
    Ok(())
}

fn search_menu(store: &RecordStore, curriculum: &Curriculum) -> Result<()> {
    println!("1. Search by teacher");
    println!("2. Search by subject");
    println!("3. Search by time");
    let field = match prompt("Enter choice: ")?.as_str() {
        "1" => SearchField::Instructor,
        "2" => SearchField::Subject,
        "3" => SearchField::Time,
        _ => {
            println!("Invalid choice.");
            return Ok(());
        }
    };
    let query = prompt("Enter search keyword: ")?;
    let hits = store.search(field, &query, curriculum);
    if hits.is_empty() {
        println!("No matches found.");
        return Ok(());
    }
    for rec in hits {
        println!(
            "Section {} | {} | {} | {} | {}",
            rec.section,
            rec.day,
            rec.slot,
            rec.subject,
            rec.instructor
        );
    }
    Ok(())
}

fn mark_unavailable(store: &mut RecordStore) -> Result<()> {
    let name = prompt("Enter instructor name: ")?;
    let section = prompt_section("Enter section: ")?;
    let report = store.handle_instructor_unavailable(&name, section);
    if report.is_empty() {
        println!("{name} has no sessions in section {section}.");
        return Ok(());
    }
    for d in report {
        match d.outcome {
            DisplacementOutcome::Swapped {
                partner_slot,
                incoming_subject,
                incoming_instructor,
            } => println!(
                "{} {}: {} swapped with {} ({}) from {}",
                d.day, d.slot, d.subject, incoming_subject, incoming_instructor, partner_slot
            ),
            DisplacementOutcome::Freed => {
                println!("{} {}: {} marked as free period", d.day, d.slot, d.subject)
            }
        }
    }
    Ok(())
}

fn undo_last(store: &mut RecordStore) {
    match store.undo_last() {
        Some(report) => {
            let snap = &report.snapshot;
            if report.restored {
                println!(
                    "Undo: restored {} ({}) at {} {} in section {}",
                    snap.subject, snap.instructor, snap.day, snap.slot, snap.section
                );
            } else {
                println!(
                    "Undo: slot {} {} in section {} no longer exists; {} ({}) not restored",
                    snap.day, snap.slot, snap.section, snap.subject, snap.instructor
                );
            }
        }
        None => println!("Nothing to undo."),
    }
}

fn print_statistics(store: &RecordStore, aliases: &AliasConfig) {
    let stats = store.statistics(aliases);
    match &stats.most_loaded {
        Some(t) => println!("Most loaded teacher: {} ({} lectures)", t.name, t.lectures),
        None => println!("Most loaded teacher: N/A"),
    }
    for (section, day, count) in &stats.busiest_days {
        println!("Busiest day for section {section}: {day} ({count} lectures)");
    }
    for (section, count) in &stats.free_periods {
        println!("Free periods for section {section}: {count}");
    }
}
