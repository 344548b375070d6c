//! Workload and schedule statistics, recomputed on demand from the store.

use super::config::AliasConfig;
use super::store::RecordStore;
use super::types::{is_placeholder_name, Day, Section, TeacherLoad, FREE_INSTRUCTOR};

/// Aggregate dashboard figures across the whole store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub most_loaded: Option<TeacherLoad>,
    /// Per section: busiest day and its session count.
    pub busiest_days: Vec<(Section, Day, usize)>,
    pub free_periods: Vec<(Section, usize)>,
}

impl RecordStore {
    /// Per-instructor weekly load: lecture count and sections taught.
    ///
    /// Known aliases are folded into their canonical names; the free-period
    /// sentinel and lab/section placeholders are excluded. Output is ordered
    /// descending by lecture count; ties keep first-seen order (stable sort).
    /// An instructor is overloaded when the count is strictly greater than
    /// `threshold`.
    pub fn teacher_load(&self, threshold: usize, aliases: &AliasConfig) -> Vec<TeacherLoad> {
        let mut loads: Vec<TeacherLoad> = Vec::new();

        for rec in self.records() {
            if rec.instructor == FREE_INSTRUCTOR || is_placeholder_name(&rec.instructor) {
                continue;
            }
            let name = aliases.canonicalize(&rec.instructor);
            let idx = match loads.iter().position(|t| t.name == name) {
                Some(idx) => idx,
                None => {
                    loads.push(TeacherLoad {
                        name: name.to_string(),
                        lectures: 0,
                        sections: Vec::new(),
                        overloaded: false,
                    });
                    loads.len() - 1
                }
            };
            let entry = &mut loads[idx];
            entry.lectures += 1;
            if !entry.sections.contains(&rec.section) {
                entry.sections.push(rec.section);
            }
        }

        for load in &mut loads {
            load.sections.sort();
            load.overloaded = load.lectures > threshold;
        }
        loads.sort_by_key(|t| std::cmp::Reverse(t.lectures));
        loads
    }

    /// The day with the most sessions for a section. Ties resolve to the
    /// earliest day in week order. `None` when the section has no sessions.
    pub fn busiest_day(&self, section: Section) -> Option<(Day, usize)> {
        let mut best: Option<(Day, usize)> = None;
        for day in Day::ALL {
            let count = self
                .find_all(move |r| r.section == section && r.day == day)
                .count();
            if count > 0 && best.map_or(true, |(_, max)| count > max) {
                best = Some((day, count));
            }
        }
        best
    }

    /// Number of free-period records in a section.
    pub fn free_period_count(&self, section: Section) -> usize {
        self.find_all(move |r| r.section == section && r.is_free_period())
            .count()
    }

    /// The instructor with the highest weekly lecture count, if any.
    pub fn most_loaded(&self, aliases: &AliasConfig) -> Option<TeacherLoad> {
        self.teacher_load(usize::MAX, aliases).into_iter().next()
    }

    /// One-shot dashboard summary over every section present in the store.
    pub fn statistics(&self, aliases: &AliasConfig) -> Statistics {
        let sections = self.sections();
        Statistics {
            most_loaded: self.most_loaded(aliases),
            busiest_days: sections
                .iter()
                .filter_map(|&s| self.busiest_day(s).map(|(d, n)| (s, d, n)))
                .collect(),
            free_periods: sections
                .iter()
                .map(|&s| (s, self.free_period_count(s)))
                .collect(),
        }
    }
}
