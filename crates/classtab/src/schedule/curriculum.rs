//! Static catalog mapping subject codes to display names and lab/theory
//! classification. Read-only after initialization.

use serde::{Deserialize, Serialize};

/// One curriculum entry: code → (name, lab flag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumEntry {
    pub code: String,
    pub name: String,
    pub is_lab: bool,
}

/// The subject catalog used to resolve codes for display and search.
#[derive(Debug, Clone)]
pub struct Curriculum {
    entries: Vec<CurriculumEntry>,
}

impl Curriculum {
    pub fn new(entries: Vec<CurriculumEntry>) -> Curriculum {
        Curriculum { entries }
    }

    /// The MCA curriculum the seed timetable is drawn from.
    pub fn standard() -> Curriculum {
        let raw: &[(&str, &str, bool)] = &[
            ("TMC201", "Advanced Database Management Systems", false),
            ("TMC202", "Advanced Java Programming", false),
            ("TMC203", "Data Structures", false),
            ("TMC215", "DSE-II: Human-Computer Interaction", false),
            ("TMC221", "GE-I: Research Methodology", false),
            ("XMC201", "Career Skills-II", false),
            ("PMC201", "ADBMS Laboratory", true),
            ("PMC202", "Advanced Java Programming Lab", true),
            ("PMC203", "Data Structures Laboratory", true),
            ("GP201", "General Proficiency", false),
            ("PBL", "PROJECT BASED LEARNING", false),
        ];
        Curriculum::new(
            raw.iter()
                .map(|(code, name, is_lab)| CurriculumEntry {
                    code: (*code).to_string(),
                    name: (*name).to_string(),
                    is_lab: *is_lab,
                })
                .collect(),
        )
    }

    pub fn get(&self, code: &str) -> Option<&CurriculumEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    /// Resolves a code to its display name. Unknown codes display as
    /// themselves.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).map_or(code, |e| e.name.as_str())
    }

    pub fn is_lab(&self, code: &str) -> bool {
        self.get(code).is_some_and(|e| e.is_lab)
    }

    pub fn entries(&self) -> &[CurriculumEntry] {
        &self.entries
    }
}

impl Default for Curriculum {
    fn default() -> Self {
        Curriculum::standard()
    }
}
