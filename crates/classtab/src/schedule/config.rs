/// Configuration for instructor-name normalization
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::ScheduleError;

/// Alias map for instructor names: canonical name → known short or alternate
/// forms. Workload analytics folds every alias into its canonical form so
/// one person is never counted twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasConfig {
    pub aliases: HashMap<String, Vec<String>>,
}

impl AliasConfig {
    /// Creates an empty configuration (no folding).
    pub fn empty() -> Self {
        AliasConfig {
            aliases: HashMap::new(),
        }
    }

    /// The alias set known to the seed data.
    pub fn builtin() -> Self {
        let mut aliases = HashMap::new();
        aliases.insert(
            "Mr. Neeraj Panwar".to_string(),
            vec!["Mr. Neeraj".to_string()],
        );
        AliasConfig { aliases }
    }

    /// Loads an alias map from a JSON file of the shape
    /// `{"aliases": {"Canonical Name": ["Short Form", ...]}}`.
    pub fn load_from_file(path: &Path) -> Result<Self, ScheduleError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ScheduleError::Parse {
            line: e.line(),
            message: e.to_string(),
        })
    }

    /// Folds a name into its canonical form; names with no alias entry pass
    /// through unchanged.
    pub fn canonicalize<'a>(&'a self, name: &'a str) -> &'a str {
        for (canonical, forms) in &self.aliases {
            if canonical == name || forms.iter().any(|f| f == name) {
                return canonical.as_str();
            }
        }
        name
    }
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
