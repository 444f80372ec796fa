//! First-name dictionaries used for classification.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::errors::{Result, RollcallError};

/// Lowercased first names for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet {
    names: HashSet<String>,
}

impl NameSet {
    /// Build a set from raw lines, trimming and lowercasing each one.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    /// Membership test for an already-lowercased name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Load a name list, one name per line.
///
/// A missing file is reported and yields an empty set so the census can
/// continue with every member falling into `unknown`. Any other read failure
/// is returned as an error.
pub fn load_names(path: &Path) -> Result<NameSet> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let set = NameSet::from_lines(content.lines());
            debug!("Loaded {} names from {}", set.len(), path.display());
            Ok(set)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            println!("Error: File '{}' not found.", path.display());
            warn!("Name list {} is missing, using an empty set", path.display());
            Ok(NameSet::default())
        }
        Err(e) => Err(RollcallError::io(
            format!("Failed to read name list: {}", path.display()),
            e,
        )),
    }
}
