//! Flat-file persistence for census results.
//!
//! Every census owns one directory, `<output_root>/<channel>_users/`, holding
//! the raw member document and one line-delimited file per classification
//! bucket. Writes are plain overwrites: re-running a census replaces the
//! previous files, and a failed run may leave some of them behind.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::census::{ClassificationResult, Gender, MemberMap};
use crate::core::errors::{Result, RollcallError};

/// File holding the raw member map.
pub const MEMBERS_FILE: &str = "members.json";

/// Output locations for one channel's census.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusLayout {
    dir: PathBuf,
}

impl CensusLayout {
    /// `<output_root>/<channel>_users`
    pub fn for_channel(output_root: &Path, channel: &str) -> Self {
        Self {
            dir: output_root.join(format!("{channel}_users")),
        }
    }

    /// Use an existing census directory as-is.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn members_path(&self) -> PathBuf {
        self.dir.join(MEMBERS_FILE)
    }

    /// `male.txt`, `female.txt` or `unknown.txt` inside the census directory.
    pub fn group_path(&self, gender: Gender) -> PathBuf {
        self.dir.join(format!("{}.txt", gender.as_str()))
    }
}

/// What a [`persist`] call managed to write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistOutcome {
    /// The census directory was already present before this run
    pub directory_existed: bool,
    /// Files fully written, in write order
    pub written: Vec<PathBuf>,
    /// Message for the failure that stopped the write phase, if any
    pub error: Option<String>,
}

impl PersistOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Create the census directory. Returns whether it already existed.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    let existed = dir.is_dir();
    fs::create_dir_all(dir).map_err(|e| {
        RollcallError::io(format!("Failed to create directory: {}", dir.display()), e)
    })?;
    Ok(existed)
}

/// Write the member map as pretty-printed JSON.
pub fn write_members_document(path: &Path, members: &MemberMap) -> Result<()> {
    let json = serde_json::to_string_pretty(members)?;
    fs::write(path, json + "\n")
        .map_err(|e| RollcallError::io(format!("Failed to write {}", path.display()), e))
}

/// Read a member map previously written by [`write_members_document`].
pub fn read_members_document(path: &Path) -> Result<MemberMap> {
    let content = fs::read_to_string(path)
        .map_err(|e| RollcallError::io(format!("Failed to read {}", path.display()), e))?;
    serde_json::from_str(&content).map_err(Into::into)
}

/// Write one label per line, each newline-terminated.
pub fn write_group_file(path: &Path, labels: &[String]) -> Result<()> {
    let file = fs::File::create(path)
        .map_err(|e| RollcallError::io(format!("Failed to create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    for label in labels {
        writeln!(writer, "{label}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the member document and the three group files into `output_dir`.
///
/// Failures are reported on stdout and stop the remaining writes; they are
/// never returned to the caller.
pub fn persist(
    members: &MemberMap,
    result: &ClassificationResult,
    output_dir: &Path,
) -> PersistOutcome {
    let layout = CensusLayout::at(output_dir);
    let mut outcome = PersistOutcome::default();

    match ensure_dir(layout.dir()) {
        Ok(existed) => {
            outcome.directory_existed = existed;
            if existed {
                let dir = layout.dir().display();
                println!("Folder '{dir}' already exists. Data has been updated in '{dir}'.\n");
            }
        }
        Err(e) => {
            println!("Error while preparing output folder: {e}");
            outcome.error = Some(e.to_string());
            return outcome;
        }
    }

    let members_path = layout.members_path();
    if let Err(e) = write_members_document(&members_path, members) {
        println!("Error while saving members data: {e}");
        warn!("Persistence aborted at {}: {}", members_path.display(), e);
        outcome.error = Some(e.to_string());
        return outcome;
    }
    outcome.written.push(members_path);

    for gender in Gender::ALL {
        let path = layout.group_path(gender);
        let labels = result.labels(gender, members);
        if let Err(e) = write_group_file(&path, &labels) {
            println!("Error while saving gender data: {e}");
            warn!("Persistence aborted at {}: {}", path.display(), e);
            outcome.error = Some(e.to_string());
            return outcome;
        }
        debug!("Wrote {} labels to {}", labels.len(), path.display());
        outcome.written.push(path);
    }

    info!("Census saved to {}", layout.dir().display());
    outcome
}
