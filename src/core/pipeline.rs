//! Census pipeline: resolve → fetch → classify → persist → report.
//!
//! Each phase owns its failures. Errors are printed as console lines and the
//! phase degrades to an empty value, so a failed census never aborts the
//! process.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::census::{
    classify, load_names, report, ClassificationResult, MemberMap, NameSet, Summary,
};
use crate::core::config::PathsConfig;
use crate::core::errors::RollcallError;
use crate::io::persistence::{persist, read_members_document, CensusLayout, PersistOutcome};
use crate::platform::{members_from_participants, MemberSource};

/// Everything a completed census produced.
#[derive(Debug, Clone)]
pub struct CensusOutcome {
    pub layout: CensusLayout,
    pub members: MemberMap,
    pub classification: ClassificationResult,
    pub persisted: PersistOutcome,
    pub summary: Summary,
}

/// Check that `channel` resolves to something with a member list.
///
/// Resolution failures are printed and reported as `false`.
pub fn chat_exists<S: MemberSource + ?Sized>(source: &S, channel: &str) -> bool {
    match source.resolve(channel) {
        Ok(info) => {
            debug!("Resolved '{}' to {:?} {}", channel, info.kind, info.id);
            info.kind.has_members()
        }
        Err(RollcallError::ChannelInvalid { .. }) => {
            println!("Error: Channel '{channel}' is invalid.");
            false
        }
        Err(RollcallError::ChannelPrivate { .. }) => {
            println!("Error: Channel '{channel}' is private and cannot be accessed.");
            false
        }
        Err(e) => {
            println!("{}", e.console_message());
            false
        }
    }
}

/// Fetch the member map and the platform-reported member count.
///
/// Any failure is printed and yields an empty map with a total of zero.
pub fn fetch_members<S: MemberSource + ?Sized>(source: &S, channel: &str) -> (MemberMap, u64) {
    let fetched = source.resolve(channel).and_then(|info| {
        let total = source.reported_total(&info)?;
        let participants = source.participants(&info)?;
        Ok((members_from_participants(participants), total))
    });

    match fetched {
        Ok((members, total)) => {
            info!("Fetched {} members of '{}'", members.len(), channel);
            println!("Total participants: {total}");
            (members, total)
        }
        Err(e) => {
            if e.is_terminal() {
                warn!("Census of '{}' stopped: {}", channel, e);
            }
            println!("{}", e.console_message());
            (MemberMap::new(), 0)
        }
    }
}

/// Load both name lists. An unreadable list degrades to an empty set.
pub fn load_dictionaries(paths: &PathsConfig) -> (NameSet, NameSet) {
    let load = |path: &Path| {
        load_names(path).unwrap_or_else(|e| {
            println!("Unexpected error: {e}");
            NameSet::default()
        })
    };
    (
        load(paths.male_names.as_path()),
        load(paths.female_names.as_path()),
    )
}

/// Classify `members`, write the census files into `layout`, print the summary.
pub fn classify_and_save(
    members: MemberMap,
    reported_total: u64,
    layout: CensusLayout,
    paths: &PathsConfig,
) -> CensusOutcome {
    let (male_names, female_names) = load_dictionaries(paths);
    let classification = classify(&members, &male_names, &female_names);
    let persisted = persist(&members, &classification, layout.dir());
    let summary = report(&classification, members.len(), reported_total);
    CensusOutcome {
        layout,
        members,
        classification,
        persisted,
        summary,
    }
}

/// Run a full census of `channel`.
///
/// Returns `None` when the channel cannot be resolved or yields no members.
pub fn run_census<S: MemberSource + ?Sized>(
    source: &S,
    channel: &str,
    paths: &PathsConfig,
) -> Option<CensusOutcome> {
    if !chat_exists(source, channel) {
        println!("Chat not found. Please check the name and try again.");
        return None;
    }

    let (members, reported_total) = fetch_members(source, channel);
    if members.is_empty() {
        debug!("No members resolved for '{}', nothing to classify", channel);
        return None;
    }

    let layout = CensusLayout::for_channel(&paths.output_root, channel);
    Some(classify_and_save(members, reported_total, layout, paths))
}

/// Re-run classification on a census directory saved by an earlier run.
///
/// The saved member document stands in for the platform, so the reported
/// total equals the number of saved members.
pub fn reclassify(dir: &Path, paths: &PathsConfig) -> Option<CensusOutcome> {
    let layout = CensusLayout::at(dir);
    let members = match read_members_document(&layout.members_path()) {
        Ok(members) => members,
        Err(e) => {
            println!("Error: {e}");
            return None;
        }
    };
    let reported_total = members.len() as u64;
    Some(classify_and_save(members, reported_total, layout, paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::census::{Gender, MemberId};
    use crate::platform::testing::{user, StaticSource};
    use crate::platform::EntityKind;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn paths_in(dir: &TempDir) -> PathsConfig {
        let names = dir.path().join("genderDB");
        fs::create_dir_all(&names).unwrap();
        fs::write(names.join("names_male.txt"), "Bob\nIvan\n").unwrap();
        fs::write(names.join("names_female.txt"), "alice\n").unwrap();
        PathsConfig {
            male_names: names.join("names_male.txt"),
            female_names: names.join("names_female.txt"),
            output_root: dir.path().join("chatUsers"),
        }
    }

    fn scenario_source() -> StaticSource {
        StaticSource::channel(
            "rustlang",
            vec![
                user(1, Some("bob123"), Some("Bob")),
                user(2, Some("nohandle"), Some("Alice")),
                user(3, Some("carl1"), Some("Xx")),
            ],
            5,
        )
    }

    #[test]
    fn census_end_to_end() {
        let dir = tempdir().unwrap();
        let paths = paths_in(&dir);

        let outcome = run_census(&scenario_source(), "rustlang", &paths).expect("census ran");

        assert_eq!(
            outcome.summary,
            Summary {
                total: 3,
                male: 1,
                female: 1,
                unknown: 1,
                without_handle: 2,
            }
        );
        let out = paths.output_root.join("rustlang_users");
        assert_eq!(outcome.layout.dir(), out.as_path());
        assert!(outcome.persisted.is_complete());
        assert_eq!(fs::read_to_string(out.join("male.txt")).unwrap(), "bob123\n");
        assert_eq!(fs::read_to_string(out.join("female.txt")).unwrap(), "nohandle\n");
        assert_eq!(fs::read_to_string(out.join("unknown.txt")).unwrap(), "carl1\n");
    }

    #[test]
    fn unknown_channel_stops_before_fetch() {
        let dir = tempdir().unwrap();
        let paths = paths_in(&dir);

        assert!(run_census(&scenario_source(), "elsewhere", &paths).is_none());
        assert!(!paths.output_root.exists());
    }

    #[test]
    fn private_channel_is_not_found() {
        let mut source = scenario_source();
        source.resolve_error = Some(|channel: &str| RollcallError::ChannelPrivate {
            channel: channel.to_string(),
        });
        assert!(!chat_exists(&source, "rustlang"));
    }

    #[test]
    fn user_entities_have_no_member_list() {
        let mut source = scenario_source();
        if let Some(info) = source.channel.as_mut() {
            info.kind = EntityKind::User;
        }
        assert!(!chat_exists(&source, "rustlang"));
    }

    #[test]
    fn rate_limit_during_fetch_yields_empty_defaults() {
        let mut source = scenario_source();
        source.participants_error = Some(|| RollcallError::RateLimited { seconds: 17 });

        let (members, total) = fetch_members(&source, "rustlang");
        assert!(members.is_empty());
        assert_eq!(total, 0);

        let dir = tempdir().unwrap();
        let paths = paths_in(&dir);
        assert!(run_census(&source, "rustlang", &paths).is_none());
        assert!(!paths.output_root.exists());
    }

    #[test]
    fn missing_dictionaries_degrade_to_unknown() {
        let dir = tempdir().unwrap();
        let paths = PathsConfig {
            male_names: dir.path().join("nope_male.txt"),
            female_names: dir.path().join("nope_female.txt"),
            output_root: dir.path().join("out"),
        };

        let outcome = run_census(&scenario_source(), "rustlang", &paths).unwrap();
        assert_eq!(outcome.summary.unknown, 3);
        assert_eq!(outcome.summary.male + outcome.summary.female, 0);
    }

    #[test]
    fn reclassify_reuses_saved_members() {
        let dir = tempdir().unwrap();
        let paths = paths_in(&dir);
        let first = run_census(&scenario_source(), "rustlang", &paths).unwrap();

        fs::write(&paths.male_names, "bob\nxx\n").unwrap();
        let second = reclassify(first.layout.dir(), &paths).unwrap();

        assert_eq!(second.members, first.members);
        assert_eq!(second.classification.male, vec![MemberId(1), MemberId(3)]);
        assert_eq!(second.summary.without_handle, 0);
        let male = fs::read_to_string(first.layout.group_path(Gender::Male)).unwrap();
        assert_eq!(male, "bob123\ncarl1\n");
    }

    #[test]
    fn reclassify_without_saved_members_is_none() {
        let dir = tempdir().unwrap();
        let paths = paths_in(&dir);
        assert!(reclassify(&dir.path().join("missing_users"), &paths).is_none());
    }
}
