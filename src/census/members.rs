//! Member identities and profiles as resolved from a channel.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Platform-assigned numeric account id.
///
/// Members are keyed by this id rather than their public handle, which is
/// optional and would make handle-less members collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Public attributes of one channel member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    /// Public handle, absent for accounts without one
    #[serde(default)]
    pub username: Option<String>,
    /// First name as displayed on the platform
    #[serde(rename = "name", default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl MemberProfile {
    pub fn new(
        username: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        Self {
            username: non_empty(username),
            first_name: non_empty(first_name),
            last_name: non_empty(last_name),
        }
    }

    /// Line written for this member in the group files.
    ///
    /// Handles only contain `[A-Za-z0-9_]`, so the `id:` fallback never
    /// collides with a real handle.
    pub fn label(&self, id: MemberId) -> String {
        match &self.username {
            Some(username) => username.clone(),
            None => format!("id:{id}"),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Members of one channel in platform enumeration order.
pub type MemberMap = IndexMap<MemberId, MemberProfile>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_username() {
        let profile = MemberProfile::new(Some("bob123".into()), Some("Bob".into()), None);
        assert_eq!(profile.label(MemberId(7)), "bob123");
    }

    #[test]
    fn label_falls_back_to_id() {
        let profile = MemberProfile::new(None, Some("Alice".into()), None);
        assert_eq!(profile.label(MemberId(42)), "id:42");
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let profile = MemberProfile::new(Some(String::new()), Some(String::new()), Some(String::new()));
        assert_eq!(profile, MemberProfile::default());
    }

    #[test]
    fn handle_less_members_do_not_alias() {
        let mut members = MemberMap::new();
        members.insert(MemberId(1), MemberProfile::new(None, Some("Anna".into()), None));
        members.insert(MemberId(2), MemberProfile::new(None, Some("Oleg".into()), None));
        assert_eq!(members.len(), 2);
    }

    #[test]
    fn profile_serializes_with_name_field() {
        let profile = MemberProfile::new(Some("bob123".into()), Some("Bob".into()), None);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "bob123", "name": "Bob", "last_name": null})
        );
    }
}
