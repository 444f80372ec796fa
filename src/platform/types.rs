//! Gateway request and response types.

use serde::{Deserialize, Serialize};

/// Body of `POST session`.
#[derive(Debug, Serialize)]
pub struct SessionRequest<'a> {
    pub api_id: &'a str,
    pub api_hash: &'a str,
}

/// Response to `POST session`.
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub token: String,
}

/// Kind of entity a name resolves to, or a participant entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Channel,
    Chat,
    User,
    #[serde(other)]
    Other,
}

impl EntityKind {
    /// Whether entities of this kind have a member list to enumerate.
    pub fn has_members(self) -> bool {
        matches!(self, EntityKind::Channel | EntityKind::Chat)
    }
}

/// Response to `GET channels/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelInfo {
    pub id: u64,
    /// Name the channel was resolved from
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub kind: EntityKind,
}

/// Response to `GET channels/{id}/full`.
#[derive(Debug, Deserialize)]
pub struct FullChannelResponse {
    pub participants_count: u64,
}

/// One entry of a participants page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Participant {
    pub id: u64,
    #[serde(default = "Participant::default_kind")]
    pub kind: EntityKind,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Participant {
    fn default_kind() -> EntityKind {
        EntityKind::User
    }
}

/// Response to `GET channels/{id}/participants`.
#[derive(Debug, Deserialize)]
pub struct ParticipantsPage {
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// Error body returned alongside non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub struct GatewayError {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub retry_after: Option<u64>,
}
