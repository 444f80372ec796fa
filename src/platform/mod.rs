//! Messaging platform access.
//!
//! The census only needs three things from the platform: resolve a channel by
//! name, read its reported member count, and enumerate its participants.
//! [`MemberSource`] is that narrow interface; [`HttpMemberSource`] implements
//! it against a JSON gateway. [`Session`] owns a connected source and releases
//! it when dropped, on success and failure paths alike.

pub mod http;
pub mod types;

use tracing::{debug, warn};

use crate::census::{MemberId, MemberMap, MemberProfile};
use crate::core::errors::Result;

pub use http::HttpMemberSource;
pub use types::{ChannelInfo, EntityKind, Participant};

/// Narrow interface to the messaging platform.
pub trait MemberSource {
    /// Authenticate and prepare for requests.
    fn connect(&mut self) -> Result<()>;

    /// Release the connection. Called once by [`Session`] on drop.
    fn disconnect(&mut self) -> Result<()>;

    /// Resolve a channel or group by its public name.
    fn resolve(&self, channel: &str) -> Result<ChannelInfo>;

    /// Member count reported by the platform, including hidden members.
    fn reported_total(&self, channel: &ChannelInfo) -> Result<u64>;

    /// Every participant the platform lets us enumerate.
    fn participants(&self, channel: &ChannelInfo) -> Result<Vec<Participant>>;
}

/// A connected [`MemberSource`], disconnected when dropped.
pub struct Session<S: MemberSource> {
    source: S,
}

impl<S: MemberSource> Session<S> {
    pub fn open(mut source: S) -> Result<Self> {
        source.connect()?;
        debug!("Platform session opened");
        Ok(Self { source })
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: MemberSource> Drop for Session<S> {
    fn drop(&mut self) {
        match self.source.disconnect() {
            Ok(()) => debug!("Platform session closed"),
            Err(e) => warn!("Failed to close platform session: {}", e),
        }
    }
}

/// Build the member map from a participant list, keeping user entries only.
pub fn members_from_participants(participants: Vec<Participant>) -> MemberMap {
    participants
        .into_iter()
        .filter(|p| p.kind == EntityKind::User)
        .map(|p| {
            (
                MemberId(p.id),
                MemberProfile::new(p.username, p.first_name, p.last_name),
            )
        })
        .collect()
}
