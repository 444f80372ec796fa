//! # rollcall: channel member census
//!
//! Fetches the member list of a messaging-platform channel, classifies each
//! member by first name against two static name lists, and stores the result
//! as flat files.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CLI (src/bin/rollcall)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Platform        │  Core pipeline   │  Census   │  I/O       │
//! │                  │                  │           │            │
//! │ • MemberSource   │ • chat_exists    │ • names   │ • members  │
//! │ • HTTP gateway   │ • fetch_members  │ • classify│   .json    │
//! │ • Session        │ • run_census     │ • report  │ • *.txt    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rollcall::core::config::RollcallConfig;
//! use rollcall::core::pipeline::run_census;
//! use rollcall::platform::{HttpMemberSource, Session};
//!
//! fn main() -> rollcall::Result<()> {
//!     let config = RollcallConfig::from_yaml_file("rollcall.yml")?;
//!     let session = Session::open(HttpMemberSource::new(config.platform.clone())?)?;
//!     if let Some(outcome) = run_census(session.source(), "rustlang", &config.paths) {
//!         println!("{} members classified", outcome.summary.total);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(unsafe_code)]

// Core configuration, errors and the census pipeline
pub mod core {
    //! Configuration, error types and pipeline orchestration.

    pub mod config;
    pub mod errors;
    pub mod pipeline;
}

// Name dictionaries, classification and reporting
pub mod census;

// Flat-file persistence
pub mod io {
    //! Census output files.

    pub mod persistence;
}

// Messaging platform access
pub mod platform;

// Re-export primary types for convenience
pub use crate::census::{
    ClassificationResult, Gender, MemberId, MemberMap, MemberProfile, NameSet, Summary,
};
pub use crate::core::config::RollcallConfig;
pub use crate::core::errors::{Result, RollcallError};
