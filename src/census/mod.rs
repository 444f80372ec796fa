//! Member census core: name dictionaries, classification and reporting.
//!
//! ```text
//! MemberMap ──► classify(male, female) ──► ClassificationResult ──► report ──► Summary
//!                    ▲          ▲
//!               load_names  load_names
//! ```

pub mod classify;
pub mod members;
pub mod names;
pub mod report;

pub use classify::{classify, classify_name, ClassificationResult, Gender};
pub use members::{MemberId, MemberMap, MemberProfile};
pub use names::{load_names, NameSet};
pub use report::{report, Summary};
