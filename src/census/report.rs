//! Count reconciliation and the console summary.

use tracing::warn;

use super::classify::ClassificationResult;

/// Aggregate counts for one census.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Members resolved individually
    pub total: usize,
    pub male: usize,
    pub female: usize,
    pub unknown: usize,
    /// Reported total minus resolved members. Negative when the platform
    /// count is stale; not clamped.
    pub without_handle: i64,
}

impl Summary {
    pub fn compute(
        result: &ClassificationResult,
        member_map_size: usize,
        reported_total: u64,
    ) -> Self {
        let without_handle = i64::try_from(reported_total)
            .unwrap_or(i64::MAX)
            .saturating_sub(i64::try_from(member_map_size).unwrap_or(i64::MAX));
        Self {
            total: member_map_size,
            male: result.male.len(),
            female: result.female.len(),
            unknown: result.unknown.len(),
            without_handle,
        }
    }

    /// The five summary lines, newline-separated, without a trailing newline.
    pub fn render(&self) -> String {
        format!(
            "Total users: {}\nMale users: {}\nFemale users: {}\nUnknown users: {}\nUsers without username: {}",
            self.total, self.male, self.female, self.unknown, self.without_handle
        )
    }
}

/// Compute the summary and print it to stdout.
pub fn report(
    result: &ClassificationResult,
    member_map_size: usize,
    reported_total: u64,
) -> Summary {
    let summary = Summary::compute(result, member_map_size, reported_total);
    if summary.without_handle < 0 {
        warn!(
            "Platform reported {} members but {} were resolved",
            reported_total, member_map_size
        );
    }
    println!("{}", summary.render());
    summary
}
