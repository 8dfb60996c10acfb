use crate::domain::entities::alert::RegionDown;
use crate::domain::entities::summary::RegionSummary;

/// Regions where every transaction of the batch was failed or long-running.
///
/// Regions are returned in summary order (sorted by name). A region only
/// appears in a summary if it had at least one record, so an empty region
/// can never be reported as down.
#[must_use]
pub fn detect_down_regions(summary: &RegionSummary) -> Vec<RegionDown> {
    summary
        .iter()
        .filter(|(_, counts)| counts.total() > 0 && counts.normal == 0)
        .map(|(region, counts)| RegionDown {
            region: region.clone(),
            total: counts.total(),
        })
        .collect()
}
