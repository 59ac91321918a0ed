use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::normalize::NormalizedRecord;

/// Distinct ascending week-stamps of the records at or after the boundary
/// (all records when no boundary is set).
pub fn observed_weeks(
    records: &[NormalizedRecord],
    boundary: Option<NaiveDate>,
) -> Vec<NaiveDate> {
    let mut weeks = BTreeSet::new();
    for record in records {
        if boundary.map_or(true, |b| record.week >= b) {
            weeks.insert(record.week);
        }
    }
    weeks.into_iter().collect()
}

/// Expands sparse observed week-stamps into a gapless weekly sequence.
///
/// Between consecutive observed stamps the cursor advances seven days at a
/// time, emitting each intermediate stamp strictly before the later one,
/// then re-synchronizes on the later observed stamp.
pub fn reconstruct(observed: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut timeline = Vec::new();
    for pair in observed.windows(2) {
        let from = pair[0];
        let to = pair[1];
        timeline.push(from);
        let mut cursor = from + Days::new(7);
        while cursor < to {
            timeline.push(cursor);
            cursor = cursor + Days::new(7);
        }
    }
    if let Some(&last) = observed.last() {
        timeline.push(last);
    }
    timeline
}
