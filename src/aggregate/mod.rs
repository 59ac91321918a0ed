use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::normalize::NormalizedRecord;

/// Entity-indexed totals computed once over the full loaded history.
///
/// Carry-in counts observations inside the trailing window strictly before
/// the start boundary; lifetime counts every observation, duplicate
/// same-entity/same-week rows included.
#[derive(Debug, Clone, Default)]
pub struct EntityAggregates {
    pub carry_in: HashMap<String, u64>,
    pub lifetime: HashMap<String, u64>,
}

pub fn compute(
    records: &[NormalizedRecord],
    boundary: Option<NaiveDate>,
    carry_in_weeks: u32,
) -> EntityAggregates {
    let window = window_bounds(boundary, carry_in_weeks);
    let mut aggregates = EntityAggregates::default();

    for record in records {
        *aggregates
            .lifetime
            .entry(record.canonical_id.clone())
            .or_insert(0) += 1;
        if let Some((start, end)) = window {
            if record.week >= start && record.week < end {
                *aggregates
                    .carry_in
                    .entry(record.canonical_id.clone())
                    .or_insert(0) += 1;
            }
        }
    }

    aggregates
}

/// Lower-inclusive, upper-exclusive window feeding carry-in. Unset boundary
/// or a zero window width disables carry-in entirely.
fn window_bounds(boundary: Option<NaiveDate>, weeks: u32) -> Option<(NaiveDate, NaiveDate)> {
    let end = boundary?;
    if weeks == 0 {
        return None;
    }
    let start = end.checked_sub_days(Days::new(weeks as u64 * 7))?;
    Some((start, end))
}
