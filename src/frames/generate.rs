use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::aggregate::EntityAggregates;
use crate::frames::{Frame, FrameEntry, GeneratorConfig, UNRANKED};
use crate::normalize::NormalizedRecord;
use crate::schema::v1::{MetricMode, PoolMode};

/// Walks the reconstructed timeline and emits one ranked frame per week.
///
/// All running state (tracked year, year-to-date counters, last-known
/// ranks) lives inside this call, so runs with different configurations
/// cannot interfere.
pub fn generate(
    records: &[NormalizedRecord],
    timeline: &[NaiveDate],
    aggregates: &EntityAggregates,
    config: &GeneratorConfig,
) -> Vec<Frame> {
    let mut by_week: HashMap<NaiveDate, Vec<&NormalizedRecord>> = HashMap::new();
    for record in records {
        by_week.entry(record.week).or_default().push(record);
    }

    // Display strings are first-win per id to keep output deterministic.
    let mut display: HashMap<&str, (&str, &str)> = HashMap::new();
    for record in records {
        display
            .entry(record.canonical_id.as_str())
            .or_insert((record.title.as_str(), record.artist.as_str()));
    }

    let all_ids: BTreeSet<&str> = records.iter().map(|r| r.canonical_id.as_str()).collect();

    let mut frames = Vec::with_capacity(timeline.len());
    let mut year: Option<i32> = None;
    let mut ytd: HashMap<&str, u64> = HashMap::new();
    let mut last_rank: HashMap<&str, u32> = HashMap::new();

    for &week in timeline {
        if year != Some(week.year()) {
            ytd.clear();
            last_rank.clear();
            year = Some(week.year());
        }

        // A filled gap week has no observations; counters carry forward.
        if let Some(observed) = by_week.get(&week) {
            for record in observed {
                last_rank.insert(record.canonical_id.as_str(), record.rank);
                *ytd.entry(record.canonical_id.as_str()).or_insert(0) += 1;
            }
        }

        // Id-sorted pool; full ties downstream resolve in id order.
        let pool: BTreeSet<&str> = match config.pool {
            PoolMode::FullHistory => all_ids.clone(),
            PoolMode::CurrentYear => ytd
                .keys()
                .copied()
                .chain(aggregates.carry_in.keys().map(|id| id.as_str()))
                .collect(),
        };

        let mut entries: Vec<FrameEntry> = Vec::with_capacity(pool.len());
        for id in pool {
            let ytd_value = ytd.get(id).copied().unwrap_or(0);
            let window_value = aggregates.carry_in.get(id).copied().unwrap_or(0) + ytd_value;
            let lifetime_value = aggregates
                .lifetime
                .get(id)
                .copied()
                .unwrap_or(window_value);
            let value = match config.metric {
                MetricMode::Ytd => ytd_value,
                MetricMode::Window => window_value,
                MetricMode::Lifetime => lifetime_value,
            };
            let tie_rank = last_rank.get(id).copied().unwrap_or(UNRANKED);
            let (title, artist) = display.get(id).copied().unwrap_or((id, ""));
            entries.push(FrameEntry {
                canonical_id: id.to_string(),
                title: title.to_string(),
                artist: artist.to_string(),
                value,
                tie_rank,
                ytd: ytd_value,
                window: window_value,
                lifetime: lifetime_value,
            });
        }

        entries.sort_by(|a, b| b.value.cmp(&a.value).then(a.tie_rank.cmp(&b.tie_rank)));
        entries.truncate(config.top_n);

        frames.push(Frame { week, entries });
    }

    frames
}
