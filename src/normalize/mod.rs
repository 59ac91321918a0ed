use chrono::NaiveDate;

use crate::io::rows::RawRow;

pub mod identity;

pub use identity::{canonical_artist, canonical_id};

/// A validated chart observation with a stable entity identity.
#[derive(Debug, Clone)]
pub struct NormalizedRecord {
    pub week: NaiveDate,
    pub rank: u32,
    pub canonical_id: String,
    pub title: String,
    pub artist: String,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeStats {
    pub dropped_rank: usize,
    pub dropped_date: usize,
}

/// Validates raw rows in input order. Rows with a non-numeric or zero rank
/// and rows with an unparseable week-stamp are dropped and counted, not
/// errors; this data source routinely carries footer and filler lines.
pub fn normalize_rows(rows: &[RawRow]) -> (Vec<NormalizedRecord>, NormalizeStats) {
    let mut records = Vec::with_capacity(rows.len());
    let mut stats = NormalizeStats::default();

    for row in rows {
        let rank = match row.rank.trim().parse::<u32>() {
            Ok(rank) if rank >= 1 => rank,
            _ => {
                stats.dropped_rank += 1;
                continue;
            }
        };
        let week = match NaiveDate::parse_from_str(row.week.trim(), "%Y-%m-%d") {
            Ok(week) => week,
            Err(_) => {
                stats.dropped_date += 1;
                continue;
            }
        };
        records.push(NormalizedRecord {
            week,
            rank,
            canonical_id: identity::canonical_id(&row.title, &row.artist),
            title: row.title.clone(),
            artist: row.artist.clone(),
            score: 1.0 / rank as f64,
        });
    }

    (records, stats)
}
