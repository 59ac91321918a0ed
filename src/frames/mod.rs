use chrono::NaiveDate;

use crate::schema::v1::{MetricMode, PoolMode};

pub mod generate;

pub use generate::generate;

/// Tie-break sentinel for entities never observed at any rank; sorts after
/// every finite rank.
pub const UNRANKED: u32 = u32::MAX;

/// One ranked slot in a frame, carrying all three metric values so a
/// consumer can display any of them regardless of which one is active.
#[derive(Debug, Clone)]
pub struct FrameEntry {
    pub canonical_id: String,
    pub title: String,
    pub artist: String,
    pub value: u64,
    pub tie_rank: u32,
    pub ytd: u64,
    pub window: u64,
    pub lifetime: u64,
}

/// One time-step's ranked, size-bounded snapshot of entities.
#[derive(Debug, Clone)]
pub struct Frame {
    pub week: NaiveDate,
    pub entries: Vec<FrameEntry>,
}

#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    pub top_n: usize,
    pub metric: MetricMode,
    pub pool: PoolMode,
}
