use std::collections::HashSet;

use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::normalize;
use crate::pipeline::Stage;

pub struct Stage2Normalize;

impl Stage2Normalize {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Normalize {
    fn name(&self) -> &'static str {
        "stage2_normalize"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let (records, stats) = normalize::normalize_rows(&ctx.rows);
        let entities = records
            .iter()
            .map(|r| r.canonical_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        ctx.dropped_rank = stats.dropped_rank;
        ctx.dropped_date = stats.dropped_date;
        ctx.input_meta.records = Some(records.len() as u64);
        ctx.input_meta.dropped_rank = Some(stats.dropped_rank as u64);
        ctx.input_meta.dropped_date = Some(stats.dropped_date as u64);
        ctx.input_meta.entities = Some(entities as u64);
        ctx.report.input_meta.records = ctx.input_meta.records;
        ctx.report.input_meta.dropped_rank = ctx.input_meta.dropped_rank;
        ctx.report.input_meta.dropped_date = ctx.input_meta.dropped_date;
        ctx.report.input_meta.entities = ctx.input_meta.entities;

        info!(
            records = records.len(),
            entities = entities,
            dropped_rank = stats.dropped_rank,
            dropped_date = stats.dropped_date,
            "rows_normalized"
        );

        ctx.records = records;
        Ok(())
    }
}
