use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::frames::UNRANKED;
use crate::schema::v1::{ChartFramesV1, ConfigMeta, FrameEntryV1, FrameV1, InputMeta};

pub fn build_report(ctx: &Ctx) -> ChartFramesV1 {
    let input_meta = InputMeta {
        rows: ctx.input_meta.rows,
        records: ctx.input_meta.records,
        dropped_rank: ctx.input_meta.dropped_rank,
        dropped_date: ctx.input_meta.dropped_date,
        entities: ctx.input_meta.entities,
        weeks: ctx.input_meta.weeks,
    };

    let config = ConfigMeta {
        top_n: ctx.top_n as u64,
        metric: ctx.metric,
        pool: ctx.pool,
        start_year: ctx.start_year,
        carry_in_weeks: ctx.carry_in_weeks,
        boundary: ctx.boundary.map(|d| d.to_string()),
    };

    let frames = ctx
        .frames
        .iter()
        .map(|frame| FrameV1 {
            week: frame.week.to_string(),
            entries: frame
                .entries
                .iter()
                .map(|entry| FrameEntryV1 {
                    id: entry.canonical_id.clone(),
                    title: entry.title.clone(),
                    artist: entry.artist.clone(),
                    value: entry.value,
                    tie_rank: (entry.tie_rank != UNRANKED).then_some(entry.tie_rank),
                    ytd: entry.ytd,
                    window: entry.window,
                    lifetime: entry.lifetime,
                })
                .collect(),
        })
        .collect();

    ChartFramesV1 {
        tool: "rankframes".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input_meta,
        config,
        warnings: ctx.warnings.clone(),
        frames,
    }
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ctx.report)?;
    Ok(())
}
