use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};

use crate::aggregate;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage3Aggregate;

impl Stage3Aggregate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Aggregate {
    fn name(&self) -> &'static str {
        "stage3_aggregate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.boundary = resolve_boundary(ctx);
        ctx.report.config.boundary = ctx.boundary.map(|d| d.to_string());

        let aggregates = aggregate::compute(&ctx.records, ctx.boundary, ctx.carry_in_weeks);
        info!(
            carry_in_entities = aggregates.carry_in.len(),
            lifetime_entities = aggregates.lifetime.len(),
            "aggregates_ready"
        );
        ctx.aggregates = Some(aggregates);
        Ok(())
    }
}

/// Resolves `start_year` to a January 1 boundary, clamping a year outside
/// the observed span to the nearest observed year.
fn resolve_boundary(ctx: &mut Ctx) -> Option<NaiveDate> {
    let requested = ctx.start_year?;

    let mut years = ctx.records.iter().map(|r| r.week.year());
    let first = years.next()?;
    let (min_year, max_year) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));

    let year = requested.clamp(min_year, max_year);
    if year != requested {
        warn!(
            requested = requested,
            observed_min = min_year,
            observed_max = max_year,
            clamped = year,
            "start year outside observed span"
        );
        ctx.warnings.push(format!(
            "start year {} outside observed span {}..{}; using {}",
            requested, min_year, max_year, year
        ));
    }

    NaiveDate::from_ymd_opt(year, 1, 1)
}
