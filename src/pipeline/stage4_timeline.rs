use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::timeline;

pub struct Stage4Timeline;

impl Stage4Timeline {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Timeline {
    fn name(&self) -> &'static str {
        "stage4_timeline"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let observed = timeline::observed_weeks(&ctx.records, ctx.boundary);
        ctx.timeline = timeline::reconstruct(&observed);

        ctx.input_meta.weeks = Some(ctx.timeline.len() as u64);
        ctx.report.input_meta.weeks = ctx.input_meta.weeks;

        if ctx.timeline.is_empty() {
            warn!("no valid week-stamps; frame sequence will be empty");
        }
        info!(
            observed = observed.len(),
            weeks = ctx.timeline.len(),
            "timeline_ready"
        );
        Ok(())
    }
}
