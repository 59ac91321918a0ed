use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::frames::{self, GeneratorConfig};
use crate::pipeline::Stage;

pub struct Stage5Frames;

impl Stage5Frames {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Frames {
    fn name(&self) -> &'static str {
        "stage5_frames"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let aggregates = ctx
            .aggregates
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("aggregates not computed before Stage 5"))?;
        let config = GeneratorConfig {
            top_n: ctx.top_n,
            metric: ctx.metric,
            pool: ctx.pool,
        };

        ctx.frames = frames::generate(&ctx.records, &ctx.timeline, aggregates, &config);
        info!(frames = ctx.frames.len(), "frames_ready");
        Ok(())
    }
}
