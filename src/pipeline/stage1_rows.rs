use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::io::rows;
use crate::pipeline::Stage;

pub struct Stage1Rows;

impl Stage1Rows {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Rows {
    fn name(&self) -> &'static str {
        "stage1_rows"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let rows = rows::read_rows(&ctx.input)?;
        if rows.is_empty() {
            warn!(input = %ctx.input.display(), "input has no data rows");
        }

        ctx.input_meta.rows = Some(rows.len() as u64);
        ctx.report.input_meta.rows = ctx.input_meta.rows;
        info!(rows = rows.len(), "rows_loaded");

        ctx.rows = rows;
        Ok(())
    }
}
