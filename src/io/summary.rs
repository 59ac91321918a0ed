use crate::ctx::Ctx;
use crate::schema::v1::{MetricMode, PoolMode};

pub fn format_summary(ctx: &Ctx) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let rows = ctx.input_meta.rows.unwrap_or(0);
    let records = ctx.input_meta.records.unwrap_or(0);
    let entities = ctx.input_meta.entities.unwrap_or(0);
    let metric = match ctx.metric {
        MetricMode::Ytd => "ytd",
        MetricMode::Window => "window",
        MetricMode::Lifetime => "lifetime",
    };
    let pool = match ctx.pool {
        PoolMode::CurrentYear => "current-year",
        PoolMode::FullHistory => "full-history",
    };

    let mut out = String::new();
    out.push_str(&format!("rankframes v{}\n", version));
    out.push_str(&format!(
        "Input: {} rows, {} records, {} entities\n",
        rows, records, entities
    ));
    out.push_str(&format!(
        "Config: metric={} pool={} top-n={} carry-in-weeks={}\n",
        metric, pool, ctx.top_n, ctx.carry_in_weeks
    ));
    if let Some(boundary) = ctx.boundary {
        out.push_str(&format!("Boundary: {}\n", boundary));
    }
    match (ctx.timeline.first(), ctx.timeline.last()) {
        (Some(first), Some(last)) => {
            out.push_str(&format!(
                "Frames: {} ({} .. {})\n",
                ctx.frames.len(),
                first,
                last
            ));
        }
        _ => out.push_str("Frames: 0 (nothing to animate)\n"),
    }

    out
}
