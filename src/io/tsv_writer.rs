use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

/// Writes the frame sequence flat, one line per frame entry. `position` is
/// the 1-based slot of the entry within its frame.
pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(
        w,
        "week\tposition\tid\ttitle\tartist\tvalue\tytd\twindow\tlifetime"
    )?;
    for frame in &ctx.frames {
        for (i, entry) in frame.entries.iter().enumerate() {
            writeln!(
                w,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                frame.week,
                i + 1,
                entry.canonical_id,
                entry.title,
                entry.artist,
                entry.value,
                entry.ytd,
                entry.window,
                entry.lifetime
            )?;
        }
    }

    Ok(())
}
