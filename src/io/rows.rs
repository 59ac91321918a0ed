use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::io::open_maybe_gz;

/// One chart observation as read from the CSV, fields untyped.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub week: String,
    pub rank: String,
    pub title: String,
    pub artist: String,
    pub last_week: Option<String>,
    pub peak_rank: Option<String>,
    pub weeks_on_chart: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    week: usize,
    rank: usize,
    title: usize,
    artist: usize,
    last_week: Option<usize>,
    peak_rank: Option<usize>,
    weeks_on_chart: Option<usize>,
}

pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = BufReader::new(reader);

    let mut columns: Option<ColumnMap> = None;
    let mut rows = Vec::new();
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        let trimmed = line.trim_end_matches(|c| c == '\r' || c == '\n');
        if trimmed.trim().is_empty() {
            line.clear();
            continue;
        }
        match columns {
            None => {
                columns = Some(parse_header(trimmed)?);
            }
            Some(cols) => {
                let fields = split_csv_line(trimmed);
                rows.push(row_from_fields(&fields, &cols));
            }
        }
        line.clear();
    }

    if columns.is_none() {
        bail!("{} has no header line", path.display());
    }

    Ok(rows)
}

fn parse_header(line: &str) -> Result<ColumnMap> {
    let fields = split_csv_line(line);
    let mut week = None;
    let mut rank = None;
    let mut title = None;
    let mut artist = None;
    let mut last_week = None;
    let mut peak_rank = None;
    let mut weeks_on_chart = None;

    for (i, field) in fields.iter().enumerate() {
        match field.trim().to_lowercase().replace('-', "_").as_str() {
            "date" | "week" => week = Some(i),
            "rank" => rank = Some(i),
            "title" | "song" => title = Some(i),
            "artist" => artist = Some(i),
            "last_week" | "previous_week" => last_week = Some(i),
            "peak_rank" | "peak_position" => peak_rank = Some(i),
            "weeks_on_chart" | "weeks_on_board" => weeks_on_chart = Some(i),
            _ => {}
        }
    }

    let week = week.context("header missing 'date' column")?;
    let rank = rank.context("header missing 'rank' column")?;
    let title = title.context("header missing 'title' column")?;
    let artist = artist.context("header missing 'artist' column")?;

    Ok(ColumnMap {
        week,
        rank,
        title,
        artist,
        last_week,
        peak_rank,
        weeks_on_chart,
    })
}

fn row_from_fields(fields: &[String], cols: &ColumnMap) -> RawRow {
    let get = |idx: usize| fields.get(idx).map(|s| s.trim().to_string()).unwrap_or_default();
    let get_opt = |idx: Option<usize>| {
        idx.and_then(|i| fields.get(i))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };
    RawRow {
        week: get(cols.week),
        rank: get(cols.rank),
        title: get(cols.title),
        artist: get(cols.artist),
        last_week: get_opt(cols.last_week),
        peak_rank: get_opt(cols.peak_rank),
        weeks_on_chart: get_opt(cols.weeks_on_chart),
    }
}

/// Splits one CSV line, honoring quoted fields with doubled-quote escapes.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => {
                    fields.push(std::mem::take(&mut field));
                }
                _ => field.push(c),
            }
        }
    }
    fields.push(field);
    fields
}
