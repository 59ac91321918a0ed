use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use rankframes::ctx::Ctx;
use rankframes::frames::{Frame, FrameEntry};
use rankframes::io::tsv_writer::write_tsv;
use rankframes::schema::v1::{MetricMode, PoolMode};
use tempfile::TempDir;

fn entry(id: &str, value: u64) -> FrameEntry {
    FrameEntry {
        canonical_id: id.to_string(),
        title: id.to_string(),
        artist: "Artist".to_string(),
        value,
        tie_rank: 1,
        ytd: value,
        window: value,
        lifetime: value,
    }
}

#[test]
fn tsv_flat_format() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = Ctx::new(
        PathBuf::from("chart.csv"),
        tmp.path().to_path_buf(),
        10,
        MetricMode::Ytd,
        PoolMode::CurrentYear,
        None,
        0,
        false,
        true,
        "0.0.0-test",
    );
    ctx.frames = vec![
        Frame {
            week: NaiveDate::from_ymd_opt(2021, 1, 2).unwrap(),
            entries: vec![entry("song a", 2), entry("song b", 1)],
        },
        Frame {
            week: NaiveDate::from_ymd_opt(2021, 1, 9).unwrap(),
            entries: vec![entry("song a", 3)],
        },
    ];

    write_tsv(&ctx.output.tsv_path, &ctx).unwrap();
    let content = fs::read_to_string(&ctx.output.tsv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("week\tposition\tid"));
    assert!(lines[1].starts_with("2021-01-02\t1\tsong a"));
    assert!(lines[2].starts_with("2021-01-02\t2\tsong b"));
    assert!(lines[3].starts_with("2021-01-09\t1\tsong a"));
}
