use std::fs;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use rankframes::io::rows::read_rows;
use tempfile::TempDir;

const HEADER: &str = "date,rank,song,artist,last-week,peak-rank,weeks-on-board\n";

#[test]
fn reads_headered_csv() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chart.csv");
    let content = format!(
        "{}2021-11-06,1,Easy On Me,Adele,1,1,3\n2021-11-06,2,Stay,\"The Kid LAROI & Justin Bieber\",2,1,16\n",
        HEADER
    );
    fs::write(&path, content).unwrap();

    let rows = read_rows(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].week, "2021-11-06");
    assert_eq!(rows[0].rank, "1");
    assert_eq!(rows[0].title, "Easy On Me");
    assert_eq!(rows[1].artist, "The Kid LAROI & Justin Bieber");
    assert_eq!(rows[0].weeks_on_chart.as_deref(), Some("3"));
}

#[test]
fn quoted_title_with_comma() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chart.csv");
    let content = format!("{}2020-01-04,5,\"Hey, Soul Sister\",Train,,,\n", HEADER);
    fs::write(&path, content).unwrap();

    let rows = read_rows(&path).unwrap();
    assert_eq!(rows[0].title, "Hey, Soul Sister");
    assert!(rows[0].last_week.is_none());
    assert!(rows[0].peak_rank.is_none());
}

#[test]
fn short_lines_null_out_optional_fields() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chart.csv");
    let content = format!("{}2020-01-04,5,Song,Artist\n", HEADER);
    fs::write(&path, content).unwrap();

    let rows = read_rows(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].last_week.is_none());
    assert!(rows[0].weeks_on_chart.is_none());
}

#[test]
fn blank_lines_are_skipped() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chart.csv");
    let content = format!("{}\n2020-01-04,5,Song,Artist,,,\n\n", HEADER);
    fs::write(&path, content).unwrap();

    let rows = read_rows(&path).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn gzipped_input_decompresses() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chart.csv.gz");
    let content = format!("{}2020-01-04,5,Song,Artist,,,\n", HEADER);
    let file = fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let rows = read_rows(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].rank, "5");
}

#[test]
fn missing_required_column_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chart.csv");
    fs::write(&path, "date,song,artist\n2020-01-04,Song,Artist\n").unwrap();

    assert!(read_rows(&path).is_err());
}

#[test]
fn empty_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chart.csv");
    fs::write(&path, "").unwrap();

    assert!(read_rows(&path).is_err());
}
