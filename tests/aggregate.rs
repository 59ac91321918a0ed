use chrono::NaiveDate;
use rankframes::aggregate;
use rankframes::normalize::{NormalizedRecord, canonical_id};

fn record(week: &str, rank: u32, title: &str, artist: &str) -> NormalizedRecord {
    NormalizedRecord {
        week: NaiveDate::parse_from_str(week, "%Y-%m-%d").unwrap(),
        rank,
        canonical_id: canonical_id(title, artist),
        title: title.to_string(),
        artist: artist.to_string(),
        score: 1.0 / rank as f64,
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn carry_in_window_is_lower_inclusive_upper_exclusive() {
    let records = vec![
        record("2020-12-18", 1, "Song A", "Artist A"), // window start, in
        record("2020-12-17", 2, "Song A", "Artist A"), // before start, out
        record("2020-12-26", 3, "Song A", "Artist A"), // inside, in
        record("2021-01-01", 4, "Song A", "Artist A"), // boundary, out
    ];
    let aggregates = aggregate::compute(&records, Some(date("2021-01-01")), 2);
    let id = canonical_id("Song A", "Artist A");
    assert_eq!(aggregates.carry_in.get(&id).copied(), Some(2));
}

#[test]
fn zero_window_width_disables_carry_in() {
    let records = vec![record("2020-12-26", 1, "Song A", "Artist A")];
    let aggregates = aggregate::compute(&records, Some(date("2021-01-01")), 0);
    assert!(aggregates.carry_in.is_empty());
}

#[test]
fn unset_boundary_disables_carry_in() {
    let records = vec![record("2020-12-26", 1, "Song A", "Artist A")];
    let aggregates = aggregate::compute(&records, None, 10);
    assert!(aggregates.carry_in.is_empty());
}

#[test]
fn lifetime_spans_all_history_regardless_of_boundary() {
    let records = vec![
        record("1999-05-01", 10, "Song A", "Artist A"),
        record("2020-12-26", 1, "Song A", "Artist A"),
        record("2021-03-06", 2, "Song A", "Artist A"),
    ];
    let aggregates = aggregate::compute(&records, Some(date("2021-01-01")), 2);
    let id = canonical_id("Song A", "Artist A");
    assert_eq!(aggregates.lifetime.get(&id).copied(), Some(3));
}

#[test]
fn lifetime_counts_duplicate_rows() {
    // Duplicate same-entity/same-week rows each count: the aggregate is a
    // raw appearance count, not distinct weeks.
    let records = vec![
        record("2021-03-06", 1, "Song A", "Artist A"),
        record("2021-03-06", 1, "Song A", "Artist A"),
    ];
    let aggregates = aggregate::compute(&records, None, 0);
    let id = canonical_id("Song A", "Artist A");
    assert_eq!(aggregates.lifetime.get(&id).copied(), Some(2));
}
