use lazy_static::lazy_static;
use regex::Regex;

/// Connector token every credit-variant spelling collapses to.
pub const CONNECTOR_TOKEN: &str = "feat";

lazy_static! {
    // Parenthetical feature clauses: "(feat. X)", "(Featuring X)", "(With X)".
    static ref FEATURE_PAREN: Regex =
        Regex::new(r"(?i)\((?:feat|featuring|with)[^)]*\)").unwrap();
    // Credit connectors in open text, with an optional trailing dot.
    static ref CONNECTOR: Regex =
        Regex::new(r"(?i)\b(?:featuring|feat|ft|with)\b\.?").unwrap();
    // A lone "x" between names reads as a collaboration separator.
    static ref X_SEPARATOR: Regex = Regex::new(r"\s[x×]\s").unwrap();
}

/// Canonicalizes a collaborator/credit string so that credit-variant
/// spellings of the same lineup ("A feat. B", "A ft B", "A Featuring B")
/// map to one value. Idempotent.
pub fn canonical_artist(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = FEATURE_PAREN.replace_all(&lowered, " ");
    let connected = CONNECTOR.replace_all(&stripped, CONNECTOR_TOKEN);
    let connected = X_SEPARATOR.replace_all(&connected, " feat ");
    let spaced = connected.replace('&', " & ").replace(',', " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical entity id: folded title joined to the canonical credit string.
pub fn canonical_id(title: &str, artist: &str) -> String {
    format!("{}::{}", title.trim().to_lowercase(), canonical_artist(artist))
}
