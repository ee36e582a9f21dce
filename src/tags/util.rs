//! tags/util.rs
//! Small parsing helpers shared by tag reading/writing.

use crate::error::{Result, TagError};
use crate::types::NumberPair;

/// Split on every run of non-digit characters.
///
/// Runs collapse into a single separator, but a leading or trailing run
/// still yields an empty piece at that end:
/// - "3" -> ["3"]
/// - "3/12" -> ["3", "12"]
/// - "x/2" -> ["", "2"]
/// - "1 of 2" -> ["1", "2"]
pub(crate) fn split_numeric_runs(s: &str) -> Vec<&str> {
    let pieces: Vec<&str> = s.split(|c: char| !c.is_ascii_digit()).collect();
    let last = pieces.len() - 1;

    pieces
        .into_iter()
        .enumerate()
        .filter(|(i, piece)| *i == 0 || *i == last || !piece.is_empty())
        .map(|(_, piece)| piece)
        .collect()
}

/// Parse a composite "N" / "N/M" value from `frame`.
///
/// The total is only taken when there are exactly two pieces and the second
/// one is non-empty. The first piece must always be a number, otherwise the
/// whole value is rejected.
pub(crate) fn parse_number_pair(frame: &'static str, raw: &str) -> Result<NumberPair> {
    let numeric_err = |source| TagError::NumericField {
        frame,
        value: raw.to_string(),
        source,
    };

    let pieces = split_numeric_runs(raw);
    let mut pair = NumberPair::default();

    if let [_, total] = pieces.as_slice() {
        if !total.is_empty() {
            pair.total = total.parse().map_err(numeric_err)?;
        }
    }
    pair.number = pieces[0].parse().map_err(numeric_err)?;

    Ok(pair)
}

/// Render a composite value for writing. `None` means "drop the frame".
/// - number 0 -> None (a lone total is not written)
/// - (3, 0) -> "3"
/// - (3, 12) -> "3/12"
pub(crate) fn format_number_pair(pair: NumberPair) -> Option<String> {
    match (pair.number, pair.total) {
        (0, _) => None,
        (n, 0) => Some(n.to_string()),
        (n, t) => Some(format!("{n}/{t}")),
    }
}

/// Lenient integer parse for year/BPM style frames.
pub(crate) fn parse_plain_u32(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok()
}
