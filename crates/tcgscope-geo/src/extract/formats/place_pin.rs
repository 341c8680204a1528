//! Priority 1: `!3d<lat>!4d<lng>` place pin markers.
//!
//! These encode the pinned place itself rather than the map view, so they
//! are the most accurate signal a share URL carries.

use regex::Regex;

use super::parse_pair;
use crate::extract::ExtractError;
use crate::types::Coordinates;

pub(in crate::extract) fn extract_place_pin(
    url: &str,
) -> Result<Option<Coordinates>, ExtractError> {
    let re = Regex::new(r"!3d(-?\d+\.?\d*)!4d(-?\d+\.?\d*)").expect("valid regex");
    match re.captures(url) {
        Some(cap) => parse_pair(&cap[1], &cap[2]).map(Some),
        None => Ok(None),
    }
}
