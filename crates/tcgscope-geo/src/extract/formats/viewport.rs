//! Priority 4: the `@<lat>,<lng>[,zoom]` viewport centre.
//!
//! Reflects where the map was scrolled to when the URL was copied, not the
//! pinned location, so it is only used when nothing better matched.

use regex::Regex;

use super::parse_pair;
use crate::extract::ExtractError;
use crate::types::Coordinates;

pub(in crate::extract) fn extract_viewport(url: &str) -> Result<Option<Coordinates>, ExtractError> {
    let re = Regex::new(r"@(-?\d+\.?\d*),(-?\d+\.?\d*)").expect("valid regex");
    match re.captures(url) {
        Some(cap) => parse_pair(&cap[1], &cap[2]).map(Some),
        None => Ok(None),
    }
}
