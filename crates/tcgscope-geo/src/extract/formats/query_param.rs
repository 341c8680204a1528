//! Priority 2: a `q=<lat>,<lng>` query parameter, in either the `?q=` or
//! `&q=` position.

use regex::Regex;

use super::parse_pair;
use crate::extract::ExtractError;
use crate::types::Coordinates;

pub(in crate::extract) fn extract_query_param(
    url: &str,
) -> Result<Option<Coordinates>, ExtractError> {
    let re = Regex::new(r"[?&]q=(-?\d+\.?\d*),(-?\d+\.?\d*)").expect("valid regex");
    match re.captures(url) {
        Some(cap) => parse_pair(&cap[1], &cap[2]).map(Some),
        None => Ok(None),
    }
}
