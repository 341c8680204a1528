//! Priority 3: an `ll=<lat>,<lng>` parameter.

use regex::Regex;

use super::parse_pair;
use crate::extract::ExtractError;
use crate::types::Coordinates;

pub(in crate::extract) fn extract_ll_param(url: &str) -> Result<Option<Coordinates>, ExtractError> {
    let re = Regex::new(r"ll=(-?\d+\.?\d*),(-?\d+\.?\d*)").expect("valid regex");
    match re.captures(url) {
        Some(cap) => parse_pair(&cap[1], &cap[2]).map(Some),
        None => Ok(None),
    }
}
