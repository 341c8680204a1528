//! One module per recognised map-URL coordinate syntax.

mod ll_param;
mod place_pin;
mod query_param;
mod viewport;

pub(super) use ll_param::extract_ll_param;
pub(super) use place_pin::extract_place_pin;
pub(super) use query_param::extract_query_param;
pub(super) use viewport::extract_viewport;

use crate::extract::ExtractError;
use crate::types::Coordinates;

/// Parse two captured decimal fields into a coordinate pair.
pub(in crate::extract) fn parse_pair(lat: &str, lng: &str) -> Result<Coordinates, ExtractError> {
    let parse = |text: &str| -> Result<f64, ExtractError> {
        text.parse().map_err(|_| ExtractError::InvalidNumber {
            text: text.to_string(),
        })
    };
    Ok(Coordinates {
        latitude: parse(lat)?,
        longitude: parse(lng)?,
    })
}
