//! Coordinate extraction from map-service share URLs.
//!
//! Tries extraction strategies in priority order (place pin markers, `q=`
//! query pair, `ll=` pair, `@` viewport centre) and returns the first
//! match. The pin markers encode the actual pinned place and win over
//! everything else; the viewport centre only reflects where the map was
//! scrolled to and is kept as a last resort.

mod formats;

use crate::types::Coordinates;

use formats::{extract_ll_param, extract_place_pin, extract_query_param, extract_viewport};

/// Errors that can occur while extracting coordinates from a URL.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A pattern matched but the captured text is not a valid decimal
    /// number. Surfaced as a failure instead of letting a bad value
    /// propagate into stored data.
    #[error("matched coordinate text {text:?} is not a valid number")]
    InvalidNumber { text: String },
}

/// Extract a coordinate pair from a map-service URL.
///
/// Returns `Ok(None)` when the input is blank or none of the recognised
/// patterns apply.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidNumber`] if a matching pattern captures
/// text that does not parse as a decimal number.
pub fn extract_coordinates(url: &str) -> Result<Option<Coordinates>, ExtractError> {
    if url.trim().is_empty() {
        return Ok(None);
    }

    // Strategy 1: !3d/!4d place pin markers
    if let Some(coords) = extract_place_pin(url)? {
        tracing::debug!(url, ?coords, "extracted coordinates from place pin markers");
        return Ok(Some(coords));
    }

    // Strategy 2: ?q= / &q= query pair
    if let Some(coords) = extract_query_param(url)? {
        tracing::debug!(url, ?coords, "extracted coordinates from q= parameter");
        return Ok(Some(coords));
    }

    // Strategy 3: ll= query pair
    if let Some(coords) = extract_ll_param(url)? {
        tracing::debug!(url, ?coords, "extracted coordinates from ll= parameter");
        return Ok(Some(coords));
    }

    // Strategy 4: @lat,lng viewport centre
    if let Some(coords) = extract_viewport(url)? {
        tracing::debug!(url, ?coords, "falling back to viewport centre coordinates");
        return Ok(Some(coords));
    }

    tracing::debug!(url, "no recognised coordinate pattern");
    Ok(None)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(url: &str) -> Option<Coordinates> {
        extract_coordinates(url).expect("extraction should not error")
    }

    #[test]
    fn blank_input_never_matches() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("   "), None);
    }

    #[test]
    fn url_without_any_pattern_never_matches() {
        assert_eq!(extract("https://maps.example.com/place/Kadikoy"), None);
        assert_eq!(extract("not even a url"), None);
    }

    #[test]
    fn extracts_place_pin_markers() {
        let url = "https://www.google.com/maps/place/Store/data=!3m1!4b1!4m6!3m5!3d41.0082!4d28.9784!16s";
        let coords = extract(url).expect("pin markers should match");
        assert!((coords.latitude - 41.0082).abs() < 1e-9);
        assert!((coords.longitude - 28.9784).abs() < 1e-9);
    }

    #[test]
    fn place_pin_wins_over_viewport_centre() {
        // Viewport is where the map was scrolled to, not the pinned place.
        let url =
            "https://www.google.com/maps/place/Store/@39.9,32.8,15z/data=!3d41.0082!4d28.9784";
        let coords = extract(url).expect("should match");
        assert!((coords.latitude - 41.0082).abs() < 1e-9);
        assert!((coords.longitude - 28.9784).abs() < 1e-9);
    }

    #[test]
    fn extracts_q_parameter_after_question_mark() {
        let coords = extract("https://maps.google.com/?q=38.4237,27.1428").expect("should match");
        assert!((coords.latitude - 38.4237).abs() < 1e-9);
        assert!((coords.longitude - 27.1428).abs() < 1e-9);
    }

    #[test]
    fn extracts_q_parameter_after_ampersand() {
        let coords =
            extract("https://maps.google.com/maps?hl=tr&q=36.8969,30.7133").expect("should match");
        assert!((coords.latitude - 36.8969).abs() < 1e-9);
        assert!((coords.longitude - 30.7133).abs() < 1e-9);
    }

    #[test]
    fn bare_q_in_path_does_not_match() {
        // `q=` must sit in query-parameter position.
        assert_eq!(extract("https://example.com/faq=41.0,29.0/page"), None);
    }

    #[test]
    fn extracts_ll_parameter() {
        let coords =
            extract("https://maps.apple.com/?ll=40.1885,29.0610&z=16").expect("should match");
        assert!((coords.latitude - 40.1885).abs() < 1e-9);
        assert!((coords.longitude - 29.0610).abs() < 1e-9);
    }

    #[test]
    fn q_parameter_wins_over_ll_parameter() {
        let coords =
            extract("https://maps.example.com/?q=41.0,29.0&ll=39.0,33.0").expect("should match");
        assert!((coords.latitude - 41.0).abs() < 1e-9);
        assert!((coords.longitude - 29.0).abs() < 1e-9);
    }

    #[test]
    fn viewport_centre_is_the_last_resort() {
        let coords =
            extract("https://www.google.com/maps/@37.0143,35.3308,14z").expect("should match");
        assert!((coords.latitude - 37.0143).abs() < 1e-9);
        assert!((coords.longitude - 35.3308).abs() < 1e-9);
    }

    #[test]
    fn negative_coordinates_are_accepted() {
        let coords = extract("https://maps.google.com/?q=-33.8688,-151.2093").expect("should match");
        assert!((coords.latitude + 33.8688).abs() < 1e-9);
        assert!((coords.longitude + 151.2093).abs() < 1e-9);
    }

    #[test]
    fn integer_coordinates_without_fraction_are_accepted() {
        let coords = extract("https://maps.google.com/?q=41,29").expect("should match");
        assert!((coords.latitude - 41.0).abs() < 1e-9);
        assert!((coords.longitude - 29.0).abs() < 1e-9);
    }
}
