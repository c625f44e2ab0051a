//! RD coordinate extraction from WKT point strings
//!
//! The Locatieserver returns centroids as WKT, e.g.
//! `POINT(195379.000 469619.000)`. Only Dutch RD grid points ever appear
//! here, so instead of a full WKT geometry parser a narrow numeric pattern
//! is enough: an RD ordinate always has a 5-6 digit integer part.

use std::sync::LazyLock;

use regex::Regex;

use crate::coord::RdCoordinate;
use crate::error::{Error, Result};

/// An RD ordinate: 5-6 integer digits, optional decimal fraction.
/// The decimal alternative comes first so `195379.000` is taken whole
/// instead of stopping at the integer part.
static RD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{5,6}\.\d+\b|\d{5,6}\b").expect("valid RD token regex"));

/// Extract an RD coordinate from a WKT-like point string
///
/// Returns [`Error::InvalidWkt`] carrying the input unless the string holds
/// exactly two RD ordinates. One or three tokens means the geometry is not
/// the expected 2D point, and silently picking a pair would recentre the map
/// on garbage.
pub fn coordinate_from_wkt(wkt: &str) -> Result<RdCoordinate> {
    let tokens: Vec<&str> = RD_TOKEN.find_iter(wkt).map(|m| m.as_str()).collect();

    let parse = |token: &str| {
        token
            .parse::<f64>()
            .map_err(|_| Error::InvalidWkt(wkt.to_string()))
    };

    match tokens.as_slice() {
        [x, y] => Ok(RdCoordinate::new(parse(x)?, parse(y)?)),
        _ => Err(Error::InvalidWkt(wkt.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_point_pair() {
        let coord = coordinate_from_wkt("POINT(195379.000 469619.000)").unwrap();
        assert_eq!(coord, RdCoordinate::new(195_379.0, 469_619.0));
    }

    #[test]
    fn test_extracts_integer_ordinates() {
        let coord = coordinate_from_wkt("POINT(122202 487250)").unwrap();
        assert_eq!(coord, RdCoordinate::new(122_202.0, 487_250.0));
    }

    #[test]
    fn test_single_token_is_invalid() {
        let err = coordinate_from_wkt("POINT(195379.000)").unwrap_err();
        match err {
            Error::InvalidWkt(wkt) => assert_eq!(wkt, "POINT(195379.000)"),
            other => panic!("expected InvalidWkt, got {:?}", other),
        }
    }

    #[test]
    fn test_three_tokens_are_invalid() {
        // A 3D point would silently drop an ordinate if we just took two
        assert!(coordinate_from_wkt("POINT(195379.000 469619.000 12.0)").is_err());
    }

    #[test]
    fn test_no_tokens_are_invalid() {
        assert!(coordinate_from_wkt("POINT EMPTY").is_err());
        assert!(coordinate_from_wkt("").is_err());
    }

    #[test]
    fn test_short_numbers_do_not_match() {
        // Lat/lon style values have at most 3 integer digits
        assert!(coordinate_from_wkt("POINT(4.905 52.372)").is_err());
    }

    #[test]
    fn test_round_trip_preserves_pair() {
        let original = "POINT(195379.000 469619.000)";
        let coord = coordinate_from_wkt(original).unwrap();
        let reparsed = coordinate_from_wkt(&coord.to_wkt()).unwrap();
        assert_eq!(reparsed, coord);
    }
}
