//! Coordinate value types
//!
//! Two reference systems appear in the PDOK and KNMI data:
//! - RD (Rijksdriehoek, EPSG:28992): the Dutch projected grid, meters.
//! - WGS84 (EPSG:4326): geographic latitude/longitude, degrees.
//!
//! The map view works in RD, so WGS84 input (the KNMI feed) is converted
//! with the RDNAP polynomial approximation.

use serde::{Deserialize, Serialize};

/// RD false origin (Amersfoort)
const RD_X0: f64 = 155_000.0;
const RD_Y0: f64 = 463_000.0;
const RD_LAT0: f64 = 52.155_17;
const RD_LON0: f64 = 5.387_206;

/// Polynomial terms for the RD easting: (lat power, lon power, coefficient)
const RD_X_TERMS: [(i32, i32, f64); 9] = [
    (0, 1, 190_094.945),
    (1, 1, -11_832.228),
    (2, 1, -114.221),
    (0, 3, -32.391),
    (1, 0, -0.705),
    (3, 1, -2.340),
    (1, 3, -0.608),
    (0, 2, -0.008),
    (2, 3, 0.148),
];

/// Polynomial terms for the RD northing
const RD_Y_TERMS: [(i32, i32, f64); 10] = [
    (1, 0, 309_056.544),
    (0, 2, 3_638.893),
    (2, 0, 73.077),
    (1, 2, -157.984),
    (3, 0, 59.788),
    (0, 1, 0.433),
    (2, 2, -6.439),
    (1, 1, -0.032),
    (0, 4, 0.092),
    (1, 4, -0.054),
];

/// A projected RD coordinate (x = easting, y = northing, meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RdCoordinate {
    pub x: f64,
    pub y: f64,
}

impl RdCoordinate {
    /// Create a new RD coordinate
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Format as a WKT point string, e.g. `POINT(195379 469619)`
    pub fn to_wkt(&self) -> String {
        format!("POINT({} {})", self.x, self.y)
    }
}

/// A geographic WGS84 coordinate (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wgs84Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Wgs84Coordinate {
    /// Create a new WGS84 coordinate
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convert to RD (EPSG:28992) with the RDNAP polynomial approximation
    ///
    /// Accurate to roughly a meter within the Dutch grid, which is why the
    /// result is rounded to whole meters. Outside the Netherlands the
    /// polynomial diverges; callers feed it Dutch data only.
    pub fn to_rd(&self) -> RdCoordinate {
        let dlat = 0.36 * (self.lat - RD_LAT0);
        let dlon = 0.36 * (self.lon - RD_LON0);

        let x: f64 = RD_X_TERMS
            .iter()
            .map(|&(p, q, c)| c * dlat.powi(p) * dlon.powi(q))
            .sum();
        let y: f64 = RD_Y_TERMS
            .iter()
            .map(|&(p, q, c)| c * dlat.powi(p) * dlon.powi(q))
            .sum();

        RdCoordinate::new((RD_X0 + x).round(), (RD_Y0 + y).round())
    }
}
