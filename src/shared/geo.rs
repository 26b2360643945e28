use std::{cmp, fmt::Display};

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS: Distance = Distance::from_kilometers(6371.0);
/// Zoom applied every time the map is recentered, in degrees.
pub const DEFAULT_ZOOM_DELTA: f64 = 0.015;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Formats as kilometers with two decimals, the way the comparison panel shows it.
impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} km", self.as_kilometers())
    }
}

impl Distance {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Coordinate {
    /// Great-circle distance using the haversine formula.
    pub fn distance(&self, coord: &Self) -> Distance {
        let dist_lat = f64::to_radians(coord.latitude - self.latitude);
        let dist_lon = f64::to_radians(coord.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(coord.latitude))
                * f64::sin(dist_lon / 2.0)
                * f64::sin(dist_lon / 2.0);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        Distance::from_meters(EARTH_RADIUS.as_meters() * c)
    }
}

/// The visible map region: a center plus the span shown in each direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            latitude_delta: DEFAULT_ZOOM_DELTA,
            longitude_delta: DEFAULT_ZOOM_DELTA,
        }
    }
}

impl Viewport {
    /// Centers on the coordinate at the default zoom.
    pub fn focused_on(coordinate: &Coordinate) -> Self {
        Self {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            latitude_delta: DEFAULT_ZOOM_DELTA,
            longitude_delta: DEFAULT_ZOOM_DELTA,
        }
    }

    /// Moves the center and keeps whatever zoom the viewport had.
    pub fn recentered(self, coordinate: &Coordinate) -> Self {
        Self {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            ..self
        }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[test]
fn distance_one_degree_test() {
    let origin = Coordinate::from((0.0, 0.0));
    let east = Coordinate::from((0.0, 1.0));
    let d = origin.distance(&east);
    let expected = 6_371_000.0 * 1f64.to_radians();
    assert!(((d.as_meters() - expected) / expected).abs() < 1e-3);
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_display_test() {
    assert_eq!(Distance::from_meters(1234.0).to_string(), "1.23 km");
    assert_eq!(Distance::ZERO.to_string(), "0.00 km");
}

#[test]
fn viewport_recentered_keeps_zoom_test() {
    let viewport = Viewport {
        latitude: 1.0,
        longitude: 1.0,
        latitude_delta: 0.5,
        longitude_delta: 0.25,
    };
    let moved = viewport.recentered(&Coordinate::from((10.0, 20.0)));
    assert_eq!(moved.center(), Coordinate::from((10.0, 20.0)));
    assert_eq!(moved.latitude_delta, 0.5);
    assert_eq!(moved.longitude_delta, 0.25);
}
