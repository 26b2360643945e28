use thiserror::Error;

use crate::shared::geo::Coordinate;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Permission to access location was denied")]
    PermissionDenied,
    #[error("Location is unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// The device geolocation service. It is asked once, at startup.
pub trait LocationProvider {
    fn request_permission(&self) -> Permission;
    fn current_position(&self) -> Result<Coordinate, self::Error>;
}

/// Acquires the user position in one shot: permission first, then the fix.
pub fn acquire<P: LocationProvider + ?Sized>(provider: &P) -> Result<Coordinate, self::Error> {
    if provider.request_permission() == Permission::Denied {
        return Err(self::Error::PermissionDenied);
    }
    provider.current_position()
}

/// A provider that always reports the same position. With no position it
/// behaves like a device where the user refused location access.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation(Option<Coordinate>);

impl FixedLocation {
    pub fn new(coordinate: Coordinate) -> Self {
        Self(Some(coordinate))
    }

    pub fn denied() -> Self {
        Self(None)
    }
}

impl From<Option<Coordinate>> for FixedLocation {
    fn from(value: Option<Coordinate>) -> Self {
        Self(value)
    }
}

impl LocationProvider for FixedLocation {
    fn request_permission(&self) -> Permission {
        match self.0 {
            Some(_) => Permission::Granted,
            None => Permission::Denied,
        }
    }

    fn current_position(&self) -> Result<Coordinate, self::Error> {
        self.0
            .ok_or(self::Error::Unavailable("no position configured".into()))
    }
}

/// Parses `"<lat>,<lon>"`.
pub fn parse_coordinate(value: &str) -> Option<Coordinate> {
    let (latitude, longitude) = value.split_once(',')?;
    let latitude: f64 = latitude.trim().parse().ok()?;
    let longitude: f64 = longitude.trim().parse().ok()?;
    Some(Coordinate {
        latitude,
        longitude,
    })
}

#[test]
fn denied_provider_test() {
    let result = acquire(&FixedLocation::denied());
    assert!(matches!(result, Err(Error::PermissionDenied)));
}

#[test]
fn parse_coordinate_test() {
    assert_eq!(
        parse_coordinate("59.33, 18.06"),
        Some(Coordinate::from((59.33, 18.06)))
    );
    assert_eq!(parse_coordinate("59.33"), None);
    assert_eq!(parse_coordinate("a,b"), None);
}
