use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::shared::geo::Coordinate;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
    #[error("Failed to open {uri}: {reason}")]
    Launch { uri: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Ios,
}

impl FromStr for Platform {
    type Err = self::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            _ => Err(self::Error::UnknownPlatform(s.to_string())),
        }
    }
}

impl Platform {
    /// Deep link that starts turn-by-turn navigation to `destination`.
    pub fn navigation_uri(&self, destination: &Coordinate) -> String {
        match self {
            Platform::Android => format!(
                "google.navigation:q={},{}",
                destination.latitude, destination.longitude
            ),
            Platform::Ios => format!(
                "http://maps.apple.com/?daddr={},{}",
                destination.latitude, destination.longitude
            ),
        }
    }
}

/// Hands a uri to the operating system. Front ends without access to the
/// device, like the session server, return the uri from
/// [`Platform::navigation_uri`] and let the client open it instead.
pub trait Launcher {
    fn open_url(&self, uri: &str) -> Result<(), self::Error>;
}

/// Opens native navigation. A failed launch is logged and dropped.
pub fn open_navigation<L: Launcher + ?Sized>(
    launcher: &L,
    platform: Platform,
    destination: &Coordinate,
) {
    let uri = platform.navigation_uri(destination);
    if let Err(err) = launcher.open_url(&uri) {
        error!("Failed to open navigation: {err}");
    }
}

#[test]
fn android_uri_test() {
    let uri = Platform::Android.navigation_uri(&Coordinate::from((59.5, 18.25)));
    assert_eq!(uri, "google.navigation:q=59.5,18.25");
}

#[test]
fn ios_uri_test() {
    let uri = Platform::Ios.navigation_uri(&Coordinate::from((59.5, -18.0)));
    assert_eq!(uri, "http://maps.apple.com/?daddr=59.5,-18");
}

#[test]
fn platform_from_str_test() {
    assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
    assert!("windows".parse::<Platform>().is_err());
}
