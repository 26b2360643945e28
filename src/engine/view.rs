use std::sync::Arc;

use serde::Serialize;

use crate::{
    repository::{Charger, Connector},
    shared::geo::{Coordinate, Distance},
};

/// A charger pin on the map.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub id: Arc<str>,
    pub coordinate: Coordinate,
    /// Distinct connector entries, shown on the pin.
    pub badge: usize,
    pub selected: bool,
    /// Distance computed at the first location fix.
    pub distance: Option<Distance>,
}

impl Marker {
    pub fn from(charger: &Charger, selected: bool) -> Self {
        Self {
            id: charger.id.clone(),
            coordinate: charger.coordinate,
            badge: charger.variety(),
            selected,
            distance: charger.distance,
        }
    }
}

/// One entry of the comparison panel.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionCard {
    pub id: Arc<str>,
    pub name: Arc<str>,
    /// Lower-cased for display.
    pub address: String,
    /// Distance from the most recent location, zero when unlocated.
    pub distance: Distance,
    pub connectors: Vec<Connector>,
    pub destination: Coordinate,
}

impl SelectionCard {
    pub fn from(charger: &Charger, location: Option<&Coordinate>) -> Self {
        let distance = location
            .map(|location| location.distance(&charger.coordinate))
            .unwrap_or(Distance::ZERO);
        Self {
            id: charger.id.clone(),
            name: charger.name.clone(),
            address: charger.address.to_lowercase(),
            distance,
            connectors: charger.connectors(),
            destination: charger.coordinate,
        }
    }
}
