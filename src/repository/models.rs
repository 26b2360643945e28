use std::{collections::HashSet, fmt::Display, sync::Arc};

use serde::Serialize;

use crate::{
    dataset::models::DatasetCharger,
    shared::{
        Identifiable,
        geo::{Coordinate, Distance},
    },
};

/// A single charging station from the static dataset.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Charger {
    /// Unique external identifier. Two chargers are the same charger iff their ids match.
    pub id: Arc<str>,
    /// The display name of the station.
    pub name: Arc<str>,
    /// Lowercase copy of the name used for search.
    #[serde(skip)]
    pub normalized_name: Arc<str>,
    pub address: Arc<str>,
    pub coordinate: Coordinate,
    /// Raw `"<connector-name>-<quantity>"` entries, in dataset order.
    pub connector_types: Arc<[Arc<str>]>,
    /// Distance from the user at the time of the first location fix.
    pub distance: Option<Distance>,
}

impl Identifiable for Charger {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

impl From<DatasetCharger> for Charger {
    fn from(value: DatasetCharger) -> Self {
        Self {
            id: value.id.into(),
            name: value.name.clone().into(),
            normalized_name: value.name.to_lowercase().into(),
            address: value.address.into(),
            coordinate: Coordinate {
                latitude: value.latitude,
                longitude: value.longitude,
            },
            connector_types: value
                .connector_types
                .into_iter()
                .map(Arc::from)
                .collect(),
            distance: None,
        }
    }
}

impl Charger {
    /// Returns a copy carrying the distance from `origin`.
    pub fn annotated(&self, origin: &Coordinate) -> Self {
        Self {
            distance: Some(origin.distance(&self.coordinate)),
            ..self.clone()
        }
    }

    /// Number of distinct raw connector entries. `"Type2-4"` twice counts once,
    /// `"Type2-4"` and `"Type2-2"` count as two.
    pub fn variety(&self) -> usize {
        self.connector_types
            .iter()
            .map(|value| value.as_ref())
            .collect::<HashSet<&str>>()
            .len()
    }

    pub fn connectors(&self) -> Vec<Connector> {
        self.connector_types
            .iter()
            .map(|value| Connector::parse(value))
            .collect()
    }
}

/// A connector standard and how many units of it a station has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connector {
    pub name: Arc<str>,
    /// Absent when the dataset entry had no hyphen.
    pub quantity: Option<Arc<str>>,
}

impl Display for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.quantity {
            Some(quantity) => write!(f, "{} ({} unit)", self.name, quantity),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Connector {
    /// Splits on hyphens and keeps the first two segments, so
    /// `"CCS-Combo-2"` reads as `("CCS", "Combo")`.
    pub fn parse(value: &str) -> Self {
        let mut split = value.split('-');
        let name = split.next().unwrap_or_default();
        let quantity = split.next();
        Self {
            name: name.into(),
            quantity: quantity.map(Arc::from),
        }
    }
}
