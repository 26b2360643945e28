use chargemap::{engine::Marker, shared::geo::Coordinate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerDto {
    pub id: String,
    pub coordinate: Coordinate,
    pub badge: usize,
    pub selected: bool,
    pub distance: Option<String>,
}

impl MarkerDto {
    pub fn from(marker: &Marker) -> Self {
        Self {
            id: marker.id.to_string(),
            coordinate: marker.coordinate,
            badge: marker.badge,
            selected: marker.selected,
            distance: marker.distance.map(|distance| distance.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDto {
    pub user: Option<Coordinate>,
    pub markers: Vec<MarkerDto>,
}
