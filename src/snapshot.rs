use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    engine::{Marker, SelectionCard},
    shared::geo::{Coordinate, Viewport},
};

/// Capturable surface of the map screen, what would be on screen at `captured_at`.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub captured_at: DateTime<Utc>,
    pub viewport: Viewport,
    pub location: Option<Coordinate>,
    pub query: String,
    pub markers: Vec<Marker>,
    pub selection: Vec<SelectionCard>,
}

impl Snapshot {
    pub fn file_name(&self) -> String {
        format!("chargemap-{}.json", self.captured_at.format("%Y%m%dT%H%M%S"))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
