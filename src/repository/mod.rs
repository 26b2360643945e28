use std::{collections::HashMap, sync::Arc};

mod models;
pub use models::*;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{dataset, shared::geo::Coordinate};

type IdToIndex = HashMap<Arc<str>, usize>;

/// Every charger in the dataset, unannotated, plus an id lookup.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub chargers: Box<[Charger]>,

    charger_lookup: Arc<IdToIndex>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Reads all chargers from the dataset. Records with an id that was already
    /// seen are dropped, the first one wins.
    pub fn load_dataset(mut self, dataset: dataset::Dataset) -> Result<Self, dataset::Error> {
        info!("Loading chargers...");
        let mut charger_lookup: IdToIndex = HashMap::new();
        let mut chargers: Vec<Charger> = Vec::new();
        dataset.stream_chargers(|(_, record)| {
            let value: Charger = record.into();
            if charger_lookup.contains_key(&value.id) {
                warn!("Duplicate charger id {}, keeping the first record", value.id);
                return;
            }
            charger_lookup.insert(value.id.clone(), chargers.len());
            chargers.push(value);
        })?;
        self.chargers = chargers.into();
        self.charger_lookup = charger_lookup.into();
        info!("Loaded {} chargers", self.chargers.len());
        Ok(self)
    }

    /// Get a charger with the given id.
    /// If no charger is found with the given id None is returned.
    /// Charger is safe and quick to clone if a owned instance is needed.
    pub fn charger_by_id(&self, id: &str) -> Option<&Charger> {
        let index = self.charger_lookup.get(id)?;
        Some(&self.chargers[*index])
    }

    pub fn len(&self) -> usize {
        self.chargers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chargers.is_empty()
    }

    /// Every charger with its distance from `origin`, in dataset order.
    pub fn annotate(&self, origin: &Coordinate) -> Vec<Charger> {
        annotate(origin, &self.chargers)
    }
}

/// Attaches the haversine distance from `origin` to each charger. Order is kept
/// and nothing is filtered out.
pub fn annotate(origin: &Coordinate, chargers: &[Charger]) -> Vec<Charger> {
    chargers
        .par_iter()
        .map(|charger| charger.annotated(origin))
        .collect()
}
