#![allow(dead_code)]

use chargemap::{
    dataset::{Dataset, models::DatasetCharger},
    engine::Session,
    repository::Repository,
};
use std::sync::Arc;

pub fn record(id: &str, name: &str, latitude: f64, longitude: f64) -> DatasetCharger {
    DatasetCharger {
        id: id.into(),
        name: name.into(),
        address: format!("{name} Street 1"),
        latitude,
        longitude,
        connector_types: vec!["Type2-4".into(), "CCS-2".into()],
    }
}

/// A(1), B(2), C(3) one tenth of a degree apart along the equator.
pub fn abc_repository() -> Repository {
    let dataset = Dataset::new().from_records(vec![
        record("1", "Alpha Charging", 0.0, 0.1),
        record("2", "Beta Charging", 0.0, 0.2),
        record("3", "Gamma Power", 0.0, 0.3),
    ]);
    Repository::new().load_dataset(dataset).unwrap()
}

pub fn abc_session() -> Session {
    Session::new(Arc::new(abc_repository()))
}

pub fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}
