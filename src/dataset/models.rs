use serde::{Deserialize, Serialize};

/// Top level of a json dataset: `{"chargers": [...]}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct DatasetFile {
    pub chargers: Vec<DatasetCharger>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct DatasetCharger {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub connector_types: Vec<String>,
}

/// Csv rows carry every connector in one column.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CsvCharger {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub connector_types: String,
}

impl CsvCharger {
    pub fn into_record(self, separator: char) -> DatasetCharger {
        let connector_types = self
            .connector_types
            .split(separator)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from)
            .collect();
        DatasetCharger {
            id: self.id,
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            connector_types,
        }
    }
}

#[test]
fn csv_connector_split_test() {
    let row = CsvCharger {
        id: "1".into(),
        name: "Depot".into(),
        address: "Main St".into(),
        latitude: 1.0,
        longitude: 2.0,
        connector_types: "Type2-4; CCS-2;".into(),
    };
    let record = row.into_record(';');
    assert_eq!(record.connector_types, vec!["Type2-4", "CCS-2"]);
}
