use chargemap::{engine::SelectionCard, shared::geo::Coordinate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub distance: String,
    pub connectors: Vec<String>,
    pub destination: Coordinate,
}

impl CardDto {
    pub fn from(card: &SelectionCard) -> Self {
        Self {
            id: card.id.to_string(),
            name: card.name.to_string(),
            address: card.address.clone(),
            distance: card.distance.to_string(),
            connectors: card
                .connectors
                .iter()
                .map(|connector| connector.to_string())
                .collect(),
            destination: card.destination,
        }
    }
}

#[test]
fn card_labels_test() {
    use chargemap::{dataset::models::DatasetCharger, repository::Charger};

    let charger: Charger = DatasetCharger {
        id: "7".into(),
        name: "Harbour".into(),
        address: "Quay ROAD 1".into(),
        latitude: 0.0,
        longitude: 1.0,
        connector_types: vec!["Type2-4".into(), "CCS".into()],
    }
    .into();
    let origin = Coordinate::from((0.0, 0.0));
    let card = CardDto::from(&SelectionCard::from(&charger, Some(&origin)));
    assert_eq!(card.address, "quay road 1");
    assert_eq!(card.distance, "111.19 km");
    assert_eq!(card.connectors, vec!["Type2 (4 unit)", "CCS"]);
}
