mod chargers;
mod navigation;
mod search;
mod snapshot;
mod viewport;

pub use chargers::*;
pub use navigation::*;
pub use search::*;
pub use snapshot::*;
pub use viewport::*;

use crate::dto::{CardDto, MapDto, MarkerDto};
use chargemap::engine::Session;

fn map_dto(session: &Session) -> MapDto {
    MapDto {
        user: session.user_marker(),
        markers: session.markers().iter().map(MarkerDto::from).collect(),
    }
}

fn cards_dto(session: &Session) -> Vec<CardDto> {
    session
        .selection_cards()
        .iter()
        .map(CardDto::from)
        .collect()
}
