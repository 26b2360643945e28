use chargemap::{
    engine::{Event, SELECTION_CAPACITY, Session},
    location::{self, FixedLocation, LocationProvider, Permission},
    shared::geo::{Coordinate, Distance, Viewport},
};
use chrono::{TimeZone, Utc};

mod common;

const USER: Coordinate = Coordinate {
    latitude: 0.0,
    longitude: 0.0,
};

fn selected_ids(session: &Session) -> Vec<String> {
    session
        .selection()
        .iter()
        .map(|charger| charger.id.to_string())
        .collect()
}

fn filtered_ids(session: &Session) -> Vec<String> {
    session
        .filtered()
        .iter()
        .map(|charger| charger.id.to_string())
        .collect()
}

struct BrokenGps;

impl LocationProvider for BrokenGps {
    fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    fn current_position(&self) -> Result<Coordinate, location::Error> {
        Err(location::Error::Unavailable("no satellites".into()))
    }
}

#[test]
fn comparison_walkthrough_test() {
    let session = common::abc_session().locate(&FixedLocation::new(USER));
    assert_eq!(filtered_ids(&session), vec!["1", "2", "3"]);

    let session = session.reduce(Event::MarkerPressed("1".into()));
    assert_eq!(selected_ids(&session), vec!["1"]);
    let session = session.reduce(Event::MarkerPressed("2".into()));
    assert_eq!(selected_ids(&session), vec!["1", "2"]);
    let session = session.reduce(Event::MarkerPressed("3".into()));
    assert_eq!(selected_ids(&session), vec!["2", "3"]);

    let viewport = *session.viewport();
    let session = session.reduce(Event::QueryChanged("xyz".into()));
    assert!(session.filtered().is_empty());
    assert!(session.selection().is_empty());
    assert_eq!(*session.viewport(), viewport);
}

#[test]
fn selection_never_exceeds_capacity_test() {
    let mut session = common::abc_session().locate(&FixedLocation::new(USER));
    for id in ["1", "2", "3", "2", "1", "1", "3", "2", "3", "1"] {
        session.dispatch(Event::MarkerPressed(id.into()));
        assert!(session.selection().len() <= SELECTION_CAPACITY);
    }
}

#[test]
fn double_toggle_restores_selection_test() {
    let session = common::abc_session()
        .locate(&FixedLocation::new(USER))
        .reduce(Event::MarkerPressed("3".into()));
    let before = selected_ids(&session);
    let session = session
        .reduce(Event::MarkerPressed("1".into()))
        .reduce(Event::MarkerPressed("1".into()));
    assert_eq!(selected_ids(&session), before);
}

#[test]
fn unknown_marker_is_ignored_test() {
    let session = common::abc_session()
        .locate(&FixedLocation::new(USER))
        .reduce(Event::MarkerPressed("42".into()));
    assert!(session.selection().is_empty());
}

#[test]
fn denied_location_stays_unlocated_test() {
    let session = common::abc_session().locate(&FixedLocation::denied());
    assert!(!session.is_located());
    assert!(session.chargers().is_empty());
    assert!(session.markers().is_empty());
    assert_eq!(*session.viewport(), Viewport::default());
}

#[test]
fn failed_fix_stays_unlocated_test() {
    let session = common::abc_session().locate(&BrokenGps);
    assert!(!session.is_located());
    assert!(session.user_marker().is_none());
}

#[test]
fn first_fix_annotates_and_centers_test() {
    let user = Coordinate::from((0.05, 0.0));
    let session = common::abc_session().locate(&FixedLocation::new(user));
    assert_eq!(session.viewport().center(), user);
    assert_eq!(session.user_marker(), Some(user));
    for charger in session.chargers() {
        assert_eq!(charger.distance, Some(user.distance(&charger.coordinate)));
    }
}

#[test]
fn later_fix_only_moves_card_distance_test() {
    let session = common::abc_session()
        .locate(&FixedLocation::new(USER))
        .reduce(Event::MarkerPressed("1".into()));
    let marker_distance = session.markers()[0].distance;
    let viewport = *session.viewport();

    let moved = Coordinate::from((0.0, 0.1));
    let session = session.reduce(Event::LocationFixed(moved));

    // Pins keep the distance from the first fix, cards follow the live location.
    assert_eq!(session.markers()[0].distance, marker_distance);
    assert_eq!(session.selection_cards()[0].distance, Distance::ZERO);
    assert_eq!(*session.viewport(), viewport);
    assert_eq!(session.selection().len(), 1);
}

#[test]
fn query_typed_before_fix_focuses_match_test() {
    let session = common::abc_session()
        .reduce(Event::QueryChanged("gamma".into()))
        .locate(&FixedLocation::new(USER));
    assert_eq!(filtered_ids(&session), vec!["3"]);
    assert_eq!(session.viewport().center(), Coordinate::from((0.0, 0.3)));
}

#[test]
fn focus_on_user_test() {
    let session = common::abc_session()
        .reduce(Event::FocusOnUser)
        .reduce(Event::RegionChangeComplete(Viewport {
            latitude: 5.0,
            longitude: 5.0,
            latitude_delta: 1.0,
            longitude_delta: 1.0,
        }));
    assert_eq!(session.viewport().latitude, 5.0);

    let session = session
        .locate(&FixedLocation::new(USER))
        .reduce(Event::RegionChangeComplete(Viewport {
            latitude: 5.0,
            longitude: 5.0,
            latitude_delta: 1.0,
            longitude_delta: 1.0,
        }))
        .reduce(Event::FocusOnUser);
    assert_eq!(*session.viewport(), Viewport::focused_on(&USER));
}

#[test]
fn markers_follow_selection_test() {
    let session = common::abc_session()
        .locate(&FixedLocation::new(USER))
        .reduce(Event::MarkerPressed("2".into()));
    let markers = session.markers();
    assert_eq!(markers.len(), 3);
    let selected: Vec<_> = markers
        .iter()
        .filter(|marker| marker.selected)
        .map(|marker| marker.id.as_ref())
        .collect();
    assert_eq!(selected, vec!["2"]);
    assert!(markers.iter().all(|marker| marker.badge == 2));
}

#[test]
fn selection_cards_test() {
    let session = common::abc_session()
        .locate(&FixedLocation::new(USER))
        .reduce(Event::MarkerPressed("3".into()));
    let cards = session.selection_cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name.as_ref(), "Gamma Power");
    assert_eq!(cards[0].address, "gamma power street 1");
    assert_eq!(cards[0].destination, Coordinate::from((0.0, 0.3)));
    assert_eq!(cards[0].distance.to_string(), "33.36 km");
    assert_eq!(cards[0].connectors.len(), 2);
}

#[test]
fn snapshot_test() {
    let session = common::abc_session()
        .locate(&FixedLocation::new(USER))
        .reduce(Event::MarkerPressed("1".into()));
    let captured_at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
    let snapshot = session.capture_at(captured_at);
    assert_eq!(snapshot.file_name(), "chargemap-20261019T083000.json");
    assert_eq!(snapshot.markers.len(), 3);
    assert_eq!(snapshot.selection.len(), 1);

    let value: serde_json::Value = serde_json::from_slice(&snapshot.to_bytes().unwrap()).unwrap();
    assert_eq!(value["viewport"]["latitude_delta"], 0.015);
    assert_eq!(value["selection"][0]["id"], "1");
}

#[test]
fn hidden_marker_is_not_selectable_test() {
    let session = common::abc_session()
        .locate(&FixedLocation::new(USER))
        .reduce(Event::QueryChanged("gamma".into()))
        .reduce(Event::MarkerPressed("1".into()));
    assert_eq!(filtered_ids(&session), vec!["3"]);
    assert!(session.selection().is_empty());

    let session = session.reduce(Event::MarkerPressed("3".into()));
    assert_eq!(selected_ids(&session), vec!["3"]);
}
