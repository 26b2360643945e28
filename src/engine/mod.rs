use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

mod selection;
mod view;
pub use selection::*;
pub use view::*;

use crate::{
    location::{self, LocationProvider},
    repository::{Charger, Repository},
    shared::{
        self,
        geo::{Coordinate, Viewport},
    },
    snapshot::Snapshot,
};

/// Everything the map screen can ask the engine to do.
#[derive(Debug, Clone)]
pub enum Event {
    /// A position came back from the location provider.
    LocationFixed(Coordinate),
    QueryChanged(String),
    ClearSearch,
    /// A charger pin, or the close button of its card, was pressed.
    MarkerPressed(Arc<str>),
    /// The user finished panning or zooming. Replaces the viewport as is.
    RegionChangeComplete(Viewport),
    FocusOnUser,
}

/// State of one map screen. Every transition consumes the session and returns
/// the next one.
#[derive(Debug, Clone, Default)]
pub struct Session {
    repository: Arc<Repository>,
    location: Option<Coordinate>,
    // Annotated at the first location fix and never rebuilt.
    chargers: Arc<[Charger]>,
    filtered: Vec<Charger>,
    selection: Selection,
    query: String,
    viewport: Viewport,
}

impl Session {
    pub fn new(repository: Arc<Repository>) -> Self {
        Self {
            repository,
            ..Default::default()
        }
    }

    /// Asks the provider for a position once. Any failure is logged and leaves
    /// the session unlocated.
    pub fn locate<P: LocationProvider + ?Sized>(self, provider: &P) -> Self {
        match location::acquire(provider) {
            Ok(coordinate) => self.reduce(Event::LocationFixed(coordinate)),
            Err(err) => {
                error!("Failed to acquire location: {err}");
                self
            }
        }
    }

    pub fn reduce(self, event: Event) -> Self {
        debug!("Applying {event:?}");
        match event {
            Event::LocationFixed(coordinate) => self.on_location_fixed(coordinate),
            Event::QueryChanged(query) => self.on_query_changed(query),
            Event::ClearSearch => self.on_query_changed(String::new()),
            Event::MarkerPressed(id) => self.toggle(&id),
            Event::RegionChangeComplete(viewport) => Self { viewport, ..self },
            Event::FocusOnUser => self.focus_on_user(),
        }
    }

    /// In place version of [`Session::reduce`].
    pub fn dispatch(&mut self, event: Event) {
        let session = std::mem::take(self);
        *self = session.reduce(event);
    }

    fn on_location_fixed(mut self, coordinate: Coordinate) -> Self {
        let first_fix = self.location.is_none();
        self.location = Some(coordinate);
        if !first_fix {
            return self;
        }
        self.viewport = self.viewport.recentered(&coordinate);
        self.chargers = self.repository.annotate(&coordinate).into();
        info!(
            "Located at {coordinate}, {} chargers annotated",
            self.chargers.len()
        );
        self.refilter()
    }

    fn on_query_changed(mut self, query: String) -> Self {
        if query == self.query {
            return self;
        }
        self.query = query;
        self.refilter()
    }

    /// Recomputes the filtered chargers from the current query, clears the
    /// selection, and moves the map to the first match. A blank query or a
    /// search without matches leaves the viewport where it is.
    pub fn refilter(mut self) -> Self {
        self.filtered = shared::filter_by_name(&self.query, &self.chargers);
        if !shared::is_blank(&self.query)
            && let Some(first) = self.filtered.first()
        {
            self.viewport = Viewport::focused_on(&first.coordinate);
        }
        self.selection = Selection::new();
        self
    }

    // Only drawn pins can be pressed, and every selected charger is drawn
    // because a query change clears the selection.
    fn toggle(mut self, id: &str) -> Self {
        match self.filtered.iter().find(|charger| charger.id.as_ref() == id) {
            Some(charger) => {
                self.selection = self.selection.toggle(charger.clone());
            }
            None => warn!("No visible charger with id {id} to toggle"),
        }
        self
    }

    fn focus_on_user(mut self) -> Self {
        if let Some(location) = &self.location {
            self.viewport = Viewport::focused_on(location);
        }
        self
    }

    pub fn location(&self) -> Option<&Coordinate> {
        self.location.as_ref()
    }

    pub fn is_located(&self) -> bool {
        self.location.is_some()
    }

    pub fn chargers(&self) -> &[Charger] {
        &self.chargers
    }

    pub fn filtered(&self) -> &[Charger] {
        &self.filtered
    }

    pub fn selection(&self) -> &[Charger] {
        self.selection.as_slice()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn charger_by_id(&self, id: &str) -> Option<&Charger> {
        self.chargers
            .iter()
            .find(|charger| charger.id.as_ref() == id)
            .or_else(|| self.repository.charger_by_id(id))
    }

    /// Pins for the filtered chargers. Nothing is drawn until the user is located.
    pub fn markers(&self) -> Vec<Marker> {
        if !self.is_located() {
            return Vec::new();
        }
        self.filtered
            .iter()
            .map(|charger| Marker::from(charger, self.selection.contains(&charger.id)))
            .collect()
    }

    /// Position of the "you are here" pin.
    pub fn user_marker(&self) -> Option<Coordinate> {
        self.location
    }

    pub fn selection_cards(&self) -> Vec<SelectionCard> {
        self.selection
            .iter()
            .map(|charger| SelectionCard::from(charger, self.location.as_ref()))
            .collect()
    }

    pub fn capture(&self) -> Snapshot {
        self.capture_at(Utc::now())
    }

    pub fn capture_at(&self, captured_at: DateTime<Utc>) -> Snapshot {
        Snapshot {
            captured_at,
            viewport: self.viewport,
            location: self.location,
            query: self.query.clone(),
            markers: self.markers(),
            selection: self.selection_cards(),
        }
    }
}
