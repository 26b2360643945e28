pub mod dataset;
pub mod engine;
pub mod location;
pub mod navigation;
pub mod repository;
pub mod shared;
pub mod snapshot;

pub mod prelude {
    pub use crate::dataset::Dataset;
    pub use crate::engine::{Event, Session};
    pub use crate::location::{FixedLocation, LocationProvider, Permission};
    pub use crate::navigation::{Launcher, Platform};
    pub use crate::repository::{Charger, Connector, Repository};
    pub use crate::shared::{Coordinate, Distance, Viewport};
    pub use crate::snapshot::Snapshot;
}
