//! Generation driver and downstream placement queries built on the grid

/// Seeded road carving and block classification
pub mod layout;
/// Object placement sites in world space
pub mod placement;

pub use layout::{CityLayout, LayoutConfig, LayoutSummary};
pub use placement::{PlacementSite, frontage_sites, placement_sites};
