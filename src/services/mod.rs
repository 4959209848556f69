pub mod attraction_finder;
pub mod directions;
pub mod place_aggregator;
pub mod places;
pub mod ranking;
pub mod route_sampler;

pub use attraction_finder::AttractionFinder;
pub use directions::{DirectionsLookup, GoogleDirectionsClient};
pub use place_aggregator::{NearbySearch, PlaceAggregator};
pub use places::GooglePlacesClient;
