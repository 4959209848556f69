pub mod coordinates;
pub mod place;
pub mod route;

pub use coordinates::Coordinates;
pub use place::{CandidatePlace, Pick, ScoredPlace};
pub use route::{AttractionsRequest, AttractionsResponse, Route, RouteSummary, SearchParams};
