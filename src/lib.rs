// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod geodesy;
pub mod models;
pub mod polyline;
pub mod report;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use config::FinderConfig;
use services::AttractionFinder;

// App state for sharing across the application
pub struct AppState {
    pub finder: AttractionFinder,
    pub finder_config: FinderConfig,
}
