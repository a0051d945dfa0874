//! Recommendation service.
//!
//! Serves a liveness probe and a `/recommend` endpoint that returns a fixed
//! list of items for a campus module (library, food court, store).

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod recommend;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use recommend::{RecommendRequest, RecommendResponse, RecommendationTable};
pub use routes::create_router;
pub use state::AppState;
