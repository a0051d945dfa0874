//! Shared application state for request handlers.

use std::sync::Arc;

use crate::recommend::RecommendationTable;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RecommendationTable>,
}

impl AppState {
    /// Creates a new application state serving the given recommendation table.
    pub fn new(table: RecommendationTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}
