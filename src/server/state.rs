//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use std::sync::Arc;

use super::data::store::SeriesStore;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: the store sits behind an `Arc`, and the SeaORM-backed store
/// itself wraps a pooled connection.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend for series.
    ///
    /// Injected at startup so tests can substitute an in-memory store.
    pub store: Arc<dyn SeriesStore>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: Arc<dyn SeriesStore>) -> Self {
        Self { store }
    }
}
