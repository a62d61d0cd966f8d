//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It only carries the read-only catalog; every request builds its own
//! `PageView`, so there is nothing mutable to lock.

use std::sync::Arc;

use crate::catalog::Catalog;

/// Read-only catalog handle; cloning shares the same `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::demo())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
