use std::sync::Arc;

use db::LogItemStore;

/// API documentation routes.
pub(crate) mod docs;

/// Readiness and liveness probe routes.
pub(crate) mod health;

/// Log item management routes.
pub(crate) mod log_items;

/// Log item store shared between all request handlers.
pub(crate) type SharedStore = Arc<dyn LogItemStore>;
