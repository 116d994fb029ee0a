//! Application state management.
//!
//! The shared state passed to route constructors: configuration plus the
//! database connection pool. Cloning is cheap (Arc clones all the way down).

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// SeaORM connection pool
    pub db: DatabaseConnection,
}
