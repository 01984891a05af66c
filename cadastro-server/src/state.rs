use crate::templates;

use std::sync::Arc;

use minijinja::Environment;
use sqlx::SqlitePool;

/// Shared application state for the page handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Result<Self, minijinja::Error> {
        Ok(Self {
            pool,
            templates: Arc::new(templates::build_environment()?),
        })
    }
}
