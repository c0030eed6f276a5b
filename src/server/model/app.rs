use sea_orm::DatabaseConnection;

/// Shared state handed to every handler, the connection pool is the only shared resource
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
