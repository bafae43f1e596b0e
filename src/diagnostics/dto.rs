use serde::Serialize;

/// Body of `GET /test`. Every field is display text; nothing here is an error.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
