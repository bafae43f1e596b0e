use crate::config::AppConfig;
use crate::diagnostics::probe::DatabaseHandle;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub database: DatabaseHandle,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let database = DatabaseHandle::from_config(&config);
        Ok(Self::from_parts(config, database))
    }

    pub fn from_parts(config: Arc<AppConfig>, database: DatabaseHandle) -> Self {
        Self { config, database }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 8000,
            database_url: None,
            database_name: None,
        });
        Self::from_parts(config, DatabaseHandle::Absent)
    }
}
