use std::time::Duration;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::diagnostics::{dto::DiagnosticsReport, probe::DatabaseHandle};

const COLLECTION_SAMPLE: i64 = 10;
const ERROR_PREVIEW_CHARS: usize = 50;
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    Absent,
    /// Configured but the client could not even be built.
    Error(String),
    Unreachable(String),
    Working(Vec<String>),
}

pub async fn probe_database(database: &DatabaseHandle) -> ProbeOutcome {
    let probe = match database {
        DatabaseHandle::Absent => {
            debug!("no database configured");
            return ProbeOutcome::Absent;
        }
        DatabaseHandle::Failed(reason) => return ProbeOutcome::Error(reason.clone()),
        DatabaseHandle::Ready(probe) => probe,
    };

    match tokio::time::timeout(PROBE_TIMEOUT, probe.list_collections(COLLECTION_SAMPLE)).await {
        Ok(Ok(mut names)) => {
            names.truncate(COLLECTION_SAMPLE as usize);
            ProbeOutcome::Working(names)
        }
        Ok(Err(e)) => {
            warn!(error = %format!("{e:#}"), "database probe failed");
            ProbeOutcome::Unreachable(format!("{e:#}"))
        }
        Err(_) => {
            warn!(timeout = ?PROBE_TIMEOUT, "database probe timed out");
            ProbeOutcome::Unreachable("probe timed out".into())
        }
    }
}

fn preview(reason: &str) -> String {
    reason.chars().take(ERROR_PREVIEW_CHARS).collect()
}

fn set_or_not(present: bool) -> String {
    let text = if present { "✅ Set" } else { "❌ Not Set" };
    text.to_string()
}

pub fn build_report(outcome: ProbeOutcome, config: &AppConfig) -> DiagnosticsReport {
    let (database, connection_status, collections) = match outcome {
        ProbeOutcome::Absent => ("❌ Not Available".to_string(), "Not Connected", Vec::new()),
        ProbeOutcome::Error(reason) => (
            format!("❌ Error: {}", preview(&reason)),
            "Not Connected",
            Vec::new(),
        ),
        ProbeOutcome::Unreachable(reason) => (
            format!("⚠️  Connected but Error: {}", preview(&reason)),
            "Connected",
            Vec::new(),
        ),
        ProbeOutcome::Working(names) => ("✅ Connected & Working".to_string(), "Connected", names),
    };

    DiagnosticsReport {
        backend: "✅ Running".into(),
        database,
        database_url: set_or_not(config.database_url.is_some()),
        database_name: set_or_not(config.database_name.is_some()),
        connection_status: connection_status.into(),
        collections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::probe::DatabaseProbe;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedProbe(Result<Vec<String>, String>);

    #[async_trait]
    impl DatabaseProbe for FixedProbe {
        async fn list_collections(&self, _limit: i64) -> anyhow::Result<Vec<String>> {
            self.0.clone().map_err(|e| anyhow::anyhow!(e))
        }
    }

    fn config(url: bool, name: bool) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".into(),
            port: 8000,
            database_url: url.then(|| "postgres://localhost/app".into()),
            database_name: name.then(|| "app".into()),
        }
    }

    #[tokio::test]
    async fn absent_probe_reports_not_available() {
        let outcome = probe_database(&DatabaseHandle::Absent).await;
        assert_eq!(outcome, ProbeOutcome::Absent);

        let report = build_report(outcome, &config(false, false));
        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.database, "❌ Not Available");
        assert_eq!(report.connection_status, "Not Connected");
        assert_eq!(report.database_url, "❌ Not Set");
        assert_eq!(report.database_name, "❌ Not Set");
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn working_probe_caps_collection_sample() {
        let names: Vec<String> = (0..15).map(|i| format!("t{i:02}")).collect();
        let probe = DatabaseHandle::Ready(Arc::new(FixedProbe(Ok(names))));
        let outcome = probe_database(&probe).await;

        let report = build_report(outcome, &config(true, true));
        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.collections.len(), 10);
        assert_eq!(report.collections[0], "t00");
        assert_eq!(report.database_url, "✅ Set");
        assert_eq!(report.database_name, "✅ Set");
    }

    #[tokio::test]
    async fn failing_probe_truncates_error_text() {
        let probe = DatabaseHandle::Ready(Arc::new(FixedProbe(Err("x".repeat(120)))));
        let outcome = probe_database(&probe).await;
        assert!(matches!(outcome, ProbeOutcome::Unreachable(_)));

        let report = build_report(outcome, &config(true, false));
        assert_eq!(
            report.database,
            format!("⚠️  Connected but Error: {}", "x".repeat(50))
        );
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.database_name, "❌ Not Set");
    }

    struct StalledProbe;

    #[async_trait]
    impl DatabaseProbe for StalledProbe {
        async fn list_collections(&self, _limit: i64) -> anyhow::Result<Vec<String>> {
            tokio::time::sleep(PROBE_TIMEOUT * 2).await;
            Ok(vec!["late".into()])
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_probe_times_out_as_unreachable() {
        let probe = DatabaseHandle::Ready(Arc::new(StalledProbe));
        let outcome = probe_database(&probe).await;
        assert_eq!(outcome, ProbeOutcome::Unreachable("probe timed out".into()));

        let report = build_report(outcome, &config(true, true));
        assert_eq!(report.database, "⚠️  Connected but Error: probe timed out");
        assert_eq!(report.connection_status, "Connected");
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn unbuildable_client_reports_error_not_absence() {
        let failed = DatabaseHandle::Failed(format!("build postgres pool: {}", "y".repeat(80)));
        let outcome = probe_database(&failed).await;
        assert!(matches!(outcome, ProbeOutcome::Error(_)));

        let report = build_report(outcome, &config(true, false));
        let expected: String = "build postgres pool: "
            .chars()
            .chain(std::iter::repeat('y'))
            .take(50)
            .collect();
        assert_eq!(report.database, format!("❌ Error: {expected}"));
        assert_eq!(report.connection_status, "Not Connected");
        assert_eq!(report.database_url, "✅ Set");
        assert!(report.collections.is_empty());
    }
}
