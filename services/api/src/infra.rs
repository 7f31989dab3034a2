use metrics_exporter_prometheus::PrometheusHandle;
use risk_profile::assessments::session::{ArchiveError, ArchivedSession, SessionArchive};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Append-only archive backed by process memory. Stands in for a hosted
/// database until one is wired up.
#[derive(Default)]
pub(crate) struct InMemorySessionArchive {
    records: Mutex<Vec<ArchivedSession>>,
}

impl InMemorySessionArchive {
    pub(crate) fn records(&self) -> Vec<ArchivedSession> {
        self.records.lock().expect("archive mutex poisoned").clone()
    }
}

impl SessionArchive for InMemorySessionArchive {
    fn insert(&self, record: ArchivedSession) -> Result<(), ArchiveError> {
        let mut guard = self.records.lock().expect("archive mutex poisoned");
        guard.push(record);
        Ok(())
    }
}
