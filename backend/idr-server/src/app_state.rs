use idr_service::{DirectoryService, ShutdownCoordinator};
use idr_store::SnapshotManager;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: DirectoryService,
    pub snapshots: SnapshotManager,
    pub shutdown: ShutdownCoordinator,
}

impl AppState {
    pub fn new(
        service: DirectoryService,
        snapshots: SnapshotManager,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        Self {
            service,
            snapshots,
            shutdown,
        }
    }
}
