// Snapshot aggregation and the shared snapshot holder

use crate::docker_repo::DockerRepo;
use crate::ini_repo::IniRepo;
use crate::models::Snapshot;
use crate::smart_repo::SmartRepo;
use crate::sysinfo_repo::SysinfoRepo;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Collaborators the aggregator pulls from on every build.
pub struct SnapshotDeps {
    pub sysinfo_repo: Arc<SysinfoRepo>,
    pub docker_repo: Arc<DockerRepo>,
    pub ini_repo: Arc<IniRepo>,
    pub smart_repo: Arc<SmartRepo>,
}

/// Owns the current snapshot. Readers clone the `Arc`; refresh builds a
/// fresh snapshot and swaps the reference, so concurrent readers never see
/// a partially built value.
pub struct SnapshotStore {
    deps: SnapshotDeps,
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotStore {
    /// Builds the first snapshot at startup. Probe failures abort here;
    /// ingestion failures are already folded into the snapshot as data.
    pub async fn init(deps: SnapshotDeps) -> anyhow::Result<Self> {
        let first = build_snapshot(&deps).await?;
        Ok(Self {
            deps,
            current: RwLock::new(Arc::new(first)),
        })
    }

    /// The cached snapshot. Stable between refresh calls.
    pub async fn current(&self) -> Arc<Snapshot> {
        self.current.read().await.clone()
    }

    /// Rebuilds from all sources at call time and replaces the cached
    /// snapshot. No incremental merge with the previous value.
    pub async fn refresh(&self) -> anyhow::Result<Arc<Snapshot>> {
        let fresh = Arc::new(build_snapshot(&self.deps).await?);
        *self.current.write().await = fresh.clone();
        Ok(fresh)
    }

    pub fn sysinfo_repo(&self) -> &Arc<SysinfoRepo> {
        &self.deps.sysinfo_repo
    }

    pub fn docker_repo(&self) -> &Arc<DockerRepo> {
        &self.deps.docker_repo
    }

    pub fn smart_repo(&self) -> &Arc<SmartRepo> {
        &self.deps.smart_repo
    }
}

/// Pure function of the six inputs at call time: timestamp, probes, docker
/// inventory, INI set, SMART set. Only probe errors propagate.
async fn build_snapshot(deps: &SnapshotDeps) -> anyhow::Result<Snapshot> {
    let timestamp = chrono::Local::now().to_rfc3339();
    let cpu = deps.sysinfo_repo.get_cpu_stats().await?;
    let memory = deps.sysinfo_repo.get_memory_stats().await?;
    let temp = deps.sysinfo_repo.get_temperature_stats().await?;
    let network = deps.sysinfo_repo.get_network_stats().await?;
    let docker = deps.docker_repo.read_inventory().await;
    let ini = deps.ini_repo.load_all().await;
    let smart = deps.smart_repo.scan().await;

    Ok(Snapshot {
        timestamp,
        cpu,
        memory,
        temp,
        network,
        docker,
        ini,
        smart,
    })
}
