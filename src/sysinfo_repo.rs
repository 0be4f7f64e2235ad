// System probes via sysinfo (psutil equivalent)

use crate::models::*;
use std::sync::Arc;
use sysinfo::{Components, Networks, System};

pub struct SysinfoRepo {
    sys: Arc<std::sync::Mutex<System>>,
    components: Arc<std::sync::Mutex<Components>>,
    networks: Arc<std::sync::Mutex<Networks>>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn epoch_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        let components = Components::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();
        Self {
            sys: Arc::new(std::sync::Mutex::new(sys)),
            components: Arc::new(std::sync::Mutex::new(components)),
            networks: Arc::new(std::sync::Mutex::new(networks)),
        }
    }

    pub async fn get_cpu_stats(&self) -> anyhow::Result<CpuStats> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_cpu_all();
            std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
            sys.refresh_cpu_all();

            let core_util: Vec<f64> = sys
                .cpus()
                .iter()
                .map(|c| (c.cpu_usage() as f64).clamp(0.0, 100.0))
                .collect();
            let physical = System::physical_core_count().unwrap_or(0) as u32;
            let logical = sys.cpus().len() as u32;

            Ok(CpuStats {
                epoch: epoch_ms(),
                core_util,
                physical_cores: physical,
                logical_cores: logical,
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    pub async fn get_memory_stats(&self) -> anyhow::Result<MemoryStats> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_memory();

            let total = sys.total_memory();
            let available = sys.available_memory();
            let free = sys.free_memory();
            let used = total.saturating_sub(available);
            let usage_percent = if total > 0 {
                (used as f64 / total as f64) * 100.0
            } else {
                0.0
            };

            let swap_total = sys.total_swap();
            let swap_used = sys.used_swap();
            let swap_free = sys.free_swap();
            let swap_percent = if swap_total > 0 {
                (swap_used as f64 / swap_total as f64) * 100.0
            } else {
                0.0
            };

            Ok(MemoryStats {
                epoch: epoch_ms(),
                virtual_: VirtualMemory {
                    total,
                    available,
                    used,
                    free,
                    usage_percent,
                },
                swap: SwapMemory {
                    total: swap_total,
                    used: swap_used,
                    free: swap_free,
                    usage_percent: swap_percent,
                },
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    pub async fn get_temperature_stats(&self) -> anyhow::Result<TemperatureStats> {
        let components = self.components.clone();
        tokio::task::spawn_blocking(move || {
            let mut components_guard = components
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo components lock poisoned: {}", e))?;
            components_guard.refresh(false);
            let sensors: Vec<SensorStat> = components_guard
                .list()
                .iter()
                .map(|c| SensorStat {
                    label: c.label().to_string(),
                    temperature: c.temperature().unwrap_or(0.0) as f64,
                    max: c.max().unwrap_or(0.0) as f64,
                    critical: c.critical().map(|v| v as f64),
                })
                .collect();

            Ok(TemperatureStats {
                epoch: epoch_ms(),
                sensors,
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    pub async fn get_network_stats(&self) -> anyhow::Result<NetworkStats> {
        let networks = self.networks.clone();
        tokio::task::spawn_blocking(move || {
            let mut networks_guard = networks
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo networks lock poisoned: {}", e))?;
            networks_guard.refresh(true);
            let interfaces: Vec<InterfaceStat> = networks_guard
                .list()
                .iter()
                .map(|(name, data)| InterfaceStat {
                    name: name.clone(),
                    mac_address: data.mac_address().to_string(),
                    ipv4: data
                        .ip_networks()
                        .iter()
                        .filter(|n| n.addr.is_ipv4())
                        .map(|n| n.addr.to_string())
                        .collect(),
                    ipv6: data
                        .ip_networks()
                        .iter()
                        .filter(|n| n.addr.is_ipv6())
                        .map(|n| n.addr.to_string())
                        .collect(),
                    bytes_sent: data.total_transmitted(),
                    bytes_recv: data.total_received(),
                    packets_sent: data.total_packets_transmitted(),
                    packets_recv: data.total_packets_received(),
                    errors_in: data.total_errors_on_received(),
                    errors_out: data.total_errors_on_transmitted(),
                })
                .collect();

            Ok(NetworkStats {
                epoch: epoch_ms(),
                interfaces,
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }
}
