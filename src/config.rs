use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub sources: SourcesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// Directory holding the INI-style status files.
    pub ini_dir: String,
    /// Directory of raw SMART report blobs, one file per disk.
    pub smart_dir: String,
    /// Path to the docker inventory JSON file.
    pub docker_inventory: String,
    /// Ordered list of status files loaded from `ini_dir`.
    #[serde(default = "default_ini_files")]
    pub ini_files: Vec<String>,
}

fn default_ini_files() -> Vec<String> {
    [
        "cpuload.ini",
        "devs.ini",
        "diskload.ini",
        "disks.ini",
        "monitor.ini",
        "network.ini",
        "shares.ini",
        "users.ini",
        "var.ini",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.sources.ini_dir.is_empty(),
            "sources.ini_dir must be non-empty"
        );
        anyhow::ensure!(
            !self.sources.smart_dir.is_empty(),
            "sources.smart_dir must be non-empty"
        );
        anyhow::ensure!(
            !self.sources.docker_inventory.is_empty(),
            "sources.docker_inventory must be non-empty"
        );
        anyhow::ensure!(
            !self.sources.ini_files.is_empty(),
            "sources.ini_files must list at least one file"
        );
        anyhow::ensure!(
            self.sources.ini_files.iter().all(|f| !f.is_empty()),
            "sources.ini_files must not contain empty names"
        );
        Ok(())
    }
}
