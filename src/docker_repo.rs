// Docker inventory file reader

use std::path::PathBuf;

/// Reads the docker inventory JSON dropped by the container manager. Every
/// failure mode (missing file, bad UTF-8, bad JSON) degrades to `None`;
/// this source never surfaces an error.
pub struct DockerRepo {
    path: PathBuf,
}

impl DockerRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn read_inventory(&self) -> Option<serde_json::Value> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let text = match std::fs::read_to_string(&path) {
                Ok(t) => t,
                Err(e) => {
                    tracing::debug!(error = %e, path = %path.display(), "docker inventory unreadable");
                    return None;
                }
            };
            match serde_json::from_str(&text) {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::debug!(error = %e, path = %path.display(), "docker inventory not valid JSON");
                    None
                }
            }
        })
        .await
        .unwrap_or(None)
    }
}
