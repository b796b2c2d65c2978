use serde::Deserialize;
use std::path::PathBuf;

/// Hosts-file resolver settings
///
/// Controls whether the hosts link of the chain is active and which file
/// seeds its table. The table can still be replaced at runtime; this only
/// covers the initial load.
#[derive(Debug, Clone, Deserialize)]
pub struct HostsConfig {
    /// Serve answers from the hosts table before delegating upstream.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Hosts file to load at startup (e.g. "/etc/hosts").
    /// If None, the resolver starts with an empty table.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_enabled() -> bool {
    true
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}
