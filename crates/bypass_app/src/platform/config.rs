use std::fs;
use std::path::Path;
use std::time::Duration;

use bypass_client::ClientSettings;
use bypass_logging::{bypass_info, bypass_warn};
use serde::Deserialize;

const CONFIG_FILENAME: &str = "bypass.ron";

/// On-disk settings. Everything is optional; the defaults match the
/// service's out-of-the-box endpoint with no timeouts.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    endpoint: Option<String>,
    connect_timeout_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
}

pub(crate) fn load_client_settings() -> ClientSettings {
    load_from(Path::new(CONFIG_FILENAME))
}

fn load_from(path: &Path) -> ClientSettings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return ClientSettings::default();
        }
        Err(err) => {
            bypass_warn!("Failed to read config from {:?}: {}", path, err);
            return ClientSettings::default();
        }
    };

    let file: ConfigFile = match ron::from_str(&content) {
        Ok(file) => file,
        Err(err) => {
            bypass_warn!("Failed to parse config from {:?}: {}", path, err);
            return ClientSettings::default();
        }
    };

    let mut settings = ClientSettings::default();
    if let Some(endpoint) = file.endpoint {
        settings.endpoint = endpoint;
    }
    settings.connect_timeout = file.connect_timeout_ms.map(Duration::from_millis);
    settings.request_timeout = file.request_timeout_ms.map(Duration::from_millis);
    bypass_info!("Loaded config from {:?}", path);
    settings
}
