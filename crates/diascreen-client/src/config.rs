use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use diascreen_remote::ApiEndpoint;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "com.diascreen.client";
const FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Base address of the prediction service, with scheme.
    pub api_url: String,
    pub created_at: jiff::Timestamp,
}

impl ClientConfig {
    pub fn new(endpoint: &ApiEndpoint) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            api_url: endpoint.to_string(),
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn endpoint(&self) -> eyre::Result<ApiEndpoint> {
        ApiEndpoint::parse(&self.api_url)
            .map_err(|e| eyre::eyre!("config holds an unusable api_url: {e}"))
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(FILE_NAME))
}

pub fn load_config() -> eyre::Result<Option<ClientConfig>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }
    load_config_from(&path).map(Some)
}

pub fn load_config_from(path: &Path) -> eyre::Result<ClientConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Migrations run on raw JSON before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version = u32::try_from(on_disk_version)
        .map_err(|_| eyre::eyre!("config_version {on_disk_version} is out of range"))?;

    let migrated = migrate(json, on_disk_version)?;
    Ok(serde_json::from_value(migrated)?)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each step is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update diascreen."
        ));
    }

    // v0 → v1: `server` (host:port) becomes `api_url` with a scheme.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        if !obj.contains_key("api_url") {
            let server = obj
                .remove("server")
                .and_then(|v| v.as_str().map(str::to_string))
                .ok_or_else(|| eyre::eyre!("v0 config has no server address"))?;
            let api_url = if server.contains("://") {
                server
            } else {
                format!("http://{server}")
            };
            obj.insert("api_url".to_string(), serde_json::Value::String(api_url));
        }
        obj.entry("created_at")
            .or_insert_with(|| serde_json::Value::String(jiff::Timestamp::now().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (server renamed to api_url)");
    }

    Ok(json)
}

pub fn save_config(config: &ClientConfig) -> eyre::Result<PathBuf> {
    save_config_to(&config_dir()?, config)
}

/// Write `config.json` into `dir`, stamped with the current version.
pub fn save_config_to(dir: &Path, config: &ClientConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(FILE_NAME);
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join(format!("{FILE_NAME}.tmp"));
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}

pub fn delete_config() -> eyre::Result<()> {
    let path = config_path()?;
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}

/// Where the service address came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    Environment,
    ConfigFile,
}

/// Resolve the service address: environment first, then the config file.
pub fn resolve_endpoint() -> eyre::Result<(ApiEndpoint, EndpointSource)> {
    let env_value = std::env::var(ApiEndpoint::ENV_VAR).ok();
    resolve_endpoint_with(env_value.as_deref(), &config_path()?)
}

/// [`resolve_endpoint`] with the environment value and file location
/// supplied by the caller.
pub fn resolve_endpoint_with(
    env_value: Option<&str>,
    config_path: &Path,
) -> eyre::Result<(ApiEndpoint, EndpointSource)> {
    if let Some(raw) = env_value.filter(|v| !v.trim().is_empty()) {
        let endpoint = ApiEndpoint::parse(raw)
            .map_err(|e| eyre::eyre!("{} is set but invalid: {e}", ApiEndpoint::ENV_VAR))?;
        return Ok((endpoint, EndpointSource::Environment));
    }

    if config_path.exists() {
        let config = load_config_from(config_path)?;
        return Ok((config.endpoint()?, EndpointSource::ConfigFile));
    }

    Err(eyre::eyre!(
        "no service address configured: set {} or run `diascreen configure --api-url <url>`",
        ApiEndpoint::ENV_VAR
    ))
}
