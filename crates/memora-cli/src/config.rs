use std::path::{Path, PathBuf};

use memora_analysis::config::AnalyzerConfig;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoraConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub patient_name: String,
    /// Where session and record files live. `None` = the platform data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    pub created_at: jiff::Timestamp,
}

impl MemoraConfig {
    pub fn new(patient_name: impl Into<String>) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            patient_name: patient_name.into(),
            data_dir: None,
            analyzer: AnalyzerConfig::default(),
            created_at: jiff::Timestamp::now(),
        }
    }

    /// The configured data directory, or `<platform data dir>/memora`.
    pub fn resolved_data_dir(&self) -> eyre::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let base =
                    dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
                Ok(base.join("memora"))
            }
        }
    }
}

pub fn default_config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("memora"))
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

pub fn has_config(dir: &Path) -> bool {
    config_path(dir).exists()
}

pub fn load_config(dir: &Path) -> eyre::Result<MemoraConfig> {
    let path = config_path(dir);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version") {
        None => 0,
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| eyre::eyre!("invalid config_version {v} in {}", path.display()))?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: MemoraConfig = serde_json::from_value(migrated)?;
    config
        .analyzer
        .validate()
        .map_err(|e| eyre::eyre!("invalid analyzer settings in {}: {e}", path.display()))?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Memora."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // v0 → v1: hand-written files may omit the version and the patient name
    if from_version < 1 {
        obj.entry("patient_name")
            .or_insert_with(|| serde_json::Value::String(String::new()));
        tracing::info!("migrated config v0 → v1");
    }

    obj.insert(
        "config_version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );

    Ok(json)
}

pub fn save_config(dir: &Path, config: &MemoraConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = config_path(dir);
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
