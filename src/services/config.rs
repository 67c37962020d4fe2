use crate::domain::constants::{
    CONFIG_DIR, CONFIG_FILE_NAME, DEFAULT_VALIDITY_WINDOW_SECS, REFERENCE_CAMPUS_POLYGON,
};
use crate::domain::models::{CampusConfigFile, ConfigReport, Coordinate};
use crate::geofence::{CampusBoundary, GeofenceEngine};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Effective campus configuration after defaults are applied.
#[derive(Debug, Clone)]
pub struct CampusConfig {
    pub source: PathBuf,
    pub from_file: bool,
    pub validity_window: Duration,
    pub boundary: CampusBoundary,
}

impl CampusConfig {
    pub fn engine(&self) -> GeofenceEngine {
        GeofenceEngine::new(self.boundary.clone())
    }

    pub fn report(&self) -> ConfigReport {
        ConfigReport {
            source: self.source.to_string_lossy().to_string(),
            from_file: self.from_file,
            validity_window_secs: self.validity_window.as_secs(),
            boundary: self.boundary.vertices().to_vec(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE_NAME))
}

pub fn resolve_config_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

pub fn load_config(path: &Path) -> anyhow::Result<CampusConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no campus config, using reference campus");
        return Ok(from_file(path, CampusConfigFile::default(), false));
    }
    let raw = std::fs::read_to_string(path)?;
    let file: CampusConfigFile = toml::from_str(&raw)?;
    tracing::debug!(path = %path.display(), "loaded campus config");
    Ok(from_file(path, file, true))
}

fn from_file(path: &Path, file: CampusConfigFile, from_file: bool) -> CampusConfig {
    let boundary = match file.boundary {
        Some(vertices) => CampusBoundary::new(vertices),
        None => CampusBoundary::reference(),
    };
    CampusConfig {
        source: path.to_path_buf(),
        from_file,
        validity_window: Duration::from_secs(
            file.validity_window_secs
                .unwrap_or(DEFAULT_VALIDITY_WINDOW_SECS),
        ),
        boundary,
    }
}

pub fn default_config_file() -> CampusConfigFile {
    CampusConfigFile {
        validity_window_secs: Some(DEFAULT_VALIDITY_WINDOW_SECS),
        boundary: Some(
            REFERENCE_CAMPUS_POLYGON
                .iter()
                .map(|&(lat, lon)| Coordinate::new(lat, lon))
                .collect(),
        ),
    }
}

pub fn write_default_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(&default_config_file())?)?;
    Ok(())
}
