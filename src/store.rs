//! Persistence of the named droplet configurations
//!
//! The store owns one YAML file holding the credential and every droplet
//! configuration. The file must be readable and writable by its owner only;
//! anything broader is refused on load.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_MODE;
use crate::error::AppError;
use crate::models::Configuration;

#[derive(Clone, Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the whole configuration, refusing files with broader than
    /// owner-only permissions.
    pub fn load(&self) -> Result<Configuration, AppError> {
        if !self.exists() {
            return Err(AppError::ConfigNotFound(self.path.clone()));
        }
        check_permissions(&self.path)?;
        let raw = fs::read_to_string(&self.path)?;
        let config = if raw.trim().is_empty() {
            Configuration::default()
        } else {
            serde_yaml::from_str(&raw)?
        };
        tracing::info!(path = %self.path.display(), droplets = config.droplets.len(), "Using config file");
        Ok(config)
    }

    /// Replace the file with the full configuration. The new content is
    /// written next to the target and renamed over it, so a failed write
    /// never leaves a truncated file behind.
    pub fn save(&self, config: &Configuration) -> Result<(), AppError> {
        let yaml = serde_yaml::to_string(config)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(yaml.as_bytes())?;
        tmp.as_file().sync_all()?;
        restrict_permissions(tmp.path())?;
        tmp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;
        tracing::debug!(path = %self.path.display(), "config file written");
        Ok(())
    }

    /// Write a fresh file holding only the credential.
    pub fn create(&self, api_key: &str) -> Result<Configuration, AppError> {
        let config = Configuration::new(api_key);
        self.save(&config)?;
        Ok(config)
    }
}

#[cfg(unix)]
fn check_permissions(path: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(path)?.permissions().mode() & 0o777;
    if mode != CONFIG_FILE_MODE {
        return Err(AppError::InsecurePermissions {
            path: path.to_path_buf(),
            mode,
        });
    }
    Ok(())
}

#[cfg(not(unix))]
fn check_permissions(_path: &Path) -> Result<(), AppError> {
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(CONFIG_FILE_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), AppError> {
    Ok(())
}
