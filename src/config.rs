use std::collections::BTreeMap;
use std::path::PathBuf;

use ini::Ini;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::platform;

/// Section whose keys apply to every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

// ---------------------------------------------------------------------------
// Config – section → key → value
// ---------------------------------------------------------------------------

/// An INI document. Lookups fall back to the `DEFAULT` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Config {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document written on first use: `[DEFAULT] dark_mode = true`.
    pub fn with_defaults() -> Self {
        let mut config = Config::new();
        config.set(DEFAULT_SECTION, "dark_mode", "true");
        config
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|props| props.get(key))
            .or_else(|| {
                self.sections
                    .get(DEFAULT_SECTION)
                    .and_then(|props| props.get(key))
            })
            .map(String::as_str)
    }

    /// Insert or replace `key` in `section`.
    ///
    /// Values are stored as given, but INI files drop leading and trailing
    /// whitespace, so a padded value reads back trimmed after a write.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    pub fn section(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.sections.get(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    fn from_ini(ini: &Ini) -> Self {
        let mut config = Config::new();
        for (section, props) in ini.iter() {
            // Keys above the first header belong to DEFAULT.
            let name = section.unwrap_or(DEFAULT_SECTION);
            for (key, value) in props.iter() {
                config.set(name, key, value);
            }
        }
        config
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        for (name, props) in &self.sections {
            let mut setter = ini.with_section(Some(name.as_str()));
            for (key, value) in props {
                setter.set(key.as_str(), value.as_str());
            }
        }
        ini
    }
}

// ---------------------------------------------------------------------------
// ConfigStore – config files under one directory
// ---------------------------------------------------------------------------

/// Reads and writes config files relative to a base directory, normally
/// the user's home.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the current user's home directory.
    pub fn home() -> Result<Self> {
        platform::home_dir()
            .map(Self::new)
            .ok_or(Error::HomeDirNotFound)
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Read `file_name`, creating it with [`Config::with_defaults`] first if
    /// it does not exist.
    pub fn get_config(&self, file_name: &str) -> Result<Config> {
        let path = self.path(file_name);

        if !path.is_file() {
            Config::with_defaults().to_ini().write_to_file(&path)?;
            log::info!(
                "{file_name} not found. Configuration file created at {}",
                path.display()
            );
        }

        let ini = Ini::load_from_file(&path)?;
        Ok(Config::from_ini(&ini))
    }

    /// Overwrite an existing `file_name` with `content`.
    pub fn write_config(&self, content: &Config, file_name: &str) -> Result<()> {
        let path = self.path(file_name);
        if !path.is_file() {
            return Err(Error::ConfigFileNotFound(path));
        }
        content.to_ini().write_to_file(&path)?;
        Ok(())
    }
}

/// [`ConfigStore::get_config`] on `~/<file_name>`.
pub fn get_config(file_name: &str) -> Result<Config> {
    ConfigStore::home()?.get_config(file_name)
}

/// [`ConfigStore::write_config`] on `~/<file_name>`.
pub fn write_config(content: &Config, file_name: &str) -> Result<()> {
    ConfigStore::home()?.write_config(content, file_name)
}
