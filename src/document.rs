//! The in-memory configuration document.
//!
//! [`ConfigDocument`] models the INI file as an ordered mapping from
//! section name to an ordered mapping from key to optional value. A key
//! with no value (a bare key) survives a load/save cycle untouched, which
//! is how comment-like placeholder lines in the file are preserved across
//! rewrites.

use std::fs;
use std::io;
use std::path::Path;

use configparser::ini::Ini;

use crate::error::ConfigError;
use crate::utils::write_secure;
use crate::Result;

/// Sections guaranteed to exist after any load.
pub const REQUIRED_SECTIONS: [&str; 3] = ["global", "auth", "napps"];

/// Ordered section/key/value model of the configuration file.
///
/// Section and key lookups are case-sensitive so that custom sections
/// round-trip exactly as written.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    ini: Ini,
}

impl ConfigDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { ini: Ini::new_cs() }
    }

    /// Parse a document from INI text.
    pub fn parse(content: &str) -> Result<Self> {
        let mut ini = Ini::new_cs();
        ini.read(content.to_string()).map_err(ConfigError::parse)?;
        Ok(Self { ini })
    }

    /// Load the document stored at `path`.
    ///
    /// A missing file is not an error: loading starts from an empty
    /// document. A file that exists but cannot be read or parsed is.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(err) => Err(ConfigError::io(path.to_string_lossy(), err.to_string())),
        }
    }

    /// Add any missing required section as an empty mapping. Idempotent.
    pub fn ensure_sections(&mut self) {
        for section in REQUIRED_SECTIONS {
            self.ini
                .get_mut_map()
                .entry(section.to_string())
                .or_insert_with(Default::default);
        }
    }

    /// Value stored under `section.key`, if the key carries one.
    ///
    /// Returns `None` both for absent keys and for bare keys; use
    /// [`has`](Self::has) to distinguish the two.
    pub fn get(&self, section: &str, key: &str) -> Option<String> {
        self.ini.get(section, key)
    }

    /// Whether `section.key` exists at all, bare keys included.
    pub fn has(&self, section: &str, key: &str) -> bool {
        self.ini
            .get_map_ref()
            .get(section)
            .map_or(false, |keys| keys.contains_key(key))
    }

    /// Set `section.key` to `value`, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.setstr(section, key, Some(value));
    }

    /// Remove `section.key`. Removing an absent key is a no-op.
    pub fn remove(&mut self, section: &str, key: &str) {
        self.ini.remove_key(section, key);
    }

    /// Section names in file order.
    pub fn sections(&self) -> Vec<String> {
        self.ini.sections()
    }

    /// Render the document back to INI text.
    pub fn to_ini_string(&self) -> String {
        self.ini.writes()
    }

    /// Persist the document to `path` with owner-only permissions.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_secure(path, &self.to_ini_string())
            .map_err(|err| ConfigError::io(path.to_string_lossy(), err.to_string()))
    }
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self::new()
    }
}
