//! The configuration store.
//!
//! [`ConfigStore`] ties together the document model, the environment
//! snapshot, and the on-disk file: it loads (or seeds) the file at open
//! time, resolves effective values with environment-over-stored-over-default
//! precedence, and performs credential updates as whole-file
//! read-modify-write cycles.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::document::ConfigDocument;
use crate::types::{EnvOverrides, ResolvedConfig};
use crate::utils::expand_tilde;
use crate::Result;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "~/.kytosrc";

/// Registry endpoint used when neither the environment nor the file
/// provides one.
pub const DEFAULT_NAPPS_URI: &str = "https://napps.kytos.io/api/";

/// Fragment appended to the base directory for the default napps tree.
const DEFAULT_NAPPS_SUBDIR: &str = "var/lib/kytos/napps";

/// Directory holding installed napps, beneath the enabled tree.
const INSTALLED_DIRNAME: &str = ".installed";

/// Handle to the configuration file and its resolved in-memory document.
///
/// Opening a store resolves effective values once; the two credential
/// operations work against the on-disk state instead of the resolved
/// document, so external edits made after open are not clobbered.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    debug: bool,
    document: ConfigDocument,
}

impl ConfigStore {
    /// Open the store at the default `~/.kytosrc` location.
    pub fn open() -> Result<Self> {
        Self::open_at(DEFAULT_CONFIG_PATH)
    }

    /// Open the store at `path`, expanding a leading `~`.
    ///
    /// A missing or empty file is not an error: the store starts from an
    /// empty document, stubs the required sections, and persists the result
    /// with mode 0600. A file that exists but cannot be read or parsed
    /// fails the open.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expand_tilde(path.as_ref());
        let existed = path.exists();

        let mut document = ConfigDocument::load(&path)?;
        document.ensure_sections();

        if !existed {
            warn!("config file {} not found", path.display());
            warn!("creating a new empty config file");
            document.save(&path)?;
        }

        let debug = false;
        apply_env_or_defaults(&mut document, &EnvOverrides::from_env(), debug);

        Ok(Self {
            path,
            debug,
            document,
        })
    }

    /// Effective configuration values resolved at open time.
    pub fn resolved(&self) -> ResolvedConfig {
        ResolvedConfig::from_document(&self.document)
    }

    /// The resolved in-memory document.
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Absolute path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether debug mode is on for this store instance.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Persist `user` and `token` into the `auth` section on disk.
    ///
    /// The file is re-read fresh, so edits made outside this store since
    /// open are kept; custom sections and bare keys are written back
    /// untouched. The store's own resolved document is not updated: a
    /// reader of this instance keeps seeing the pre-save values until the
    /// store is reopened.
    pub fn save_credential(&self, user: &str, token: &str) -> Result<()> {
        let mut fresh = ConfigDocument::load(&self.path)?;
        fresh.ensure_sections();
        fresh.set("auth", "user", user);
        fresh.set("auth", "token", token);
        fresh.save(&self.path)
    }

    /// Remove the stored credential pair from the `auth` section on disk.
    ///
    /// Runs the same fresh read-modify-write cycle as
    /// [`save_credential`](Self::save_credential). Clearing an absent
    /// credential is not an error.
    pub fn clear_credential(&self) -> Result<()> {
        let mut fresh = ConfigDocument::load(&self.path)?;
        fresh.ensure_sections();
        fresh.remove("auth", "user");
        fresh.remove("auth", "token");
        fresh.save(&self.path)
    }
}

/// Merge environment overrides, stored values, and built-in defaults into
/// `doc`.
///
/// Precedence is environment over stored over default. The two napps paths
/// are always derived together: whenever the path rule fires, a previously
/// stored `installed_path` is recomputed from the effective `enabled_path`
/// rather than preserved.
fn apply_env_or_defaults(doc: &mut ConfigDocument, env: &EnvOverrides, debug: bool) {
    // The debug flag always reflects this store instance, overwriting any
    // stored value.
    doc.set("global", "debug", if debug { "true" } else { "false" });

    if let Some(user) = &env.user {
        doc.set("auth", "user", user);
    }
    if let Some(token) = &env.token {
        doc.set("auth", "token", token);
    }

    if let Some(uri) = &env.api_uri {
        doc.set("napps", "uri", uri);
    } else if !doc.has("napps", "uri") {
        doc.set("napps", "uri", DEFAULT_NAPPS_URI);
    }

    // NAPPS_PATH and VIRTUAL_ENV treat an empty value as unset.
    let napps_path = env.napps_path.as_deref().filter(|value| !value.is_empty());
    if napps_path.is_some() || !doc.has("napps", "enabled_path") {
        let enabled = match napps_path {
            Some(path) => path.to_string(),
            None => default_napps_path(env),
        };
        let installed = Path::new(&enabled)
            .join(INSTALLED_DIRNAME)
            .to_string_lossy()
            .into_owned();
        doc.set("napps", "enabled_path", &enabled);
        doc.set("napps", "installed_path", &installed);
    }
}

/// `<base>/var/lib/kytos/napps`, where `<base>` is the active virtual
/// environment root when one is set, else the filesystem root.
fn default_napps_path(env: &EnvOverrides) -> String {
    let base = env
        .virtual_env
        .as_deref()
        .filter(|value| !value.is_empty())
        .unwrap_or("/");
    Path::new(base)
        .join(DEFAULT_NAPPS_SUBDIR)
        .to_string_lossy()
        .into_owned()
}
