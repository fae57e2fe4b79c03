use crate::Error;
use motey_core::params;
use std::path::{Path, PathBuf};

/// Controls what happens when the emotes directory does not exist at write time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DirPolicy {
    /// Create the directory, and any missing parent, before writing
    #[default]
    Create,
    /// The directory must already exist, the write fails otherwise
    Require,
}

/// Storage configuration handed to every [`crate::EmoteFileWriter`].
///
/// There is no process-wide default, callers build one explicitly or load
/// it from the environment with [`Config::from_env`].
#[derive(Debug, Clone)]
pub struct Config {
    emotes_dir: PathBuf,
    dir_policy: DirPolicy,
}

impl Config {
    pub fn new(emotes_dir: impl AsRef<Path>) -> Self {
        Self {
            emotes_dir: emotes_dir.as_ref().to_path_buf(),
            dir_policy: DirPolicy::default(),
        }
    }

    pub fn with_dir_policy(mut self, policy: DirPolicy) -> Self {
        self.dir_policy = policy;
        self
    }

    /// Loads the configuration from process environment variables.
    ///
    /// `MOTEY_EMOTES_DIR` is mandatory, `MOTEY_CREATE_DIR` is optional and
    /// accepts `true`, `false`, `1` or `0`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but values are resolved through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let emotes_dir = lookup(params::EMOTES_DIR_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                Error::missing_config(format!("`{}` is not set", params::EMOTES_DIR_ENV))
            })?;

        let mut config = Self::new(emotes_dir);

        if let Some(value) = lookup(params::CREATE_DIR_ENV) {
            config.dir_policy = match value.trim() {
                "true" | "1" => DirPolicy::Create,
                "false" | "0" => DirPolicy::Require,
                other => {
                    return Err(Error::missing_config(format!(
                        "`{}` has invalid value `{}`",
                        params::CREATE_DIR_ENV,
                        other
                    )));
                }
            };
        }

        Ok(config)
    }

    pub fn emotes_dir(&self) -> &Path {
        &self.emotes_dir
    }

    pub fn dir_policy(&self) -> DirPolicy {
        self.dir_policy
    }
}
