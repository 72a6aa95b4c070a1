//! Input configuration.
//!
//! The only input is the `GROUP_ID` environment variable. It is read once, at
//! the boundary, and handed to [`crate::convert`] as a plain string.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Name of the environment variable holding the hex-encoded key.
pub const GROUP_ID_VAR: &str = "GROUP_ID";

/// Output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "key.der";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    group_id: String,
    output: PathBuf,
}

impl Config {
    /// Build a config for `group_id` writing to [`DEFAULT_OUTPUT`].
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Read `GROUP_ID` from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var_os(name))
    }

    /// Read `GROUP_ID` through `lookup` instead of the process environment.
    ///
    /// # Errors
    /// `MissingInput` when the variable is unset, `NonUnicodeInput` when it is
    /// set to something that is not valid UTF-8.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let raw = lookup(GROUP_ID_VAR).ok_or(Error::MissingInput { var: GROUP_ID_VAR })?;
        let group_id = raw
            .into_string()
            .map_err(|_| Error::NonUnicodeInput { var: GROUP_ID_VAR })?;
        Ok(Self::new(group_id))
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}
