//! CLI and file configuration for JUnit XML writer.

use std::path::{self, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::error::{ConfigError, ConfigResult};

/// File name of the report if none is configured.
pub const DEFAULT_FILE_NAME: &str = "report.xml";

/// Options of a [`JUnit`] [`Writer`].
///
/// Can be flattened into a host [`clap::Parser`], or deserialized from a
/// configuration mapping with `output-dir` and `junit-xml-file-name` keys.
///
/// [`JUnit`]: super::JUnit
/// [`Writer`]: crate::Writer
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, clap::Args)]
#[group(skip)]
#[serde(default, rename_all = "kebab-case")]
pub struct Cli {
    /// Directory to write the JUnit XML report into.
    #[arg(id = "output-dir", long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// File name of the JUnit XML report, `report.xml` by default.
    ///
    /// A name containing a path separator is used as is, ignoring
    /// `--output-dir`. If given multiple times, the first one is used.
    #[arg(
        id = "junit-xml-file-name",
        long = "junit-xml-file-name",
        value_name = "FILE"
    )]
    #[serde(deserialize_with = "one_or_many")]
    pub junit_xml_file_name: Vec<String>,
}

impl Cli {
    /// Sets the `output-dir` option.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Sets the `junit-xml-file-name` option.
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.junit_xml_file_name = vec![name.into()];
        self
    }

    /// Returns the configured report file name.
    ///
    /// Falls back to [`DEFAULT_FILE_NAME`] if none, or an empty one, is
    /// configured.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.junit_xml_file_name
            .first()
            .filter(|name| !name.is_empty())
            .map_or(DEFAULT_FILE_NAME, String::as_str)
    }

    /// Resolves the path to write the report into.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutputDirNotSet`] if the file name has no directory
    /// part and `output-dir` is unset or empty.
    pub fn output_path(&self) -> ConfigResult<PathBuf> {
        let file_name = self.file_name();
        if file_name.contains(path::is_separator) {
            return Ok(file_name.into());
        }
        self.output_dir
            .as_ref()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(file_name))
            .ok_or(ConfigError::OutputDirNotSet)
    }
}

/// Deserializes either a single string, a sequence of strings or `null`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(name)) => vec![name],
        Some(OneOrMany::Many(names)) => names,
        None => vec![],
    })
}
