// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of the report writer.
//!
//! Only two things can go wrong: the output path cannot be resolved from the
//! configuration ([`ConfigError`]), or finishing the report fails while
//! serializing or touching the file system ([`WriterError`]).

use std::io;

use derive_more::with_trait::{Display, Error, From};

/// Configuration errors, raised while constructing a [`JUnit`] writer.
///
/// [`JUnit`]: crate::writer::JUnit
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// `junit-xml-file-name` carries no directory and `output-dir` is unset
    /// or empty.
    #[display("output-dir not set")]
    OutputDirNotSet,
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors of finishing a report.
#[derive(Debug, Display, Error, From)]
pub enum WriterError {
    /// I/O error while creating directories or writing the report file.
    ///
    /// The original [`io::Error`] is kept untouched and exposed as the
    /// [`source`](std::error::Error::source) of this error.
    #[display("I/O error: {_0}")]
    Io(io::Error),

    /// Failed to serialize the XML document.
    #[display("XML generation failed: {_0}")]
    Xml(quick_xml::Error),
}

/// Result type alias for writer operations.
pub type WriterResult<T> = Result<T, WriterError>;

impl WriterError {
    /// Returns true if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns the underlying [`io::Error`], if any.
    #[must_use]
    pub const fn as_io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Io(e) => Some(e),
            Self::Xml(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn config_error_message() {
        assert_eq!(ConfigError::OutputDirNotSet.to_string(), "output-dir not set");
    }

    #[test]
    fn io_error_is_passed_through_as_source() {
        let err = WriterError::from(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "read-only",
        ));

        assert!(err.is_io_error());
        assert_eq!(
            err.as_io_error().map(io::Error::kind),
            Some(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("read-only"));
        assert_eq!(err.to_string(), "I/O error: read-only");
    }
}
