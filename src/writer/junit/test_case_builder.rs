//! Testcase building utilities for JUnit XML writer.

use std::{
    io,
    path::{Component, Path},
};

use derive_more::with_trait::Display;
use quick_xml::events::{BytesEnd, BytesStart, Event as XmlEvent};

use crate::{error::WriterResult, event::Counts};

/// Classname of specs living outside any directory.
pub const DEFAULT_CLASSNAME: &str = "daspec";

/// Outcome of a single spec.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Status {
    /// Spec raised an error.
    #[display("error")]
    Error,

    /// Spec has failed assertions.
    #[display("failed")]
    Failed,

    /// Spec was skipped or executed nothing.
    #[display("skipped")]
    Skipped,

    /// Spec has passed.
    #[display("passed")]
    Passed,
}

impl Status {
    /// Classifies the given [`Counts`] of a finished spec.
    ///
    /// The first matching rule wins: any error, then any failure, then any
    /// skip or nothing executed.
    #[must_use]
    pub const fn of(counts: &Counts) -> Self {
        if counts.error > 0 {
            Self::Error
        } else if counts.failed > 0 {
            Self::Failed
        } else if counts.skipped > 0 || counts.executed == 0 {
            Self::Skipped
        } else {
            Self::Passed
        }
    }

    /// Returns the name of the child element of a `testcase` with this
    /// [`Status`], if any.
    #[must_use]
    pub const fn element(self) -> Option<&'static str> {
        match self {
            Self::Error => Some("error"),
            Self::Failed => Some("failure"),
            Self::Skipped => Some("skipped"),
            Self::Passed => None,
        }
    }
}

/// Single `testcase` of a JUnit XML report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestCase {
    /// Name of the spec, without directory and extension.
    pub name: String,

    /// Dot-separated directory of the spec.
    pub classname: String,

    /// Outcome of the spec.
    pub status: Status,
}

impl TestCase {
    /// Forms a [`TestCase`] out of a finished spec.
    #[must_use]
    pub fn from_spec(identifier: &str, counts: &Counts) -> Self {
        Self {
            name: case_name(identifier),
            classname: class_name(identifier),
            status: Status::of(counts),
        }
    }

    /// Writes this [`TestCase`] as a `testcase` element.
    pub(crate) fn write_xml<W: io::Write>(
        &self,
        writer: &mut quick_xml::Writer<W>,
    ) -> WriterResult<()> {
        writer.write_event(XmlEvent::Start(
            BytesStart::new("testcase").with_attributes([
                ("name", self.name.as_str()),
                ("classname", self.classname.as_str()),
            ]),
        ))?;
        if let Some(element) = self.status.element() {
            writer.write_event(XmlEvent::Empty(BytesStart::new(element)))?;
        }
        writer.write_event(XmlEvent::End(BytesEnd::new("testcase")))?;
        Ok(())
    }
}

/// Derives a `testcase` name from a spec identifier: quotes removed, the last
/// path segment without its extension.
///
/// A trailing `..` segment is kept as is.
#[must_use]
pub fn case_name(identifier: &str) -> String {
    let unquoted = identifier.replace('"', "");
    let path = Path::new(&unquoted);
    if matches!(path.components().next_back(), Some(Component::ParentDir)) {
        return "..".into();
    }
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Derives a `testcase` classname from a spec identifier.
///
/// The identifier is normalized as a path, stripped of its root, its leading
/// `.`/`..` segments and quotes. The remaining directory segments are joined
/// with `.`, or [`DEFAULT_CLASSNAME`] is returned if there are none.
///
/// Every leading `..` left after normalization is dropped, so a spec above the
/// working directory (`../../folder/sub/x.md`) gets `folder.sub` rather than
/// a classname prefixed with dots. Likewise, every separator of the directory
/// becomes a `.`, not only the first one.
#[must_use]
pub fn class_name(identifier: &str) -> String {
    let mut rooted = false;
    let mut segments = Vec::<String>::new();
    for component in Path::new(identifier).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => {
                if segments.last().is_some_and(|s| s != "..") {
                    _ = segments.pop();
                } else if !rooted {
                    segments.push("..".into());
                }
            }
            Component::Normal(s) => {
                segments.push(s.to_string_lossy().into_owned());
            }
        }
    }

    let mut segments = segments
        .into_iter()
        .skip_while(|s| s == "..")
        .enumerate()
        .map(|(i, s)| {
            let s = if i == 0 { s.trim_start_matches('.') } else { s.as_str() };
            s.replace('"', "")
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

    if segments.len() < 2 {
        return DEFAULT_CLASSNAME.into();
    }
    _ = segments.pop();
    segments.join(".")
}
