// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Key occurrences in a lifecycle of a [DaSpec] run.
//!
//! The top-level enum here is [`Event`]. Only [`Event::SpecEnded`] and
//! [`Event::SuiteEnded`] carry anything a report is built from, the rest are
//! delivered for completeness and ignored by [`JUnit`].
//!
//! [`JUnit`]: crate::writer::JUnit
//! [DaSpec]: https://daspec.com

use derive_more::with_trait::Display;
use serde::Deserialize;

/// Assertion counts of a single spec or of a whole suite, as reported by the
/// runner.
///
/// Absent fields are deserialized as zero.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(default)]
pub struct Counts {
    /// Number of passed assertions.
    pub passed: usize,

    /// Number of executed assertions.
    pub executed: usize,

    /// Number of failed assertions.
    pub failed: usize,

    /// Number of errors raised while running.
    pub error: usize,

    /// Number of skipped assertions.
    pub skipped: usize,
}

impl Counts {
    /// Creates [`Counts`] of `n` executed and passed assertions.
    #[must_use]
    pub const fn passed(n: usize) -> Self {
        Self {
            passed: n,
            executed: n,
            failed: 0,
            error: 0,
            skipped: 0,
        }
    }
}

/// Name of an [`Event`], used as a listener key by an [`EventSource`].
///
/// [`EventSource`]: crate::observer::EventSource
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum EventKind {
    /// Run has been started.
    #[display("suiteStarted")]
    SuiteStarted,

    /// Single spec has been started.
    #[display("specStarted")]
    SpecStarted,

    /// Single spec has been finished.
    #[display("specEnded")]
    SpecEnded,

    /// Whole run has been finished.
    #[display("suiteEnded")]
    SuiteEnded,
}

/// Top-level DaSpec run event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// Run has been started.
    SuiteStarted,

    /// Spec with the given identifier has been started.
    SpecStarted {
        /// Identifier (usually a file path) of the spec.
        identifier: String,
    },

    /// Spec with the given identifier has been finished.
    SpecEnded {
        /// Identifier (usually a file path) of the spec.
        identifier: String,

        /// Assertion counts of the spec.
        counts: Counts,
    },

    /// Whole run has been finished, optionally with aggregated counts.
    SuiteEnded(Option<Counts>),
}

impl Event {
    /// Creates a new [`Event::SpecEnded`].
    #[must_use]
    pub fn spec_ended(identifier: impl Into<String>, counts: Counts) -> Self {
        Self::SpecEnded {
            identifier: identifier.into(),
            counts,
        }
    }

    /// Returns the [`EventKind`] of this [`Event`].
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::SuiteStarted => EventKind::SuiteStarted,
            Self::SpecStarted { .. } => EventKind::SpecStarted,
            Self::SpecEnded { .. } => EventKind::SpecEnded,
            Self::SuiteEnded(_) => EventKind::SuiteEnded,
        }
    }

    /// Returns the runner's name of this [`Event`], like `specEnded`.
    #[must_use]
    pub fn name(&self) -> String {
        self.kind().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_counts_default_to_zero() {
        let counts: Counts =
            serde_json::from_str(r#"{"passed": 3, "executed": 6, "failed": 2}"#)
                .unwrap();

        assert_eq!(
            counts,
            Counts { passed: 3, executed: 6, failed: 2, error: 0, skipped: 0 },
        );
    }

    #[test]
    fn event_names_follow_runner_vocabulary() {
        assert_eq!(Event::spec_ended("a.md", Counts::default()).name(), "specEnded");
        assert_eq!(Event::SuiteEnded(None).name(), "suiteEnded");
        assert_eq!(Event::SuiteStarted.name(), "suiteStarted");
        assert_eq!(
            Event::SpecStarted { identifier: "a.md".into() }.kind(),
            EventKind::SpecStarted,
        );
    }
}
