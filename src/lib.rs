// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    unused_qualifications
)]

//! [JUnit XML report][1] writer for [DaSpec] runs.
//!
//! Subscribe a [`writer::JUnit`] to the runner's `specEnded` and `suiteEnded`
//! events, and it writes a report validating against the JUnit XSD consumed
//! by CI tooling (e.g. Jenkins) once the suite ends:
//!
//! ```rust
//! # use daspec_junit::{event::{Counts, Event}, observer::Observable, writer};
//! # let dir = tempfile::tempdir().unwrap();
//! let cli = writer::junit::Cli::default().with_output_dir(dir.path());
//! let mut runner = Observable::new();
//! let junit = writer::JUnit::attached(&cli, &mut runner)?;
//!
//! runner.dispatch_event(&Event::spec_ended("specs/basic.md", Counts::passed(2)))?;
//! runner.dispatch_event(&Event::SuiteEnded(None))?;
//!
//! assert!(junit.borrow().is_finalized());
//! assert!(dir.path().join("report.xml").is_file());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! [1]: https://llg.cubic.org/docs/junit
//! [DaSpec]: https://daspec.com

pub mod error;
pub mod event;
pub mod observer;
pub mod writer;

#[doc(inline)]
pub use self::{
    error::{ConfigError, WriterError},
    event::{Counts, Event, EventKind},
    observer::{EventSource, Observable},
    writer::{JUnit, Stats, Writer},
};
