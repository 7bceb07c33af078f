// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for outputting DaSpec run [`Event`]s.

pub mod junit;

use crate::{error::WriterResult, event::Event};

#[doc(inline)]
pub use self::junit::JUnit;

/// Writer of DaSpec run [`Event`]s to some output.
///
/// Events are handled synchronously, one at a time, in the order a runner
/// emits them.
pub trait Writer {
    /// Handles the given [`Event`].
    ///
    /// # Errors
    ///
    /// If producing the output fails.
    fn handle_event(&mut self, event: &Event) -> WriterResult<()>;
}

/// [`Writer`] tracking a number of executed, failed, errored and skipped
/// specs.
pub trait Stats: Writer {
    /// Returns number of finished specs.
    #[must_use]
    fn executed_specs(&self) -> usize;

    /// Returns number of failed specs.
    #[must_use]
    fn failed_specs(&self) -> usize;

    /// Returns number of specs finished with an error.
    #[must_use]
    fn error_specs(&self) -> usize;

    /// Returns number of skipped specs.
    #[must_use]
    fn skipped_specs(&self) -> usize;

    /// Indicates whether there were failures or errors during the run.
    #[must_use]
    fn execution_has_failed(&self) -> bool {
        self.failed_specs() > 0 || self.error_specs() > 0
    }
}
