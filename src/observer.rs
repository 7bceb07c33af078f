// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Event sources a report writer subscribes to.
//!
//! A runner exposes an [`EventSource`] and calls its listeners synchronously,
//! one [`Event`] at a time, in the order the events happen.
//! [`Observable`] is a minimal registry implementing it.

use std::fmt;

use crate::{
    error::WriterError,
    event::{Event, EventKind},
};

/// Listener callback registered on an [`EventSource`].
pub type Handler<'h> = Box<dyn FnMut(&Event) -> Result<(), WriterError> + 'h>;

/// Source of [`Event`]s offering named subscriptions.
pub trait EventSource<'h> {
    /// Registers the `handler` to be called for every [`Event`] of the given
    /// [`EventKind`].
    fn add_event_listener(&mut self, kind: EventKind, handler: Handler<'h>);
}

/// Registry dispatching [`Event`]s to the listeners of their [`EventKind`].
#[derive(Default)]
pub struct Observable<'h> {
    listeners: Vec<(EventKind, Handler<'h>)>,
}

impl fmt::Debug for Observable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field(
                "listeners",
                &self.listeners.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<'h> Observable<'h> {
    /// Creates an empty [`Observable`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls every listener registered for the `event`'s [`EventKind`], in
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns the first error returned by a listener. Listeners after the
    /// failed one aren't called.
    pub fn dispatch_event(&mut self, event: &Event) -> Result<(), WriterError> {
        let kind = event.kind();
        for (_, handler) in self.listeners.iter_mut().filter(|(k, _)| *k == kind)
        {
            handler(event)?;
        }
        Ok(())
    }

    /// Returns number of listeners registered for the given [`EventKind`].
    #[must_use]
    pub fn listeners_of(&self, kind: EventKind) -> usize {
        self.listeners.iter().filter(|(k, _)| *k == kind).count()
    }
}

impl<'h> EventSource<'h> for Observable<'h> {
    fn add_event_listener(&mut self, kind: EventKind, handler: Handler<'h>) {
        self.listeners.push((kind, handler));
    }
}
